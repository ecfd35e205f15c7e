use crate::report::EquivalencyReport;

pub fn serialize_report(report: &EquivalencyReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

pub fn deserialize_report(json: &str) -> serde_json::Result<EquivalencyReport> {
    serde_json::from_str(json)
}

/// Flatten a report into one human-readable line per failure, in walk order.
pub fn report_to_failure_lines(report: &EquivalencyReport) -> Vec<String> {
    report
        .failures
        .iter()
        .map(|failure| failure.to_string())
        .collect()
}
