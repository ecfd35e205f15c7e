//! Stable error-code constants surfaced in [`crate::EquivError`] messages.

pub const CORE_LIMITS_EXCEEDED: &str = "DEQ_CORE_001";
pub const CORE_SINK_ERROR: &str = "DEQ_CORE_002";
pub const CORE_INTERNAL_ERROR: &str = "DEQ_CORE_003";
