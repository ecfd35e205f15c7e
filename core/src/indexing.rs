/// Render an index tuple as the comma-joined decimal label used in failure
/// paths (e.g. `[1, 0, 2]` becomes `"1,0,2"`).
pub fn indices_to_label(indices: &[usize]) -> String {
    let mut label = String::new();
    for (pos, idx) in indices.iter().enumerate() {
        if pos > 0 {
            label.push(',');
        }
        label.push_str(&idx.to_string());
    }
    label
}

/// Parse a comma-joined decimal index label back into an index tuple.
/// Returns `None` for malformed labels.
pub fn label_to_indices(label: &str) -> Option<Vec<usize>> {
    if label.is_empty() {
        return None;
    }

    let mut indices = Vec::new();
    for part in label.split(',') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut value: usize = 0;
        for b in part.bytes() {
            value = value
                .checked_mul(10)?
                .checked_add(usize::from(b - b'0'))?;
        }
        indices.push(value);
    }
    Some(indices)
}
