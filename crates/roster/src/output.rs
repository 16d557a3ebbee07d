/// Prefix a row with its 1-based position, right-aligned to `width`.
pub fn numbered(index: usize, width: usize, row: &str) -> String {
    format!("{:>width$}. {row}", index + 1)
}

/// Digits needed to print the largest row number.
pub fn number_width(count: usize) -> usize {
    count.max(1).to_string().len()
}
