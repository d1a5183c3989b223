//! Terminal output utilities.

/// Format a value as a quoted, right-aligned field.
///
/// Values wider than `width` are returned quoted but unpadded.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}
