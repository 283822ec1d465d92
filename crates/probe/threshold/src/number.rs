//! Compact decimal rendering shared by range notation and perf data.

/// Format a number the way plugin output expects it.
///
/// Whole numbers print without a decimal point (`80`, `100000000`), fractions
/// use the shortest representation that parses back to the same value (`34.2`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    format!("{value}")
}
