//! Formatting utilities for the run summary.

/// Format a count with thousands separators.
///
/// # Examples
///
/// ```
/// use tb_cli_common::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234), "1,234");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Format milliseconds as seconds with two decimals.
///
/// # Examples
///
/// ```
/// use tb_cli_common::format_seconds;
///
/// assert_eq!(format_seconds(1530), "1.53s");
/// ```
pub fn format_seconds(millis: i64) -> String {
    format!("{:.2}s", millis as f64 / 1000.0)
}
