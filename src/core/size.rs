//! Human-readable byte counts.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const BASE: f64 = 1024.0;

/// Formats a byte count using base-1024 units.
///
/// The value is scaled to the largest unit that keeps it at or above 1 (capped
/// at TB), rounded to two decimals, and printed without trailing zeros:
/// `1536` becomes `"1.5 KB"`, `1048576` becomes `"1 MB"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let index = unit_index(bytes);
    let scaled = bytes as f64 / BASE.powi(index as i32);
    format!("{} {}", trim_decimals(scaled), UNITS[index])
}

/// Integer form of `floor(log1024(bytes))`, clamped to the unit table.
fn unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut threshold: u64 = 1024;
    while index < UNITS.len() - 1 && bytes >= threshold {
        index += 1;
        threshold = match threshold.checked_mul(1024) {
            Some(next) => next,
            None => break,
        };
    }
    index
}

/// Rounds to two decimals, halves away from zero, and prints the shortest
/// form so trailing zeros and a dangling point never appear.
fn trim_decimals(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}
