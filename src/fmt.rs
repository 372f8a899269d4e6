//! Pure formatting helpers for the report.
//!
//! No I/O and no metric queries here; every function is total over its
//! inputs.

/// Units the byte formatter scales through. The value is divided by 1024
/// once per step; whatever remains past GB is TB below 1024.0 and PB
/// otherwise, with no further scaling.
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a byte count as a human-readable size with one decimal place.
///
/// `0` -> `"0.0 B"`, `1536` -> `"1.5 KB"`, `1024^4` -> `"1.0 TB"`,
/// `1024^5` -> `"1024.0 PB"` (PB is the terminal unit).
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.1} {unit}");
        }
        value /= 1024.0;
    }
    if value < 1024.0 {
        format!("{value:.1} TB")
    } else {
        format!("{value:.1} PB")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_stay_in_bytes() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(1), "1.0 B");
        assert_eq!(format_bytes(512), "512.0 B");
        assert_eq!(format_bytes(1023), "1023.0 B");
    }

    #[test]
    fn scales_through_named_units() {
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.0 MB");
        assert_eq!(format_bytes(1024u64.pow(3)), "1.0 GB");
        assert_eq!(format_bytes(16 * 1024u64.pow(3)), "16.0 GB");
        assert_eq!(format_bytes(1024u64.pow(4)), "1.0 TB");
        assert_eq!(format_bytes(1023 * 1024u64.pow(4)), "1023.0 TB");
    }

    #[test]
    fn rounding_can_reach_the_next_boundary() {
        // 1048575 / 1024 = 1023.999..., which rounds up past the KB cap.
        assert_eq!(format_bytes(1024 * 1024 - 1), "1024.0 KB");
    }

    #[test]
    fn pb_is_terminal_with_no_further_scaling() {
        assert_eq!(format_bytes(1024u64.pow(5)), "1024.0 PB");
        assert_eq!(format_bytes(2 * 1024u64.pow(5)), "2048.0 PB");
        // Total over the whole input range, even at the extreme.
        assert_eq!(format_bytes(u64::MAX), "16777216.0 PB");
    }
}
