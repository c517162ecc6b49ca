//! Units formatting utilities
//!
//! Human-readable formatting of elapsed seconds and throughput figures.

/// Format elapsed seconds with an appropriate unit.
///
/// # Examples
/// ```
/// use cmrb::util::units::format_seconds;
///
/// assert_eq!(format_seconds(0.000250), "250 μs");
/// assert_eq!(format_seconds(0.0125), "12 ms");
/// assert_eq!(format_seconds(2.5), "2.50 s");
/// ```
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "N/A".to_string();
    }

    if seconds < 0.001 {
        format!("{:.0} μs", seconds * 1_000_000.0)
    } else if seconds < 1.0 {
        format!("{:.0} ms", seconds * 1_000.0)
    } else {
        format!("{:.2} s", seconds)
    }
}

/// Format an operations-per-second figure with an appropriate magnitude.
///
/// Non-finite input (a degenerate zero-duration measurement) renders as
/// "N/A" instead of crashing or printing `inf`.
///
/// # Examples
/// ```
/// use cmrb::util::units::format_ops_per_sec;
///
/// assert_eq!(format_ops_per_sec(950.0), "950.00 ops/s");
/// assert_eq!(format_ops_per_sec(1_500.0), "1.50 Kops/s");
/// assert_eq!(format_ops_per_sec(2_500_000.0), "2.50 Mops/s");
/// assert_eq!(format_ops_per_sec(f64::INFINITY), "N/A");
/// ```
pub fn format_ops_per_sec(ops: f64) -> String {
    if !ops.is_finite() {
        return "N/A".to_string();
    }

    if ops >= 1e9 {
        format!("{:.2} Gops/s", ops / 1e9)
    } else if ops >= 1e6 {
        format!("{:.2} Mops/s", ops / 1e6)
    } else if ops >= 1e3 {
        format!("{:.2} Kops/s", ops / 1e3)
    } else {
        format!("{:.2} ops/s", ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "0 μs");
        assert_eq!(format_seconds(0.000_05), "50 μs");
        assert_eq!(format_seconds(0.005), "5 ms");
        assert_eq!(format_seconds(0.5), "500 ms");
        assert_eq!(format_seconds(1.0), "1.00 s");
        assert_eq!(format_seconds(90.125), "90.12 s");
    }

    #[test]
    fn test_format_seconds_degenerate() {
        assert_eq!(format_seconds(f64::NAN), "N/A");
        assert_eq!(format_seconds(f64::INFINITY), "N/A");
        assert_eq!(format_seconds(-1.0), "N/A");
    }

    #[test]
    fn test_format_ops_per_sec() {
        assert_eq!(format_ops_per_sec(0.0), "0.00 ops/s");
        assert_eq!(format_ops_per_sec(12.5), "12.50 ops/s");
        assert_eq!(format_ops_per_sec(1_000.0), "1.00 Kops/s");
        assert_eq!(format_ops_per_sec(3_210_000.0), "3.21 Mops/s");
        assert_eq!(format_ops_per_sec(4.2e9), "4.20 Gops/s");
    }

    #[test]
    fn test_format_ops_per_sec_degenerate() {
        assert_eq!(format_ops_per_sec(f64::INFINITY), "N/A");
        assert_eq!(format_ops_per_sec(f64::NAN), "N/A");
    }
}
