use std::time::Duration;

/// Format a duration into a short human readable string
///
/// ```
/// use std::time::Duration;
/// use intcode_common::utils::time::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_micros(2500)), "2.50ms");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs_f64();
    if seconds >= 1.0 {
        format!("{seconds:.2}s")
    } else if seconds >= 0.001 {
        format!("{:.2}ms", seconds * 1_000.0)
    } else {
        format!("{}µs", duration.as_micros())
    }
}

/// Compute the throughput of `count` operations over `duration`, per second.
///
/// ```
/// use std::time::Duration;
/// use intcode_common::utils::time::per_second;
///
/// assert_eq!(per_second(500, Duration::from_millis(250)), 2000.0);
/// assert_eq!(per_second(500, Duration::ZERO), 0.0);
/// ```
pub fn per_second(count: u64, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds == 0.0 {
        return 0.0;
    }
    count as f64 / seconds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_micros() {
        assert_eq!(format_duration(Duration::from_micros(12)), "12µs");
    }
}
