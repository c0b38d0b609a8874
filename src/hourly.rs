//! Hourly series index arithmetic
//!
//! The hourly arrays are indexed by absolute hour offset from the start of
//! the series, where hours 0..24 cover the first day. These helpers resolve
//! the current clock hour into that index space and sample the arrays with
//! caller-supplied defaults instead of faulting on short data.

use chrono::{Local, Timelike};

/// Hours per day block in the hourly series
pub const HOURS_PER_DAY: usize = 24;

/// Index used when the clock hour is unavailable or out of range (noon)
pub const FALLBACK_HOUR: usize = 12;

/// Resolves a clock hour into an index into the first day's hourly block.
///
/// A clock hour in `[0, 23]` is already the index and passes through
/// unchanged; anything else resolves to `FALLBACK_HOUR`. This is the
/// documented degraded mode for an unreadable clock, not an error.
pub fn current_hour_index(clock_hour: u32) -> usize {
    if clock_hour < HOURS_PER_DAY as u32 {
        clock_hour as usize
    } else {
        FALLBACK_HOUR
    }
}

/// Reads the local clock and resolves it to an hourly index.
pub fn local_hour_index() -> usize {
    current_hour_index(Local::now().hour())
}

/// Returns the index of the same clock hour `day_offset` days later.
///
/// # Example
///
/// ```
/// use skydeck::hourly::same_hour_offset_days;
///
/// assert_eq!(same_hour_offset_days(8, 1), 32);
/// ```
pub fn same_hour_offset_days(base_index: usize, day_offset: usize) -> usize {
    base_index + day_offset * HOURS_PER_DAY
}

/// Samples an optional hourly series at an index.
///
/// An absent series or an out-of-bounds index resolves to `default`,
/// never an out-of-bounds fault.
pub fn sample(series: Option<&[f64]>, index: usize, default: f64) -> f64 {
    series
        .and_then(|s| s.get(index))
        .copied()
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_hour_index_identity_in_range() {
        for hour in 0..24 {
            assert_eq!(current_hour_index(hour), hour as usize);
        }
    }

    #[test]
    fn test_current_hour_index_out_of_range_falls_back_to_noon() {
        assert_eq!(current_hour_index(24), FALLBACK_HOUR);
        assert_eq!(current_hour_index(99), FALLBACK_HOUR);
    }

    #[test]
    fn test_local_hour_index_in_bounds() {
        let index = local_hour_index();
        assert!(index < HOURS_PER_DAY, "index {} out of range", index);
    }

    #[test]
    fn test_same_hour_tomorrow() {
        assert_eq!(same_hour_offset_days(8, 1), 32);
    }

    #[test]
    fn test_same_hour_zero_offset_is_identity() {
        assert_eq!(same_hour_offset_days(15, 0), 15);
    }

    #[test]
    fn test_same_hour_multiple_days() {
        assert_eq!(same_hour_offset_days(0, 3), 72);
        assert_eq!(same_hour_offset_days(23, 2), 71);
    }

    #[test]
    fn test_sample_in_bounds() {
        let series = vec![10.0, 20.0, 30.0];
        assert_eq!(sample(Some(&series), 1, 99.0), 20.0);
    }

    #[test]
    fn test_sample_out_of_bounds_uses_default() {
        let series = vec![10.0, 20.0, 30.0];
        assert_eq!(sample(Some(&series), 10, 60.0), 60.0);
    }

    #[test]
    fn test_sample_absent_series_uses_default() {
        assert_eq!(sample(None, 0, 58.0), 58.0);
    }
}
