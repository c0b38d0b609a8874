//! Daily forecast normalization
//!
//! Turns the raw Open-Meteo daily series (optional parallel arrays indexed
//! by day offset) into an ordered sequence of per-day forecast records.

use serde::{Deserialize, Serialize};

use crate::data::weather::RawWeatherData;

/// Default number of forecast days shown on the dashboard
pub const DEFAULT_FORECAST_DAYS: usize = 7;

/// A single day's normalized forecast
///
/// Immutable once built; the whole sequence is rebuilt on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Date string as reported by the API (e.g. "2026-08-06")
    pub date: String,
    /// Minimum temperature in Celsius
    pub min: f64,
    /// Maximum temperature in Celsius
    pub max: f64,
    /// WMO weather code
    pub weather_code: i32,
    /// Precipitation sum in mm; 0.0 when the API omitted the field
    pub precipitation: f64,
}

/// Builds the normalized forecast sequence from a raw payload.
///
/// Requires the `daily` block with its `time`, `temperature_2m_min`,
/// `temperature_2m_max`, and `weathercode` arrays; if any is absent the
/// result is an empty sequence, which callers must treat as "no forecast
/// available" rather than a failure. Missing `precipitation_sum` entries
/// default to 0.0 so downstream aggregate math needs no guards.
///
/// The result holds the first `days` entries, truncated to the shortest
/// required array. A `days` larger than the available data truncates, it
/// never errors.
pub fn build_forecast(raw: &RawWeatherData, days: usize) -> Vec<ForecastDay> {
    let Some(daily) = raw.daily.as_ref() else {
        return Vec::new();
    };
    let (Some(dates), Some(mins), Some(maxes), Some(codes)) = (
        daily.time.as_ref(),
        daily.temperature_2m_min.as_ref(),
        daily.temperature_2m_max.as_ref(),
        daily.weathercode.as_ref(),
    ) else {
        return Vec::new();
    };

    // All arrays are index-aligned per the API contract; clamping to the
    // shortest keeps a malformed payload from faulting.
    let len = days
        .min(dates.len())
        .min(mins.len())
        .min(maxes.len())
        .min(codes.len());

    (0..len)
        .map(|i| ForecastDay {
            date: dates[i].clone(),
            min: mins[i],
            max: maxes[i],
            weather_code: codes[i],
            precipitation: daily
                .precipitation_sum
                .as_ref()
                .and_then(|p| p.get(i))
                .copied()
                .unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::weather::RawDailySeries;

    /// A well-formed three-day daily series for tests
    fn sample_raw(days: usize) -> RawWeatherData {
        let daily = RawDailySeries {
            time: Some(
                (0..days)
                    .map(|i| format!("2026-08-{:02}", i + 1))
                    .collect(),
            ),
            temperature_2m_max: Some((0..days).map(|i| 20.0 + i as f64).collect()),
            temperature_2m_min: Some((0..days).map(|i| 10.0 + i as f64).collect()),
            weathercode: Some(vec![0; days]),
            precipitation_sum: Some((0..days).map(|i| i as f64 * 0.5).collect()),
            ..Default::default()
        };
        RawWeatherData {
            daily: Some(daily),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_forecast_length_and_field_alignment() {
        let raw = sample_raw(7);
        let forecast = build_forecast(&raw, 7);

        assert_eq!(forecast.len(), 7);
        for (i, day) in forecast.iter().enumerate() {
            assert_eq!(day.date, format!("2026-08-{:02}", i + 1));
            assert!((day.max - (20.0 + i as f64)).abs() < f64::EPSILON);
            assert!((day.min - (10.0 + i as f64)).abs() < f64::EPSILON);
            assert_eq!(day.weather_code, 0);
            assert!((day.precipitation - i as f64 * 0.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_build_forecast_truncates_to_requested_days() {
        let raw = sample_raw(7);
        let forecast = build_forecast(&raw, 3);
        assert_eq!(forecast.len(), 3);
    }

    #[test]
    fn test_build_forecast_truncates_when_days_exceed_data() {
        let raw = sample_raw(2);
        let forecast = build_forecast(&raw, 7);
        assert_eq!(forecast.len(), 2, "short payloads truncate, not error");
    }

    #[test]
    fn test_build_forecast_missing_daily_returns_empty() {
        let raw = RawWeatherData::default();
        assert!(build_forecast(&raw, 7).is_empty());
    }

    #[test]
    fn test_build_forecast_missing_weathercode_returns_empty() {
        let mut raw = sample_raw(3);
        raw.daily.as_mut().unwrap().weathercode = None;
        assert!(
            build_forecast(&raw, 7).is_empty(),
            "a missing required array invalidates the whole series"
        );
    }

    #[test]
    fn test_build_forecast_missing_min_returns_empty() {
        let mut raw = sample_raw(3);
        raw.daily.as_mut().unwrap().temperature_2m_min = None;
        assert!(build_forecast(&raw, 7).is_empty());
    }

    #[test]
    fn test_build_forecast_missing_max_returns_empty() {
        let mut raw = sample_raw(3);
        raw.daily.as_mut().unwrap().temperature_2m_max = None;
        assert!(build_forecast(&raw, 7).is_empty());
    }

    #[test]
    fn test_build_forecast_missing_time_returns_empty() {
        let mut raw = sample_raw(3);
        raw.daily.as_mut().unwrap().time = None;
        assert!(build_forecast(&raw, 7).is_empty());
    }

    #[test]
    fn test_build_forecast_missing_precipitation_defaults_to_zero() {
        let mut raw = sample_raw(3);
        raw.daily.as_mut().unwrap().precipitation_sum = None;
        let forecast = build_forecast(&raw, 3);

        assert_eq!(forecast.len(), 3);
        for day in &forecast {
            assert_eq!(day.precipitation, 0.0, "absent precipitation is a safe zero");
        }
    }

    #[test]
    fn test_build_forecast_short_precipitation_defaults_missing_entries() {
        let mut raw = sample_raw(3);
        raw.daily.as_mut().unwrap().precipitation_sum = Some(vec![1.5]);
        let forecast = build_forecast(&raw, 3);

        assert!((forecast[0].precipitation - 1.5).abs() < f64::EPSILON);
        assert_eq!(forecast[1].precipitation, 0.0);
        assert_eq!(forecast[2].precipitation, 0.0);
    }

    #[test]
    fn test_build_forecast_clamps_to_shortest_required_array() {
        let mut raw = sample_raw(5);
        // weathercode shorter than the rest: truncate rather than fault
        raw.daily.as_mut().unwrap().weathercode = Some(vec![0, 61, 71]);
        let forecast = build_forecast(&raw, 7);

        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast[1].weather_code, 61);
    }

    #[test]
    fn test_build_forecast_is_idempotent() {
        let raw = sample_raw(7);
        let first = build_forecast(&raw, 7);
        let second = build_forecast(&raw, 7);
        assert_eq!(first, second);
    }
}
