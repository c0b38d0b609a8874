//! Core data models for skydeck
//!
//! This module contains the data types shared across the application:
//! geographic coordinates, resolved place names, and the immutable weather
//! snapshot the UI renders from.

pub mod geocode;
pub mod news;
pub mod weather;

pub use geocode::{GeoPlace, GeocodeClient, GeocodeError};
pub use news::{NewsClient, NewsError, NewsItem};
pub use weather::{CurrentWeather, ForecastClient, RawWeatherData, WeatherError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::forecast::{build_forecast, ForecastDay};
use crate::insights::weather_insights;

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, south negative
    pub latitude: f64,
    /// Longitude in degrees, west negative
    pub longitude: f64,
}

/// A resolved place name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// City, town, or region name
    pub name: String,
    /// Country name; may be empty for unresolvable locations
    pub country: String,
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}, {}", self.name, self.country)
        }
    }
}

/// The derived weather view model for one fetch cycle
///
/// Built wholesale from a raw payload by [`WeatherSnapshot::from_raw`] and
/// never mutated afterwards; a new fetch replaces the entire snapshot.
/// The raw payload is retained because the detail cards read optional
/// daily/hourly fields the normalized forecast does not carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Where this forecast applies
    pub place: Place,
    /// Coordinates the forecast was fetched for
    pub coordinates: Coordinates,
    /// Current conditions, when the API reported them
    pub current: Option<CurrentWeather>,
    /// Normalized daily forecast
    pub forecast: Vec<ForecastDay>,
    /// Derived insight statements, trend first
    pub insights: Vec<String>,
    /// The raw payload the snapshot was derived from
    pub raw: RawWeatherData,
    /// When this data was fetched
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Runs the derivation pipeline over a raw payload.
    ///
    /// This is the only place forecast normalization and insight
    /// generation happen; callers get a finished, immutable view model.
    pub fn from_raw(
        place: Place,
        coordinates: Coordinates,
        raw: RawWeatherData,
        days: usize,
    ) -> Self {
        let forecast = build_forecast(&raw, days);
        let insights = weather_insights(&raw);
        Self {
            place,
            coordinates,
            current: raw.current_weather.clone(),
            forecast,
            insights,
            raw,
            fetched_at: Utc::now(),
        }
    }

    /// The current WMO weather code, when known
    pub fn weather_code(&self) -> Option<i32> {
        self.current.as_ref().map(|c| c.weathercode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::weather::RawDailySeries;

    fn sample_raw() -> RawWeatherData {
        RawWeatherData {
            current_weather: Some(CurrentWeather {
                temperature: 29.4,
                windspeed: 11.2,
                weathercode: 2,
            }),
            daily: Some(RawDailySeries {
                time: Some(vec![
                    "2026-08-06".to_string(),
                    "2026-08-07".to_string(),
                    "2026-08-08".to_string(),
                ]),
                temperature_2m_max: Some(vec![31.2, 33.0, 28.9]),
                temperature_2m_min: Some(vec![23.4, 24.1, 22.8]),
                weathercode: Some(vec![2, 0, 61]),
                precipitation_sum: Some(vec![0.0, 0.0, 7.4]),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn sample_place() -> Place {
        Place {
            name: "Hyderabad".to_string(),
            country: "India".to_string(),
        }
    }

    fn sample_coords() -> Coordinates {
        Coordinates {
            latitude: 17.38,
            longitude: 78.47,
        }
    }

    #[test]
    fn test_place_display_with_country() {
        assert_eq!(sample_place().to_string(), "Hyderabad, India");
    }

    #[test]
    fn test_place_display_without_country() {
        let place = Place {
            name: "Your Location".to_string(),
            country: String::new(),
        };
        assert_eq!(place.to_string(), "Your Location");
    }

    #[test]
    fn test_snapshot_runs_full_derivation() {
        let snapshot =
            WeatherSnapshot::from_raw(sample_place(), sample_coords(), sample_raw(), 7);

        assert_eq!(snapshot.forecast.len(), 3);
        assert_eq!(snapshot.forecast[2].weather_code, 61);
        assert_eq!(snapshot.insights.len(), 2);
        assert_eq!(snapshot.insights[0], "Today is hotter than yesterday");
        assert_eq!(snapshot.insights[1], "Expect rain tomorrow");
        assert_eq!(snapshot.weather_code(), Some(2));
    }

    #[test]
    fn test_snapshot_from_empty_payload_is_usable() {
        let snapshot = WeatherSnapshot::from_raw(
            sample_place(),
            sample_coords(),
            RawWeatherData::default(),
            7,
        );

        assert!(snapshot.current.is_none());
        assert!(snapshot.forecast.is_empty());
        assert!(snapshot.insights.is_empty());
        assert!(snapshot.weather_code().is_none());
    }

    #[test]
    fn test_snapshot_respects_day_limit() {
        let snapshot =
            WeatherSnapshot::from_raw(sample_place(), sample_coords(), sample_raw(), 2);
        assert_eq!(snapshot.forecast.len(), 2);
    }

    #[test]
    fn test_snapshot_serialization_roundtrip() {
        let snapshot =
            WeatherSnapshot::from_raw(sample_place(), sample_coords(), sample_raw(), 7);

        let json = serde_json::to_string(&snapshot).expect("serialize");
        let back: WeatherSnapshot = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back.place, snapshot.place);
        assert_eq!(back.forecast, snapshot.forecast);
        assert_eq!(back.insights, snapshot.insights);
    }
}
