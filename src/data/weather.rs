//! Open-Meteo forecast API client
//!
//! Fetches the raw forecast payload (current conditions plus hourly and
//! daily parallel arrays) used by the derivation pipeline. Field names
//! mirror the wire format exactly; every series is optional because the
//! API omits blocks that were not requested or have no data.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL for the Open-Meteo forecast API
const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Errors that can occur when fetching forecast data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Current conditions block (`current_weather=true`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub windspeed: f64,
    /// WMO weather code
    pub weathercode: i32,
}

/// Daily parallel arrays, indexed by day offset
///
/// Index *i* across every present array refers to day *i*. The forecast
/// builder requires `time`, `temperature_2m_min`, `temperature_2m_max`,
/// and `weathercode`; the rest feed the detail cards and may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDailySeries {
    pub time: Option<Vec<String>>,
    pub temperature_2m_max: Option<Vec<f64>>,
    pub temperature_2m_min: Option<Vec<f64>>,
    pub weathercode: Option<Vec<i32>>,
    pub precipitation_sum: Option<Vec<f64>>,
    pub sunrise: Option<Vec<String>>,
    pub sunset: Option<Vec<String>>,
    pub pressure_msl: Option<Vec<f64>>,
    pub uv_index_max: Option<Vec<f64>>,
    pub visibility_max: Option<Vec<f64>>,
    pub dewpoint_2m_max: Option<Vec<f64>>,
    pub windspeed_10m_max: Option<Vec<f64>>,
}

/// Hourly parallel arrays, indexed by hour offset from series start
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawHourlySeries {
    pub temperature_2m: Option<Vec<f64>>,
    pub weathercode: Option<Vec<i32>>,
    pub relative_humidity_2m: Option<Vec<f64>>,
}

/// Full raw forecast payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawWeatherData {
    pub current_weather: Option<CurrentWeather>,
    pub daily: Option<RawDailySeries>,
    pub hourly: Option<RawHourlySeries>,
}

/// Client for fetching forecast data from Open-Meteo
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    /// Creates a new ForecastClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates a new ForecastClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches the raw forecast payload for the given coordinates.
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    /// * `days` - Number of forecast days to request
    ///
    /// # Returns
    /// * `Ok(RawWeatherData)` - The raw payload, series untouched
    /// * `Err(WeatherError)` - If the request or parsing fails
    pub async fn fetch_forecast(
        &self,
        lat: f64,
        lon: f64,
        days: usize,
    ) -> Result<RawWeatherData, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true\
             &hourly=temperature_2m,weathercode,relative_humidity_2m\
             &daily=temperature_2m_max,temperature_2m_min,weathercode,precipitation_sum,sunrise,sunset,windspeed_10m_max\
             &forecast_days={}&timezone=auto",
            OPEN_METEO_BASE_URL, lat, lon, days
        );

        let response = self.client.get(&url).send().await?;
        let text = response.text().await?;
        let raw: RawWeatherData = serde_json::from_str(&text)?;

        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample Open-Meteo forecast response (trimmed to three days)
    const VALID_RESPONSE: &str = r#"{
        "latitude": 17.38,
        "longitude": 78.47,
        "generationtime_ms": 0.412,
        "utc_offset_seconds": 19800,
        "timezone": "Asia/Kolkata",
        "timezone_abbreviation": "IST",
        "elevation": 515.0,
        "current_weather": {
            "temperature": 29.4,
            "windspeed": 11.2,
            "winddirection": 240,
            "weathercode": 2,
            "time": "2026-08-06T14:00"
        },
        "hourly": {
            "time": ["2026-08-06T00:00", "2026-08-06T01:00", "2026-08-06T02:00"],
            "temperature_2m": [24.1, 23.8, 23.5],
            "weathercode": [1, 1, 2],
            "relative_humidity_2m": [78.0, 80.0, 82.0]
        },
        "daily": {
            "time": ["2026-08-06", "2026-08-07", "2026-08-08"],
            "temperature_2m_max": [31.2, 33.0, 28.9],
            "temperature_2m_min": [23.4, 24.1, 22.8],
            "weathercode": [2, 0, 61],
            "precipitation_sum": [0.0, 0.0, 7.4],
            "sunrise": ["2026-08-06T05:58", "2026-08-07T05:58", "2026-08-08T05:59"],
            "sunset": ["2026-08-06T18:48", "2026-08-07T18:47", "2026-08-08T18:47"],
            "windspeed_10m_max": [14.5, 12.0, 18.3]
        }
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let raw: RawWeatherData =
            serde_json::from_str(VALID_RESPONSE).expect("Failed to parse valid response");

        let current = raw.current_weather.expect("current_weather present");
        assert!((current.temperature - 29.4).abs() < 0.01);
        assert!((current.windspeed - 11.2).abs() < 0.01);
        assert_eq!(current.weathercode, 2);

        let daily = raw.daily.expect("daily present");
        assert_eq!(daily.time.as_ref().unwrap().len(), 3);
        assert_eq!(daily.weathercode.as_ref().unwrap()[2], 61);
        assert!((daily.precipitation_sum.as_ref().unwrap()[2] - 7.4).abs() < 0.01);
        assert_eq!(daily.sunrise.as_ref().unwrap()[0], "2026-08-06T05:58");
        assert!(daily.pressure_msl.is_none(), "unrequested field stays None");
        assert!(daily.uv_index_max.is_none());

        let hourly = raw.hourly.expect("hourly present");
        assert_eq!(hourly.relative_humidity_2m.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_parse_response_without_daily() {
        let minimal = r#"{
            "current_weather": {
                "temperature": 18.0,
                "windspeed": 5.0,
                "weathercode": 0
            }
        }"#;

        let raw: RawWeatherData = serde_json::from_str(minimal).expect("Failed to parse");
        assert!(raw.current_weather.is_some());
        assert!(raw.daily.is_none());
        assert!(raw.hourly.is_none());
    }

    #[test]
    fn test_parse_empty_object() {
        let raw: RawWeatherData = serde_json::from_str("{}").expect("Failed to parse");
        assert!(raw.current_weather.is_none());
        assert!(raw.daily.is_none());
        assert!(raw.hourly.is_none());
    }

    #[test]
    fn test_parse_daily_with_partial_arrays() {
        // Only some series present: the rest stay None rather than failing
        let partial = r#"{
            "daily": {
                "time": ["2026-08-06"],
                "temperature_2m_max": [31.2]
            }
        }"#;

        let raw: RawWeatherData = serde_json::from_str(partial).expect("Failed to parse");
        let daily = raw.daily.expect("daily present");
        assert!(daily.time.is_some());
        assert!(daily.temperature_2m_max.is_some());
        assert!(daily.temperature_2m_min.is_none());
        assert!(daily.weathercode.is_none());
    }

    #[test]
    fn test_parse_malformed_json_is_error() {
        let result: Result<RawWeatherData, _> = serde_json::from_str("{ invalid json }");
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_weather_data_serialization_roundtrip() {
        let raw: RawWeatherData = serde_json::from_str(VALID_RESPONSE).expect("parse");
        let json = serde_json::to_string(&raw).expect("serialize");
        let back: RawWeatherData = serde_json::from_str(&json).expect("reparse");

        assert_eq!(
            back.daily.as_ref().unwrap().weathercode,
            raw.daily.as_ref().unwrap().weathercode
        );
        assert!(
            (back.current_weather.as_ref().unwrap().temperature
                - raw.current_weather.as_ref().unwrap().temperature)
                .abs()
                < f64::EPSILON
        );
    }
}
