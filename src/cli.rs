//! Command-line interface parsing for skydeck
//!
//! Parses CLI arguments with clap and lowers them into a `StartupConfig`
//! describing the initial location query, forecast length, and optional
//! news API key.

use clap::Parser;
use thiserror::Error;

use crate::data::Coordinates;
use crate::forecast::DEFAULT_FORECAST_DAYS;

/// City used when neither --city nor --coords is given
pub const DEFAULT_CITY: &str = "Hyderabad";

/// Maximum forecast days Open-Meteo will serve
const MAX_FORECAST_DAYS: usize = 16;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The coordinate string is not in LAT,LON form
    #[error("Invalid coordinates: '{0}'. Expected LAT,LON (e.g. 17.38,78.47)")]
    InvalidCoords(String),

    /// Latitude outside [-90, 90]
    #[error("Latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180]
    #[error("Longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// Forecast day count outside the supported range
    #[error("Forecast days {0} out of range [1, 16]")]
    DaysOutOfRange(usize),
}

/// skydeck - Terminal weather dashboard
#[derive(Parser, Debug)]
#[command(name = "skydeck")]
#[command(about = "Terminal weather dashboard with forecasts, insights, and news")]
#[command(version)]
pub struct Cli {
    /// City to show weather for at startup
    ///
    /// Examples:
    ///   skydeck --city Vancouver
    ///   skydeck --city "New Delhi"
    #[arg(long, value_name = "CITY", conflicts_with = "coords")]
    pub city: Option<String>,

    /// Coordinates to show weather for at startup, as LAT,LON
    ///
    /// The place name is resolved by reverse geocoding.
    ///
    /// Example: skydeck --coords 49.28,-123.12
    #[arg(long, value_name = "LAT,LON")]
    pub coords: Option<String>,

    /// Number of forecast days to fetch and display (1-16)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_FORECAST_DAYS)]
    pub days: usize,

    /// NewsAPI key; enables the weather news panel
    #[arg(long, value_name = "KEY")]
    pub news_key: Option<String>,

    /// Disable background auto-refresh of weather data
    #[arg(long)]
    pub no_refresh: bool,
}

/// The initial location to resolve at startup
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Forward-geocode a city name
    City(String),
    /// Reverse-geocode fixed coordinates
    Coords(Coordinates),
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Location to load first
    pub location: LocationQuery,
    /// Forecast days to fetch and display
    pub forecast_days: usize,
    /// NewsAPI key, when the news panel is wanted
    pub news_key: Option<String>,
    /// Whether the background refresh task runs
    pub auto_refresh: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            location: LocationQuery::City(DEFAULT_CITY.to_string()),
            forecast_days: DEFAULT_FORECAST_DAYS,
            news_key: None,
            auto_refresh: true,
        }
    }
}

/// Parses a LAT,LON string into validated coordinates.
///
/// # Arguments
/// * `s` - The coordinate string from the CLI
///
/// # Returns
/// * `Ok(Coordinates)` if the string parses and both values are in range
/// * `Err(CliError)` otherwise
pub fn parse_coords(s: &str) -> Result<Coordinates, CliError> {
    let invalid = || CliError::InvalidCoords(s.to_string());

    let (lat_str, lon_str) = s.split_once(',').ok_or_else(invalid)?;
    let latitude: f64 = lat_str.trim().parse().map_err(|_| invalid())?;
    let longitude: f64 = lon_str.trim().parse().map_err(|_| invalid())?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CliError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CliError::LongitudeOutOfRange(longitude));
    }

    Ok(Coordinates {
        latitude,
        longitude,
    })
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if coordinates or day count are invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if !(1..=MAX_FORECAST_DAYS).contains(&cli.days) {
            return Err(CliError::DaysOutOfRange(cli.days));
        }

        let location = match (&cli.coords, &cli.city) {
            (Some(coords_str), _) => LocationQuery::Coords(parse_coords(coords_str)?),
            (None, Some(city)) => LocationQuery::City(city.clone()),
            (None, None) => LocationQuery::City(DEFAULT_CITY.to_string()),
        };

        Ok(StartupConfig {
            location,
            forecast_days: cli.days,
            news_key: cli.news_key.clone(),
            auto_refresh: !cli.no_refresh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords_valid() {
        let coords = parse_coords("49.28,-123.12").unwrap();
        assert!((coords.latitude - 49.28).abs() < 0.0001);
        assert!((coords.longitude - (-123.12)).abs() < 0.0001);
    }

    #[test]
    fn test_parse_coords_with_spaces() {
        let coords = parse_coords(" 17.38 , 78.47 ").unwrap();
        assert!((coords.latitude - 17.38).abs() < 0.0001);
        assert!((coords.longitude - 78.47).abs() < 0.0001);
    }

    #[test]
    fn test_parse_coords_missing_comma() {
        let result = parse_coords("49.28");
        assert!(matches!(result, Err(CliError::InvalidCoords(_))));
    }

    #[test]
    fn test_parse_coords_non_numeric() {
        let result = parse_coords("north,west");
        assert!(matches!(result, Err(CliError::InvalidCoords(_))));
    }

    #[test]
    fn test_parse_coords_latitude_out_of_range() {
        let result = parse_coords("95.0,10.0");
        assert!(matches!(result, Err(CliError::LatitudeOutOfRange(_))));
    }

    #[test]
    fn test_parse_coords_longitude_out_of_range() {
        let result = parse_coords("45.0,200.0");
        assert!(matches!(result, Err(CliError::LongitudeOutOfRange(_))));
    }

    #[test]
    fn test_startup_config_default_city() {
        let cli = Cli::parse_from(["skydeck"]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        assert_eq!(
            config.location,
            LocationQuery::City(DEFAULT_CITY.to_string())
        );
        assert_eq!(config.forecast_days, DEFAULT_FORECAST_DAYS);
        assert!(config.news_key.is_none());
        assert!(config.auto_refresh);
    }

    #[test]
    fn test_startup_config_with_city() {
        let cli = Cli::parse_from(["skydeck", "--city", "Vancouver"]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        assert_eq!(config.location, LocationQuery::City("Vancouver".to_string()));
    }

    #[test]
    fn test_startup_config_with_coords() {
        let cli = Cli::parse_from(["skydeck", "--coords", "49.28,-123.12"]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        match config.location {
            LocationQuery::Coords(coords) => {
                assert!((coords.latitude - 49.28).abs() < 0.0001);
            }
            other => panic!("Expected Coords, got {:?}", other),
        }
    }

    #[test]
    fn test_startup_config_with_invalid_coords() {
        let cli = Cli::parse_from(["skydeck", "--coords", "not,coords"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn test_startup_config_with_days() {
        let cli = Cli::parse_from(["skydeck", "--days", "3"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.forecast_days, 3);
    }

    #[test]
    fn test_startup_config_days_zero_rejected() {
        let cli = Cli::parse_from(["skydeck", "--days", "0"]);
        assert!(matches!(
            StartupConfig::from_cli(&cli),
            Err(CliError::DaysOutOfRange(0))
        ));
    }

    #[test]
    fn test_startup_config_days_above_max_rejected() {
        let cli = Cli::parse_from(["skydeck", "--days", "17"]);
        assert!(matches!(
            StartupConfig::from_cli(&cli),
            Err(CliError::DaysOutOfRange(17))
        ));
    }

    #[test]
    fn test_startup_config_with_news_key() {
        let cli = Cli::parse_from(["skydeck", "--news-key", "abc123"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.news_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_startup_config_no_refresh() {
        let cli = Cli::parse_from(["skydeck", "--no-refresh"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(!config.auto_refresh);
    }
}
