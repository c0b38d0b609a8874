//! Geocoding clients
//!
//! Forward geocoding (city name -> coordinates) uses the Open-Meteo
//! geocoding API; reverse geocoding (coordinates -> place name) uses
//! Nominatim (OpenStreetMap). Both are free endpoints without API keys,
//! though Nominatim requires a User-Agent header.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Place;

/// Base URL for the Open-Meteo geocoding API
const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Base URL for Nominatim reverse geocoding
const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// User-Agent sent to Nominatim, per their usage policy
const USER_AGENT: &str = concat!("skydeck/", env!("CARGO_PKG_VERSION"));

/// Label used when reverse geocoding finds no usable place name
const UNNAMED_PLACE: &str = "Your Location";

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The query matched no known place
    #[error("City not found: '{0}'")]
    CityNotFound(String),
}

/// A geocoded place with coordinates
#[derive(Debug, Clone)]
pub struct GeoPlace {
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    /// Resolved place name and country
    pub place: Place,
}

/// Open-Meteo geocoding response
#[derive(Debug, Deserialize)]
struct GeoSearchResponse {
    results: Option<Vec<GeoSearchResult>>,
}

/// A single geocoding match
#[derive(Debug, Deserialize)]
struct GeoSearchResult {
    latitude: f64,
    longitude: f64,
    name: String,
    country: Option<String>,
}

/// Nominatim reverse geocoding response
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

/// Address fields from Nominatim; most are absent for any given place
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

impl NominatimAddress {
    /// Resolves the most specific available place name.
    ///
    /// Preference order: city > town > village > state, matching how the
    /// address block narrows from settlements to regions.
    fn place(self) -> Place {
        let country = self.country.unwrap_or_default();
        let name = self
            .city
            .or(self.town)
            .or(self.village)
            .or(self.state)
            .unwrap_or_else(|| UNNAMED_PLACE.to_string());
        Place { name, country }
    }
}

/// Client for forward and reverse geocoding
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    /// Creates a new GeocodeClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates a new GeocodeClient with a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Resolves a city name to coordinates using the first match.
    ///
    /// # Arguments
    /// * `name` - The city name to search for
    ///
    /// # Returns
    /// * `Ok(GeoPlace)` - Coordinates and resolved name of the best match
    /// * `Err(GeocodeError::CityNotFound)` - If the query matched nothing
    /// * `Err(GeocodeError)` - If the request or parsing fails
    pub async fn search(&self, name: &str) -> Result<GeoPlace, GeocodeError> {
        let url = format!("{}?name={}", GEOCODING_BASE_URL, name);

        let response = self.client.get(&url).send().await?;
        let text = response.text().await?;
        let parsed: GeoSearchResponse = serde_json::from_str(&text)?;

        let result = parsed
            .results
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| GeocodeError::CityNotFound(name.to_string()))?;

        Ok(GeoPlace {
            latitude: result.latitude,
            longitude: result.longitude,
            place: Place {
                name: result.name,
                country: result.country.unwrap_or_default(),
            },
        })
    }

    /// Resolves coordinates to a place name via Nominatim.
    ///
    /// Falls back to a generic label when the address block is missing or
    /// has no usable fields; the coordinates themselves are still valid
    /// for forecasting, so this never blocks the weather flow.
    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<Place, GeocodeError> {
        let url = format!(
            "{}?lat={}&lon={}&format=json",
            NOMINATIM_BASE_URL, lat, lon
        );

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let text = response.text().await?;
        let parsed: NominatimResponse = serde_json::from_str(&text)?;

        Ok(parsed
            .address
            .map(NominatimAddress::place)
            .unwrap_or_else(|| Place {
                name: UNNAMED_PLACE.to_string(),
                country: String::new(),
            }))
    }
}
