//! Application state management for skydeck
//!
//! Contains the main application state, keyboard handling for browse and
//! search modes, and the fetch orchestration that rebuilds the weather
//! snapshot on every completed request.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use thiserror::Error;
use tokio::sync::watch;

use crate::cli::{LocationQuery, StartupConfig};
use crate::data::{
    Coordinates, ForecastClient, GeocodeClient, GeocodeError, NewsClient, NewsItem, Place,
    WeatherSnapshot,
};
use crate::refresh::RefreshMessage;

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while fetching data
    Loading,
    /// The dashboard view
    Dashboard,
}

/// Keyboard input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys act as commands
    Browse,
    /// Keys edit the city search field
    Search,
}

/// User-facing fetch failures
///
/// The Display strings are exactly what the error banner shows.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("City not found. Try again.")]
    CityNotFound,
    #[error("Failed to fetch weather data.")]
    FetchFailed,
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Current keyboard input mode
    pub input_mode: InputMode,
    /// Text in the city search field
    pub search_input: String,
    /// The current weather snapshot, if one has been fetched
    pub snapshot: Option<WeatherSnapshot>,
    /// Weather news headlines, when the news client is configured
    pub news: Vec<NewsItem>,
    /// User-facing error message from the last failed fetch
    pub error: Option<String>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Whether the news panel is visible
    pub show_news: bool,
    /// Forecast days to fetch and display
    pub forecast_days: usize,
    /// Timestamp of last successful data refresh
    pub last_refresh: Option<DateTime<Local>>,
    /// Location query waiting to be executed by the main loop
    pending_fetch: Option<LocationQuery>,
    /// The last query that completed successfully (for manual refresh)
    last_query: Option<LocationQuery>,
    /// Publishes the current coordinates to the background refresh task
    coords_tx: Option<watch::Sender<Option<Coordinates>>>,
    /// Forecast API client
    forecast_client: ForecastClient,
    /// Geocoding API client
    geocode_client: GeocodeClient,
    /// News API client, when a key was supplied
    news_client: Option<NewsClient>,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self::with_startup_config(StartupConfig::default())
    }

    /// Creates a new App instance from CLI startup configuration.
    ///
    /// The initial location query is queued as a pending fetch; the main
    /// loop executes it the same way it executes searches.
    pub fn with_startup_config(config: StartupConfig) -> Self {
        Self {
            state: AppState::Loading,
            input_mode: InputMode::Browse,
            search_input: String::new(),
            snapshot: None,
            news: Vec::new(),
            error: None,
            should_quit: false,
            show_help: false,
            show_news: true,
            forecast_days: config.forecast_days,
            last_refresh: None,
            pending_fetch: Some(config.location),
            last_query: None,
            coords_tx: None,
            forecast_client: ForecastClient::new(),
            geocode_client: GeocodeClient::new(),
            news_client: config.news_key.map(NewsClient::new),
        }
    }

    /// Registers the watch channel that feeds coordinates to the
    /// background refresh task
    pub fn set_coords_publisher(&mut self, tx: watch::Sender<Option<Coordinates>>) {
        self.coords_tx = Some(tx);
    }

    /// Takes the pending location query, if any, leaving none behind
    pub fn take_pending_fetch(&mut self) -> Option<LocationQuery> {
        self.pending_fetch.take()
    }

    /// Executes a location query end to end and applies the outcome.
    pub async fn run_fetch(&mut self, query: LocationQuery) {
        let result = self.resolve_and_fetch(&query).await;
        self.apply_fetch_outcome(query, result);
    }

    /// Loads weather and news concurrently for the initial pending query.
    pub async fn load_initial(&mut self) {
        let Some(query) = self.take_pending_fetch() else {
            return;
        };

        let (weather_result, news_items) =
            futures::future::join(self.resolve_and_fetch(&query), self.fetch_news()).await;

        self.apply_fetch_outcome(query, weather_result);
        if let Some(items) = news_items {
            self.news = items;
        }
    }

    /// Resolves a query to coordinates and fetches the forecast.
    ///
    /// Borrows immutably so it can run concurrently with the news fetch;
    /// all state mutation happens in `apply_fetch_outcome`.
    async fn resolve_and_fetch(
        &self,
        query: &LocationQuery,
    ) -> Result<WeatherSnapshot, FetchError> {
        let (place, coords) = match query {
            LocationQuery::City(name) => {
                let geo = self.geocode_client.search(name).await.map_err(|e| match e {
                    GeocodeError::CityNotFound(_) => FetchError::CityNotFound,
                    _ => FetchError::FetchFailed,
                })?;
                (
                    geo.place,
                    Coordinates {
                        latitude: geo.latitude,
                        longitude: geo.longitude,
                    },
                )
            }
            LocationQuery::Coords(coords) => {
                // A failed reverse lookup degrades to a generic label; the
                // coordinates are still good for forecasting.
                let place = self
                    .geocode_client
                    .reverse(coords.latitude, coords.longitude)
                    .await
                    .unwrap_or_else(|_| Place {
                        name: "Your Location".to_string(),
                        country: String::new(),
                    });
                (place, *coords)
            }
        };

        let raw = self
            .forecast_client
            .fetch_forecast(coords.latitude, coords.longitude, self.forecast_days)
            .await
            .map_err(|_| FetchError::FetchFailed)?;

        Ok(WeatherSnapshot::from_raw(place, coords, raw, self.forecast_days))
    }

    /// Fetches news headlines, when a client is configured.
    ///
    /// News failures are swallowed; the panel just stays empty.
    async fn fetch_news(&self) -> Option<Vec<NewsItem>> {
        match &self.news_client {
            Some(client) => client.fetch_headlines().await.ok(),
            None => None,
        }
    }

    /// Applies the outcome of a fetch, swapping the snapshot on success or
    /// recording the error message on failure.
    fn apply_fetch_outcome(
        &mut self,
        query: LocationQuery,
        result: Result<WeatherSnapshot, FetchError>,
    ) {
        match result {
            Ok(snapshot) => {
                if let Some(tx) = &self.coords_tx {
                    let _ = tx.send(Some(snapshot.coordinates));
                }
                self.snapshot = Some(snapshot);
                self.last_query = Some(query);
                self.last_refresh = Some(Local::now());
                self.error = None;
            }
            Err(e) => {
                // Keep any previous snapshot visible behind the banner
                self.error = Some(e.to_string());
            }
        }
        self.state = AppState::Dashboard;
    }

    /// Handles a message from the background refresh task.
    ///
    /// A fresh payload re-runs the whole derivation pipeline against the
    /// existing place; refresh errors leave the current (stale) snapshot
    /// untouched.
    pub fn handle_refresh_message(&mut self, message: RefreshMessage) {
        match message {
            RefreshMessage::WeatherUpdated(raw) => {
                if let Some(current) = &self.snapshot {
                    self.snapshot = Some(WeatherSnapshot::from_raw(
                        current.place.clone(),
                        current.coordinates,
                        *raw,
                        self.forecast_days,
                    ));
                    self.last_refresh = Some(Local::now());
                }
            }
            RefreshMessage::RefreshError(_) => {}
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - Browse mode: `q`/`Esc` quit, `/` or `s` open search, `r` refresh,
    ///   `n` toggle news panel, `?` toggle help
    /// - Search mode: printable keys edit, `Backspace` deletes, `Enter`
    ///   submits, `Esc` cancels
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        if self.state == AppState::Loading {
            // Only quit is allowed during loading
            if key_event.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        match self.input_mode {
            InputMode::Search => match key_event.code {
                KeyCode::Esc => {
                    self.search_input.clear();
                    self.input_mode = InputMode::Browse;
                }
                KeyCode::Enter => {
                    let query = self.search_input.trim().to_string();
                    if !query.is_empty() {
                        self.pending_fetch = Some(LocationQuery::City(query));
                    }
                    self.search_input.clear();
                    self.input_mode = InputMode::Browse;
                }
                KeyCode::Backspace => {
                    self.search_input.pop();
                }
                KeyCode::Char(c) => {
                    self.search_input.push(c);
                }
                _ => {}
            },
            InputMode::Browse => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char('/') | KeyCode::Char('s') => {
                    self.search_input.clear();
                    self.input_mode = InputMode::Search;
                }
                KeyCode::Char('r') => {
                    if let Some(query) = self.last_query.clone() {
                        self.pending_fetch = Some(query);
                    }
                }
                KeyCode::Char('n') => {
                    self.show_news = !self.show_news;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
