//! Background data refresh system
//!
//! Periodically re-fetches the forecast for the current coordinates and
//! ships the raw payload back to the main application over a tokio channel.
//! The app re-runs the derivation pipeline on each delivery; this task
//! never touches application state directly.

use std::time::Duration;
use tokio::sync::{mpsc, watch};

use crate::data::{Coordinates, ForecastClient, RawWeatherData};

/// Messages sent from the background refresh task to the main app
#[derive(Debug)]
pub enum RefreshMessage {
    /// A fresh raw payload arrived for the current coordinates
    WeatherUpdated(Box<RawWeatherData>),
    /// The refresh fetch failed
    RefreshError(String),
}

/// Configuration for the background refresh task
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Interval between weather refreshes
    pub interval: Duration,
    /// Forecast days to request on each refresh
    pub forecast_days: usize,
    /// Whether auto-refresh is enabled
    pub enabled: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(600), // 10 minutes
            forecast_days: crate::forecast::DEFAULT_FORECAST_DAYS,
            enabled: true,
        }
    }
}

/// Handle for controlling the background refresh task
pub struct RefreshHandle {
    /// Channel for receiving refresh messages
    pub receiver: mpsc::Receiver<RefreshMessage>,
    /// Flag to signal shutdown
    shutdown_tx: mpsc::Sender<()>,
}

impl RefreshHandle {
    /// Spawns the background refresh task.
    ///
    /// The task watches `coords_rx` for the coordinates of the most recent
    /// successful fetch; while no coordinates are known, ticks are skipped.
    ///
    /// # Arguments
    /// * `config` - Refresh interval and fetch settings
    /// * `coords_rx` - Watch channel carrying the current coordinates
    ///
    /// # Returns
    /// A RefreshHandle that receives updates via the `receiver` channel
    pub fn spawn(config: RefreshConfig, coords_rx: watch::Receiver<Option<Coordinates>>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(32);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        if config.enabled {
            let client = ForecastClient::new();
            let days = config.forecast_days;
            let refresh_interval = config.interval;
            let tx = msg_tx.clone();

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(refresh_interval);
                // Skip the first tick (immediate)
                interval.tick().await;

                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let Some(coords) = *coords_rx.borrow() else {
                                continue;
                            };

                            match client
                                .fetch_forecast(coords.latitude, coords.longitude, days)
                                .await
                            {
                                Ok(raw) => {
                                    let _ = tx
                                        .send(RefreshMessage::WeatherUpdated(Box::new(raw)))
                                        .await;
                                }
                                Err(e) => {
                                    let _ = tx
                                        .send(RefreshMessage::RefreshError(e.to_string()))
                                        .await;
                                }
                            }
                        }
                        _ = shutdown_rx.recv() => {
                            break;
                        }
                    }
                }
            });
        }

        Self {
            receiver: msg_rx,
            shutdown_tx,
        }
    }

    /// Shuts down the background refresh task
    #[allow(dead_code)]
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// Checks for a pending refresh message without blocking
///
/// # Arguments
/// * `handle` - The RefreshHandle to check
///
/// # Returns
/// * `Some(RefreshMessage)` if a message was available
/// * `None` if no messages are pending
pub fn try_recv(handle: &mut RefreshHandle) -> Option<RefreshMessage> {
    handle.receiver.try_recv().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_config_default() {
        let config = RefreshConfig::default();
        assert_eq!(config.interval, Duration::from_secs(600));
        assert_eq!(config.forecast_days, 7);
        assert!(config.enabled);
    }

    #[test]
    fn test_refresh_config_custom() {
        let config = RefreshConfig {
            interval: Duration::from_secs(60),
            forecast_days: 3,
            enabled: false,
        };
        assert_eq!(config.interval, Duration::from_secs(60));
        assert_eq!(config.forecast_days, 3);
        assert!(!config.enabled);
    }

    #[tokio::test]
    async fn test_refresh_handle_spawn_disabled() {
        let config = RefreshConfig {
            enabled: false,
            ..Default::default()
        };
        let (_coords_tx, coords_rx) = watch::channel(None);

        let mut handle = RefreshHandle::spawn(config, coords_rx);

        // With refresh disabled, there should be no messages
        assert!(try_recv(&mut handle).is_none());
    }

    #[tokio::test]
    async fn test_refresh_skips_while_coordinates_unknown() {
        let config = RefreshConfig {
            interval: Duration::from_millis(10),
            ..Default::default()
        };
        let (_coords_tx, coords_rx) = watch::channel(None);

        let mut handle = RefreshHandle::spawn(config, coords_rx);
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Ticks with no coordinates produce neither updates nor errors
        assert!(try_recv(&mut handle).is_none());
    }
}
