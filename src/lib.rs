//! skydeck library
//!
//! Terminal weather dashboard built on Open-Meteo forecast data. Exposes
//! the application modules for the binary and for integration tests.

pub mod app;
pub mod cli;
pub mod conditions;
pub mod data;
pub mod forecast;
pub mod hourly;
pub mod insights;
pub mod refresh;
pub mod ui;
