//! Reusable UI widgets

pub mod sparkline;

pub use sparkline::TempSparkline;
