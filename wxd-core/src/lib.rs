//! Core types for the weather station dashboard: stations, selectors,
//! per-station readings, and the fetch seam used to obtain them.

pub mod fetch;
pub mod metric;
pub mod period;
pub mod series;
pub mod snapshot;
pub mod station;
pub mod summary;

#[cfg(feature = "api")]
pub mod api;
