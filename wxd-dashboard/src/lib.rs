//! Station selection and refresh orchestration for the WXD dashboard.
//!
//! This crate provides:
//! - `selection`: the `SelectionState` value driving each refresh
//! - `controller`: `DashboardController`, which fetches every selected station
//!   concurrently and publishes only the newest result
//! - `view`: `DashboardView`, the reduced state handed to renderers
//! - `summaries`: regenerating and reading back server-side period summaries

pub mod controller;
pub mod selection;
pub mod summaries;
pub mod view;

pub use controller::{DashboardController, RefreshOutcome, StationReadings};
pub use selection::SelectionState;
pub use summaries::SummaryRefresh;
pub use view::DashboardView;
