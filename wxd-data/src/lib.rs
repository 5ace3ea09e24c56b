//! Multi-station reduction of dashboard readings.
//!
//! This crate turns the per-station results of one refresh cycle into the
//! shapes the rendering side consumes: a label-aligned series set for
//! charting and a single combined "right now" snapshot.

pub mod alignment;
pub mod chart;
pub mod snapshot;
