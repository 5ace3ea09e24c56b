//! The seam between the dashboard and whatever transport supplies station data.

use crate::{
    metric::Metric, period::Period, series::SparseSeries, snapshot::Snapshot,
    summary::PeriodSummary,
};
use async_trait::async_trait;

/// Errors a fetch collaborator can report for a single request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Supplies per-station readings. One call fetches one resource for one
/// station; callers decide how to run calls concurrently.
#[async_trait]
pub trait StationFetcher: Send + Sync {
    /// Most recent reading for a station.
    async fn fetch_snapshot(&self, station_id: &str) -> Result<Snapshot, FetchError>;

    /// Time series of `metric` for a station over `period`.
    async fn fetch_series(
        &self,
        station_id: &str,
        period: Period,
        metric: &Metric,
    ) -> Result<SparseSeries, FetchError>;

    /// Metric columns the server can chart.
    async fn fetch_metric_columns(&self) -> Result<Vec<String>, FetchError>;

    /// Ask the server to rebuild its stored summaries for `period`.
    /// Returns whatever report the server sends back.
    async fn generate_summary(&self, period: Period) -> Result<serde_json::Value, FetchError>;

    /// Server-side summary of one station's readings over `period`.
    async fn fetch_summary(
        &self,
        station_id: &str,
        period: Period,
    ) -> Result<PeriodSummary, FetchError>;
}
