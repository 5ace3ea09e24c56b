//! Backend summary maintenance: ask the server to rebuild its per-period
//! summaries and read them back per station.

use futures::future::join_all;
use log::{debug, info, warn};
use wxd_core::{
    fetch::{FetchError, StationFetcher},
    period::Period,
    station::StationId,
    summary::PeriodSummary,
};

pub const SUMMARIES_REFRESHED: &str = "Summaries refreshed successfully.";
pub const SUMMARIES_FAILED: &str = "Failed to refresh summaries.";

/// Result of one summary regeneration request.
#[derive(Debug)]
pub enum SummaryRefresh {
    Refreshed {
        period: Period,
        report: serde_json::Value,
    },
    Failed {
        period: Period,
        error: FetchError,
    },
}

impl SummaryRefresh {
    pub fn succeeded(&self) -> bool {
        matches!(self, SummaryRefresh::Refreshed { .. })
    }

    /// One-line status for the user.
    pub fn message(&self) -> &'static str {
        if self.succeeded() {
            SUMMARIES_REFRESHED
        } else {
            SUMMARIES_FAILED
        }
    }
}

/// Regenerate server-side summaries for `period`. Failure is reported in
/// the returned value, never propagated.
pub async fn refresh_summaries<F>(fetcher: &F, period: Period) -> SummaryRefresh
where
    F: StationFetcher + ?Sized,
{
    info!("Regenerating summaries for {}", period);
    match fetcher.generate_summary(period).await {
        Ok(report) => {
            debug!("Summary results: {}", report);
            SummaryRefresh::Refreshed { period, report }
        }
        Err(error) => {
            warn!("Summary refresh for {} failed: {}", period, error);
            SummaryRefresh::Failed { period, error }
        }
    }
}

/// Fetch the summary of each station concurrently, in `stations` order.
/// Stations whose request fails are logged and left out.
pub async fn collect_summaries<F>(
    fetcher: &F,
    stations: &[StationId],
    period: Period,
) -> Vec<(StationId, PeriodSummary)>
where
    F: StationFetcher + ?Sized,
{
    let requests = stations.iter().map(|station_id| async move {
        (station_id, fetcher.fetch_summary(station_id, period).await)
    });

    join_all(requests)
        .await
        .into_iter()
        .filter_map(|(station_id, result)| match result {
            Ok(summary) => Some((station_id.clone(), summary)),
            Err(e) => {
                warn!("No {} summary for {}: {}", period, station_id, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use wxd_core::{metric::Metric, series::SparseSeries, snapshot::Snapshot};

    /// Answers only the summary endpoints.
    struct SummaryStub {
        regenerate_ok: bool,
        summaries: HashMap<String, PeriodSummary>,
        requested: Mutex<Vec<Period>>,
    }

    impl SummaryStub {
        fn new(regenerate_ok: bool) -> Self {
            Self {
                regenerate_ok,
                summaries: HashMap::new(),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn unavailable(what: &str) -> FetchError {
            FetchError::Status {
                url: format!("stub://{}", what),
                status: 500,
            }
        }
    }

    #[async_trait]
    impl StationFetcher for SummaryStub {
        async fn fetch_snapshot(&self, station_id: &str) -> Result<Snapshot, FetchError> {
            Err(Self::unavailable(station_id))
        }

        async fn fetch_series(
            &self,
            station_id: &str,
            _period: Period,
            _metric: &Metric,
        ) -> Result<SparseSeries, FetchError> {
            Err(Self::unavailable(station_id))
        }

        async fn fetch_metric_columns(&self) -> Result<Vec<String>, FetchError> {
            Ok(Vec::new())
        }

        async fn generate_summary(
            &self,
            period: Period,
        ) -> Result<serde_json::Value, FetchError> {
            self.requested.lock().unwrap().push(period);
            if self.regenerate_ok {
                Ok(serde_json::json!({ "updated": 2 }))
            } else {
                Err(Self::unavailable("generate_summary"))
            }
        }

        async fn fetch_summary(
            &self,
            station_id: &str,
            _period: Period,
        ) -> Result<PeriodSummary, FetchError> {
            self.summaries
                .get(station_id)
                .cloned()
                .ok_or_else(|| Self::unavailable(station_id))
        }
    }

    #[tokio::test]
    async fn test_refresh_reports_success() {
        let stub = SummaryStub::new(true);
        let outcome = refresh_summaries(&stub, Period::SevenDays).await;

        assert!(outcome.succeeded());
        assert_eq!(outcome.message(), SUMMARIES_REFRESHED);
        let SummaryRefresh::Refreshed { period, report } = outcome else {
            panic!("expected refreshed");
        };
        assert_eq!(period, Period::SevenDays);
        assert_eq!(report["updated"], 2);
        assert_eq!(*stub.requested.lock().unwrap(), vec![Period::SevenDays]);
    }

    #[tokio::test]
    async fn test_refresh_reports_failure() {
        let stub = SummaryStub::new(false);
        let outcome = refresh_summaries(&stub, Period::YearToDate).await;

        assert!(!outcome.succeeded());
        assert_eq!(outcome.message(), SUMMARIES_FAILED);
        assert!(matches!(
            outcome,
            SummaryRefresh::Failed {
                period: Period::YearToDate,
                error: FetchError::Status { status: 500, .. }
            }
        ));
    }

    #[tokio::test]
    async fn test_collect_summaries_skips_failures_and_keeps_order() {
        let mut stub = SummaryStub::new(true);
        stub.summaries.insert(
            "B".to_string(),
            PeriodSummary {
                temp_avg: Some(41.5),
                ..PeriodSummary::default()
            },
        );
        stub.summaries.insert("A".to_string(), PeriodSummary::default());

        let stations = vec!["B".to_string(), "missing".to_string(), "A".to_string()];
        let summaries = collect_summaries(&stub, &stations, Period::ThirtyDays).await;

        let ids: Vec<&str> = summaries.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(summaries[0].1.temp_avg, Some(41.5));
    }
}
