//! Refresh orchestration: fan out per-station fetches, collect whatever
//! succeeds, and publish the newest result.

use crate::selection::SelectionState;
use crate::view::DashboardView;
use futures::future::join_all;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use wxd_core::{
    fetch::{FetchError, StationFetcher},
    metric::Metric,
    period::Period,
    series::SparseSeries,
    snapshot::Snapshot,
    station::StationId,
};

/// Raw per-station results of one refresh cycle. A station whose fetch
/// failed appears in neither map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationReadings {
    pub snapshots: HashMap<StationId, Snapshot>,
    pub series: HashMap<StationId, SparseSeries>,
}

/// Result of a single `refresh` call.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// Sequence number assigned when the refresh started
    pub generation: u64,
    /// False when a newer refresh was issued before this one settled; the
    /// readings were then discarded instead of published.
    pub applied: bool,
    pub readings: StationReadings,
}

/// Decrements the in-flight counter when a batch settles, however it ends.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        InFlight(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Drives the dashboard: each selection change becomes one refresh cycle.
///
/// Refreshes are never cancelled. Each one is tagged with a generation
/// number, and only the most recently issued generation may publish, so a
/// slow stale cycle can't overwrite a fresher one.
pub struct DashboardController<F> {
    fetcher: F,
    generation: AtomicU64,
    in_flight: AtomicUsize,
    published: Mutex<Option<DashboardView>>,
}

impl<F: StationFetcher> DashboardController<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            generation: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            published: Mutex::new(None),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// True while any refresh batch has fetches outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Generation number of the most recently issued refresh.
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// The most recently applied view, if any refresh has published yet.
    pub fn published(&self) -> Option<DashboardView> {
        self.published
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch every selected station concurrently and publish the result if
    /// no newer refresh has been issued meanwhile.
    ///
    /// Never fails: a station whose fetch fails is logged and left out of
    /// this cycle's readings.
    pub async fn refresh(&self, state: &SelectionState) -> RefreshOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _in_flight = InFlight::enter(&self.in_flight);

        info!(
            "Refresh #{}: {} station(s), period {}, metric {}",
            generation,
            state.selected_stations().len(),
            state.period(),
            state.metric()
        );

        let fetches = state
            .selected_stations()
            .iter()
            .map(|station_id| self.fetch_station(station_id, state.period(), state.metric()));
        let results = join_all(fetches).await;

        let mut readings = StationReadings::default();
        for (station_id, result) in results {
            match result {
                Ok((snapshot, series)) => {
                    readings.snapshots.insert(station_id.clone(), snapshot);
                    readings.series.insert(station_id, series);
                }
                Err(e) => {
                    warn!("Fetch failed for {}: {}", station_id, e);
                }
            }
        }

        info!(
            "Refresh #{} settled: {}/{} station(s) reported",
            generation,
            readings.snapshots.len(),
            state.selected_stations().len()
        );

        let view = DashboardView::build(state, &readings);
        let applied = self.publish(generation, view);

        RefreshOutcome {
            generation,
            applied,
            readings,
        }
    }

    /// Snapshot and series for one station, requested together. Either
    /// failing drops the station for this cycle.
    async fn fetch_station(
        &self,
        station_id: &str,
        period: Period,
        metric: &Metric,
    ) -> (StationId, Result<(Snapshot, SparseSeries), FetchError>) {
        let (snapshot, series) = futures::join!(
            self.fetcher.fetch_snapshot(station_id),
            self.fetcher.fetch_series(station_id, period, metric)
        );
        let result = match (snapshot, series) {
            (Ok(snapshot), Ok(series)) => Ok((snapshot, series)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        (station_id.to_string(), result)
    }

    fn publish(&self, generation: u64, view: DashboardView) -> bool {
        let mut published = self
            .published
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let latest = self.generation.load(Ordering::SeqCst);
        if generation != latest {
            debug!(
                "Discarding refresh #{}: superseded by #{}",
                generation, latest
            );
            return false;
        }
        *published = Some(view);
        true
    }
}
