//! Alignment of sparse per-station series onto one shared label axis.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use wxd_core::{series::SparseSeries, station::StationId};

/// One station's values, index-aligned to [`AlignedSeriesSet::labels`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSeries {
    pub station_id: StationId,
    pub values: Vec<Option<f64>>,
}

/// Dense, label-sorted matrix built from several sparse series.
///
/// `labels` is strictly ascending with no duplicates, and every entry of
/// `series` has exactly `labels.len()` values. A station that did not
/// report a label holds `None` at that position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlignedSeriesSet {
    pub labels: Vec<String>,
    pub series: Vec<StationSeries>,
}

impl AlignedSeriesSet {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.series.is_empty()
    }

    /// Aligned values for one station, if it contributed.
    pub fn series_for(&self, station_id: &str) -> Option<&[Option<f64>]> {
        self.series
            .iter()
            .find(|s| s.station_id == station_id)
            .map(|s| s.values.as_slice())
    }

    pub fn station_ids(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.station_id.as_str())
    }
}

/// Align every station in `per_station`, ordered by station id.
pub fn align(per_station: &HashMap<StationId, SparseSeries>) -> AlignedSeriesSet {
    let mut order: Vec<&StationId> = per_station.keys().collect();
    order.sort();
    align_stations(order.into_iter().map(String::as_str), per_station)
}

/// Align the stations named in `order`, in that order.
///
/// Stations in `order` with no entry in `per_station` are omitted rather
/// than filled with nulls, and only the stations that end up in the output
/// contribute labels.
pub fn align_ordered(
    order: &[StationId],
    per_station: &HashMap<StationId, SparseSeries>,
) -> AlignedSeriesSet {
    align_stations(order.iter().map(String::as_str), per_station)
}

fn align_stations<'a>(
    order: impl Iterator<Item = &'a str>,
    per_station: &'a HashMap<StationId, SparseSeries>,
) -> AlignedSeriesSet {
    let mut seen: HashSet<&str> = HashSet::new();
    let contributing: Vec<(&str, &SparseSeries)> = order
        .filter(|id| seen.insert(*id))
        .filter_map(|id| per_station.get(id).map(|series| (id, series)))
        .collect();

    let labels: BTreeSet<&str> = contributing
        .iter()
        .flat_map(|(_, series)| series.points().map(|(label, _)| label))
        .collect();

    let series = contributing
        .iter()
        .map(|(id, sparse)| {
            // Later occurrences of a repeated label overwrite earlier ones.
            let lookup: HashMap<&str, Option<f64>> = sparse.points().collect();
            let values = labels
                .iter()
                .map(|label| lookup.get(label).copied().flatten())
                .collect();
            StationSeries {
                station_id: id.to_string(),
                values,
            }
        })
        .collect();

    AlignedSeriesSet {
        labels: labels.into_iter().map(str::to_string).collect(),
        series,
    }
}
