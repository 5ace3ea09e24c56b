//! What the dashboard is currently looking at.
//!
//! `SelectionState` is a plain value: the controller reads it to decide which
//! stations to fetch, and the rendering side reads it to build selector
//! controls.

use serde::{Deserialize, Serialize};
use wxd_core::{metric::Metric, period::Period, station::StationId};

/// Station selected on first load and after a reset.
pub const DEFAULT_STATION: &str = "propdada";

/// Active stations, period and metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectionFields")]
pub struct SelectionState {
    /// Insertion-ordered, never contains duplicates
    selected_stations: Vec<StationId>,
    period: Period,
    metric: Metric,
}

/// Serialized form of a selection, before duplicates are dropped.
#[derive(Deserialize)]
struct SelectionFields {
    selected_stations: Vec<StationId>,
    #[serde(default)]
    period: Period,
    #[serde(default)]
    metric: Metric,
}

impl From<SelectionFields> for SelectionState {
    fn from(fields: SelectionFields) -> Self {
        SelectionState::new(fields.selected_stations, fields.period, fields.metric)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_stations: vec![DEFAULT_STATION.to_string()],
            period: Period::default(),
            metric: Metric::default(),
        }
    }
}

impl SelectionState {
    /// Build a selection; repeated station ids keep their first position.
    pub fn new<I, S>(stations: I, period: Period, metric: Metric) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StationId>,
    {
        let mut selected_stations: Vec<StationId> = Vec::new();
        for station in stations {
            let station = station.into();
            if !selected_stations.contains(&station) {
                selected_stations.push(station);
            }
        }
        Self {
            selected_stations,
            period,
            metric,
        }
    }

    pub fn selected_stations(&self) -> &[StationId] {
        &self.selected_stations
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn metric(&self) -> &Metric {
        &self.metric
    }

    pub fn is_selected(&self, station_id: &str) -> bool {
        self.selected_stations.iter().any(|s| s == station_id)
    }

    /// Remove `station_id` if selected, otherwise append it at the end.
    pub fn toggle(&mut self, station_id: &str) {
        if let Some(pos) = self.selected_stations.iter().position(|s| s == station_id) {
            self.selected_stations.remove(pos);
        } else {
            self.selected_stations.push(station_id.to_string());
        }
    }

    pub fn set_period(&mut self, period: Period) {
        self.period = period;
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Back to the default station, period and metric.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
