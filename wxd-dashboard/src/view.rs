//! Everything the rendering side needs after one refresh cycle.

use crate::controller::StationReadings;
use crate::selection::SelectionState;
use serde::Serialize;
use wxd_core::station::StationRegistry;
use wxd_data::{
    alignment::{align_ordered, AlignedSeriesSet},
    chart::ChartData,
    snapshot::{aggregate, CombinedSnapshot},
};

/// Reduced, render-ready state: the selection it was built for, the
/// combined "right now" reading and the aligned trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: SelectionState,
    /// `None` when no station is selected
    pub now: Option<CombinedSnapshot>,
    /// Series ordered as the stations were selected
    pub trend: AlignedSeriesSet,
}

impl DashboardView {
    pub fn build(selection: &SelectionState, readings: &StationReadings) -> Self {
        let stations = selection.selected_stations();
        Self {
            selection: selection.clone(),
            now: aggregate(stations, &readings.snapshots),
            trend: align_ordered(stations, &readings.series),
        }
    }

    /// Line chart payload for the selected metric.
    pub fn chart(&self, registry: &StationRegistry) -> ChartData {
        ChartData::from_aligned(&self.trend, self.selection.metric(), registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxd_core::{metric::Metric, period::Period, series::SparseSeries, snapshot::Snapshot};

    #[test]
    fn test_build_follows_selection_order() {
        let mut readings = StationReadings::default();
        for (id, temp) in [("A", 10.0), ("B", 20.0)] {
            readings.snapshots.insert(
                id.to_string(),
                Snapshot {
                    temperature: Some(temp),
                    ..Snapshot::default()
                },
            );
            readings
                .series
                .insert(id.to_string(), [("t1", Some(temp))].into_iter().collect::<SparseSeries>());
        }
        let selection = SelectionState::new(["B", "A"], Period::SevenDays, Metric::default());

        let view = DashboardView::build(&selection, &readings);
        assert_eq!(view.trend.station_ids().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(view.now.as_ref().unwrap().temperature, 15.0);

        let chart = view.chart(&StationRegistry::default());
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[0].label, "B");
    }

    #[test]
    fn test_build_with_no_readings() {
        let selection = SelectionState::default();
        let view = DashboardView::build(&selection, &StationReadings::default());
        let now = view.now.unwrap();
        assert_eq!(now.temperature, 0.0);
        assert!(!now.used_fallback);
        assert!(view.trend.is_empty());
    }
}
