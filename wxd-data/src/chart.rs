//! Line chart payload handed to the chart renderer.
//!
//! All structs derive `Serialize` with camelCase keys so they can be passed
//! to the JavaScript chart layer as-is.

use crate::alignment::AlignedSeriesSet;
use serde::Serialize;
use wxd_core::{metric::Metric, station::StationRegistry};

/// Curve smoothing passed through to the renderer.
const LINE_TENSION: f64 = 0.1;

/// One line in the chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    /// Gaps stay `null` so the renderer breaks the line instead of
    /// drawing through zero.
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    /// Build the payload for `metric` from an aligned series set, naming and
    /// coloring each line from the station registry.
    pub fn from_aligned(
        aligned: &AlignedSeriesSet,
        metric: &Metric,
        registry: &StationRegistry,
    ) -> Self {
        let datasets = aligned
            .series
            .iter()
            .map(|s| {
                let color = registry.color(&s.station_id).to_string();
                ChartDataset {
                    label: registry.label(&s.station_id).to_string(),
                    data: s.values.clone(),
                    border_color: color.clone(),
                    background_color: color,
                    fill: false,
                    tension: LINE_TENSION,
                }
            })
            .collect();

        ChartData {
            title: format!("{} Trend", metric.label()),
            labels: aligned.labels.clone(),
            datasets,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
