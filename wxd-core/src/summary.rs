//! Per-station period summaries kept by the backend.

use serde::{Deserialize, Serialize};

/// Averages over a period for one station, as computed server-side.
/// Columns the server does not track come back as null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    #[serde(default)]
    pub temp_avg: Option<f64>,
    #[serde(default)]
    pub humidity_avg: Option<f64>,
    #[serde(default)]
    pub wind_speed_avg: Option<f64>,
    #[serde(default)]
    pub precip_total: Option<f64>,
}
