use serde::{Deserialize, Serialize};
use std::fmt;

/// Metric charted when nothing else is selected.
pub const DEFAULT_METRIC: &str = "temp_avg";

/// Column id -> human label for every metric the dashboard knows how to name.
pub static METRIC_LABELS: &[(&str, &str)] = &[
    ("temp_avg", "average temp"),
    ("temp_low", "low temp"),
    ("temp_high", "high temp"),
    ("humidity_avg", "average humidity"),
    ("wind_speed_high", "high wind"),
    ("wind_speed_low", "low wind"),
    ("wind_speed_avg", "average wind"),
    ("wind_gust_max", "max wind gust"),
    ("dew_point_avg", "average dewpoint"),
    ("windchill_avg", "average wind chill"),
    ("heatindex_avg", "ave heat index"),
    ("pressure_trend", "pressure trend"),
    ("solar_rad_max", "solar radiation"),
    ("uv_max", "UV"),
    ("precip_rate", "precipitation rate"),
    ("precip_total", "total precip"),
];

/// Columns returned by the API's column listing that are not chartable.
pub const NON_METRIC_COLUMNS: [&str; 3] = ["station_id", "date", "local_time"];

/// Names the numeric column to chart. One metric is active at a time.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metric(pub String);

impl Metric {
    pub fn new(column: impl Into<String>) -> Self {
        Metric(column.into())
    }

    /// Column id sent to the API.
    pub fn column(&self) -> &str {
        &self.0
    }

    /// Human label; unknown columns display as themselves.
    pub fn label(&self) -> &str {
        label_for(&self.0)
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::new(DEFAULT_METRIC)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Metric {
    fn from(value: &str) -> Self {
        Metric::new(value)
    }
}

/// Look up the display label for a column id.
pub fn label_for(column: &str) -> &str {
    METRIC_LABELS
        .iter()
        .find(|(id, _)| *id == column)
        .map(|(_, label)| *label)
        .unwrap_or(column)
}

/// Drop bookkeeping columns from an API column listing.
pub fn chartable_columns(columns: Vec<String>) -> Vec<String> {
    columns
        .into_iter()
        .filter(|c| !NON_METRIC_COLUMNS.contains(&c.as_str()))
        .collect()
}
