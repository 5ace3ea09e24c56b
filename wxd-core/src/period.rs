use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-side aggregation window for graph data.
///
/// The core treats a period as an opaque selector key; the API decides
/// which table and cutoff it maps to.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "ytd")]
    YearToDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period '{0}' (expected one of 1d, 7d, 30d, ytd)")]
pub struct ParsePeriodError(pub String);

impl Period {
    pub const ALL: [Period; 4] = [
        Period::OneDay,
        Period::SevenDays,
        Period::ThirtyDays,
        Period::YearToDate,
    ];

    /// Key sent to the API as the `period` query parameter.
    pub fn as_key(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::SevenDays => "7d",
            Period::ThirtyDays => "30d",
            Period::YearToDate => "ytd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::OneDay => "Today",
            Period::SevenDays => "Last 7 Days",
            Period::ThirtyDays => "Last 30 Days",
            Period::YearToDate => "Year to Date",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParsePeriodError(s.to_string()))
    }
}
