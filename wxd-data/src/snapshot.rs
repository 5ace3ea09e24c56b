//! Combination of per-station "right now" readings into one snapshot.

use serde::Serialize;
use std::collections::HashMap;
use wxd_core::{snapshot::Snapshot, station::StationId};
use wxd_utils::numbers::{format_fixed, round_half_up};

/// Decimal places kept for temperature, humidity and wind speed.
pub const READING_PLACES: u32 = 1;
/// Decimal places kept for precipitation.
pub const PRECIPITATION_PLACES: u32 = 2;

/// The mean reading across a station selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    /// Timestamp of the last selected station that reported.
    pub timestamp: Option<String>,
    /// True if any contributing station served a cached reading.
    pub used_fallback: bool,
}

impl CombinedSnapshot {
    pub fn temperature_display(&self) -> String {
        format_fixed(self.temperature, READING_PLACES)
    }

    pub fn humidity_display(&self) -> String {
        format_fixed(self.humidity, READING_PLACES)
    }

    pub fn wind_speed_display(&self) -> String {
        format_fixed(self.wind_speed, READING_PLACES)
    }

    pub fn precipitation_display(&self) -> String {
        format_fixed(self.precipitation, PRECIPITATION_PLACES)
    }
}

/// Average the readings of `selected` stations.
///
/// Returns `None` only when the selection is empty. Stations without a
/// reading add nothing to the sums but still count in the divisor, so a
/// failed station pulls the mean toward zero. Missing fields of a present
/// reading count as 0.
pub fn aggregate(
    selected: &[StationId],
    per_station: &HashMap<StationId, Snapshot>,
) -> Option<CombinedSnapshot> {
    if selected.is_empty() {
        return None;
    }

    let mut temperature = 0.0;
    let mut humidity = 0.0;
    let mut wind_speed = 0.0;
    let mut precipitation = 0.0;
    let mut timestamp: Option<String> = None;
    let mut used_fallback = false;

    for station_id in selected {
        let Some(reading) = per_station.get(station_id) else {
            continue;
        };
        temperature += reading.temperature.unwrap_or(0.0);
        humidity += reading.humidity.unwrap_or(0.0);
        wind_speed += reading.wind_speed.unwrap_or(0.0);
        precipitation += reading.precipitation.unwrap_or(0.0);
        timestamp = reading.timestamp.clone();
        used_fallback |= reading.used_fallback;
    }

    let count = selected.len() as f64;
    Some(CombinedSnapshot {
        temperature: round_half_up(temperature / count, READING_PLACES),
        humidity: round_half_up(humidity / count, READING_PLACES),
        wind_speed: round_half_up(wind_speed / count, READING_PLACES),
        precipitation: round_half_up(precipitation / count, PRECIPITATION_PLACES),
        timestamp,
        used_fallback,
    })
}
