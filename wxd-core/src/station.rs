use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Identifier of a station as used by the remote API (e.g. "propdada").
pub type StationId = String;

/// Embedded CSV data for the stations the dashboard knows about.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/stations.csv");

/// Color used for stations without a configured color.
pub const DEFAULT_COLOR: &str = "gray";

/// A data source contributing one stream of readings: a physical weather
/// sensor or, for the sales dashboards, a sales region.
///
/// Stations are static configuration and never mutated at runtime.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Station {
    /// API station identifier (e.g., "propdada")
    pub station_id: StationId,
    /// Human-readable label shown in legends and selectors
    pub name: String,
    /// Line color used when charting this station
    pub color: String,
}

impl Station {
    /// Parse a CSV string of station data into a vector of Stations.
    ///
    /// Expected CSV columns: station_id, name, color. A missing name falls
    /// back to the station id and a missing color to [`DEFAULT_COLOR`].
    pub fn parse_station_csv(csv_object: &str) -> Result<Vec<Station>, csv::Error> {
        let mut station_list: Vec<Station> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let station_id = match record.get(0).map(str::trim) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => continue,
            };
            let name = record
                .get(1)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(&station_id)
                .to_string();
            let color = record
                .get(2)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_COLOR)
                .to_string();
            station_list.push(Station {
                station_id,
                name,
                color,
            });
        }
        Ok(station_list)
    }

    /// All stations from the embedded fixture.
    pub fn get_station_vector() -> Vec<Station> {
        match Station::parse_station_csv(CSV_OBJECT) {
            Ok(stations) => stations,
            Err(e) => {
                log::error!("embedded station fixture is malformed: {}", e);
                Vec::new()
            }
        }
    }
}

/// Immutable station lookup table, built once at start-up.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
}

impl StationRegistry {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Registry backed by the embedded `fixtures/stations.csv`.
    pub fn builtin() -> Self {
        Self::new(Station::get_station_vector())
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn get(&self, station_id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.station_id == station_id)
    }

    /// Display label for a station; unknown stations display as their id.
    pub fn label<'a>(&'a self, station_id: &'a str) -> &'a str {
        self.get(station_id)
            .map(|s| s.name.as_str())
            .unwrap_or(station_id)
    }

    /// Chart color for a station; unknown stations are drawn in gray.
    pub fn color(&self, station_id: &str) -> &str {
        self.get(station_id)
            .map(|s| s.color.as_str())
            .unwrap_or(DEFAULT_COLOR)
    }
}
