use serde::{Deserialize, Deserializer, Serialize};

/// One station's most recent reading, as returned by the API's
/// `current_data_live` resource.
///
/// Every field is optional on the wire; missing values stay `None` here and
/// are coerced by the aggregation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "temp", default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(rename = "precip", default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// The server could not get a live reading and returned its last
    /// stored value instead.
    #[serde(rename = "fallback", default, deserialize_with = "null_as_false")]
    pub used_fallback: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
