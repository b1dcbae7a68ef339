use serde::{Deserialize, Deserializer, Serialize};

/// Latitude/longitude pair for the caller's location.
///
/// The geolocation service has served these as JSON strings or numbers at
/// different times; both are accepted and carried verbatim. No range
/// validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(deserialize_with = "string_or_number")]
    pub latitude: String,
    #[serde(deserialize_with = "string_or_number")]
    pub longitude: String,
}

/// One predicted flyover: rise time as Unix epoch seconds plus visibility
/// duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    pub risetime: i64,
    pub duration: i64,
}

/// Body shape of the IP-echo service.
#[derive(Debug, Deserialize)]
pub struct IpPayload {
    pub ip: String,
}

/// Body shape of the geolocation service; coordinates are nested under `data`.
#[derive(Debug, Deserialize)]
pub struct GeoPayload {
    pub data: Coordinates,
}

/// Body shape of the flyover-prediction service; the pass list sits in
/// `response`, chronological as supplied.
#[derive(Debug, Deserialize)]
pub struct FlyoverPayload {
    pub response: Vec<Pass>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
