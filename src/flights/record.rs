//! Typed view of one row of the airport flight board.
//!
//! The upstream dataset uses terse column names (`CHRMINE`, `CHLOCCT`, ...).
//! The columns the aggregations read are mapped onto named fields here. The
//! rest are ignored; `GET /` serves the upstream rows themselves, never this
//! view.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Arrival/departure status of a flight (`CHRMINE`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlightStatus {
    /// Arrived at the monitored airport (inbound).
    Landed,
    /// Left the monitored airport (outbound).
    Departed,
    /// Any other non-empty board status, e.g. `DELAYED` or `CANCELED`.
    Other(String),
    /// Status missing, `null` or empty.
    #[default]
    Unknown,
}

impl FlightStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FlightStatus::Landed => "LANDED",
            FlightStatus::Departed => "DEPARTED",
            FlightStatus::Other(s) => s,
            FlightStatus::Unknown => "",
        }
    }

    pub fn is_inbound(&self) -> bool {
        matches!(self, FlightStatus::Landed)
    }

    pub fn is_outbound(&self) -> bool {
        matches!(self, FlightStatus::Departed)
    }
}

impl From<String> for FlightStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "LANDED" => FlightStatus::Landed,
            "DEPARTED" => FlightStatus::Departed,
            "" => FlightStatus::Unknown,
            _ => FlightStatus::Other(value),
        }
    }
}

impl<'de> Deserialize<'de> for FlightStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_string(deserializer).map(FlightStatus::from)
    }
}

/// One flight record as published by the open-data feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightRecord {
    /// Board status (`CHRMINE`).
    #[serde(rename = "CHRMINE", default)]
    pub status: FlightStatus,

    /// Origin or destination country (`CHLOCCT`).
    #[serde(rename = "CHLOCCT", default, deserialize_with = "lenient_string")]
    pub country: String,

    /// Origin or destination city (`CHLOC1T`).
    #[serde(rename = "CHLOC1T", default, deserialize_with = "lenient_string")]
    pub city: String,

    /// Scheduled time (`CHSTOL`), unparsed.
    #[serde(rename = "CHSTOL", default, deserialize_with = "lenient_string")]
    pub scheduled: String,

    /// Actual time (`CHPTOL`), unparsed.
    #[serde(rename = "CHPTOL", default, deserialize_with = "lenient_string")]
    pub actual: String,

    /// Carrier code (`CHOPER`).
    #[serde(rename = "CHOPER", default, deserialize_with = "lenient_string")]
    pub operator: String,

    /// Flight number without the carrier prefix (`CHFLTN`).
    #[serde(rename = "CHFLTN", default, deserialize_with = "lenient_string")]
    pub flight_number: String,
}

impl FlightRecord {
    /// Carrier code followed by flight number, e.g. `LY001`.
    pub fn flight_id(&self) -> String {
        format!("{}{}", self.operator, self.flight_number)
    }

    /// Case-insensitive match against the record's country.
    ///
    /// `country` must already be lower-cased.
    pub fn is_from_country(&self, country: &str) -> bool {
        self.country.to_lowercase() == country
    }
}

/// Accept a string, number or boolean as text; `null` becomes empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
