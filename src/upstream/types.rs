//! Upstream payload shape and error definitions.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::flights::FlightRecord;

/// Errors that can occur while pulling the flight board.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Configured base URL does not parse.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network failure, timeout, or body read error.
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// Body was not JSON or lacked `result.records`.
    #[error("malformed upstream payload: {0}")]
    Payload(String),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// One fetch of the flight board.
///
/// `records` is the `result.records` array exactly as the upstream sent it.
/// `flights` holds the typed view of its object elements and is what the
/// aggregations run over.
#[derive(Debug, Clone, Default)]
pub struct FlightBoard {
    pub records: Vec<Value>,
    pub flights: Vec<FlightRecord>,
}

/// Extract the flight board from a datastore search response body.
///
/// The body must be a JSON object with an array at `result.records`. Array
/// elements that are not objects stay in `records` but get no typed
/// counterpart; everything else in the envelope is ignored.
pub fn parse_board(body: &[u8]) -> UpstreamResult<FlightBoard> {
    let mut envelope: Value =
        serde_json::from_slice(body).map_err(|e| UpstreamError::Payload(e.to_string()))?;

    let records = match envelope.pointer_mut("/result/records").map(Value::take) {
        Some(Value::Array(records)) => records,
        Some(_) => {
            return Err(UpstreamError::Payload("result.records is not an array".to_string()))
        }
        None => return Err(UpstreamError::Payload("missing result.records".to_string())),
    };

    let mut flights = Vec::with_capacity(records.len());
    for (index, raw) in records.iter().enumerate() {
        if !raw.is_object() {
            tracing::warn!(index, "Skipping non-object flight record");
            continue;
        }
        match FlightRecord::deserialize(raw) {
            Ok(record) => flights.push(record),
            Err(e) => tracing::warn!(index, error = %e, "Skipping undecodable flight record"),
        }
    }

    Ok(FlightBoard { records, flights })
}
