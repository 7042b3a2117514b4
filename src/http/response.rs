//! Response bodies and error mapping.
//!
//! # Responsibilities
//! - JSON shapes returned by every endpoint
//! - Map upstream failures and request timeouts to HTTP 500 with a generic
//!   message
//!
//! # Design Decisions
//! - The cause of an upstream failure is logged, never sent to the client
//! - No partial results: any failure replaces the whole body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flights::FlightRecord;
use crate::upstream::UpstreamError;

/// Reported on both sides of a quick getaway when no pair exists.
pub const NO_FLIGHT: &str = "Does Not Exist";

/// Message returned with every HTTP 500.
pub const FETCH_FAILED: &str = "Failed to fetch flight data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityResponse {
    /// Lower-cased city name, left out when there are no outbound flights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetawayResponse {
    pub departure: String,
    pub arrival: String,
}

impl GetawayResponse {
    pub fn from_pair(pair: Option<(&FlightRecord, &FlightRecord)>) -> Self {
        match pair {
            Some((out, back)) => Self {
                departure: out.flight_id(),
                arrival: back.flight_id(),
            },
            None => Self {
                departure: NO_FLIGHT.to_string(),
                arrival: NO_FLIGHT.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub version: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request failure. Every variant answers HTTP 500.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The whole request outran `timeouts.request_secs`.
    #[error("request timed out")]
    TimedOut,

    /// A middleware layer failed for another reason.
    #[error("middleware error: {0}")]
    Middleware(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: FETCH_FAILED.to_string(),
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;
