//! Upstream flight data source.
//!
//! One GET per request against the open-data datastore; the response
//! envelope `{ result: { records: [...] } }` is unwrapped into a
//! `FlightBoard` holding the raw records and their typed `FlightRecord`
//! view. Any failure surfaces as `UpstreamError`.

pub mod client;
pub mod types;

pub use client::FlightFetcher;
pub use types::{parse_board, FlightBoard, UpstreamError, UpstreamResult};
