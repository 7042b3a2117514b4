//! Flight board statistics service.
//!
//! Pulls the airport flight board from a public open-data API on every
//! request and answers with derived figures: inbound/outbound counts,
//! per-country counts, delayed flights, the most popular destination and a
//! "quick getaway" outbound/inbound pairing.

pub mod config;
pub mod flights;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::ServiceConfig;
pub use flights::{FlightRecord, FlightStatus};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::{FlightFetcher, UpstreamError};
