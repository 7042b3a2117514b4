//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned / propagated)
//!     → handlers.rs (fetch board, aggregate)
//!     → response.rs (JSON body or HTTP 500)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};
pub use response::{ApiError, CityResponse, CountResponse, GetawayResponse, HealthResponse};
pub use server::{AppState, HttpServer};
