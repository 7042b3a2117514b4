//! Flight board domain.
//!
//! # Data Flow
//! ```text
//! upstream JSON row
//!     → record.rs (typed FlightRecord, lenient field decoding)
//!     → aggregate.rs (counts, grouping, pair search)
//!     → time.rs (timestamp parsing, delay rule)
//! ```
//!
//! # Design Decisions
//! - Records are read-only once decoded; aggregations borrow them
//! - Aggregations are total: a malformed field degrades to a neutral value

pub mod aggregate;
pub mod record;
pub mod time;

pub use record::{FlightRecord, FlightStatus};
pub use time::{is_delayed, parse_timestamp};
