//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has no I/O; its only dependencies are serde/chrono for
//! serialization.

mod coordinate;
mod error;
mod record;

pub use coordinate::Coordinate;
pub use error::{DomainError, DomainResult};
pub use record::{seed_records, Record};
