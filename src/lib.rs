//! Scavenger Hunt Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Persistence abstraction and JSON file implementation
//! - store: The hunt store owning the record list and its derived stats
//! - geocode: Best-effort reverse geocoding collaborator

pub mod domain;
pub mod geocode;
pub mod repository;
pub mod store;

pub use domain::{Coordinate, DomainError, DomainResult, Record};
pub use geocode::{LocationResolver, NominatimClient, ReverseGeocode};
pub use repository::{JsonFileStorage, RecordStorage};
pub use store::HuntStore;
