//! Geocoding Layer
//!
//! Best-effort reverse geocoding: a coordinate goes in, zero or one
//! formatted address comes out. Nothing here blocks the caller and nothing
//! here fails loudly; a lookup that errors out just means no address.

mod nominatim;
mod resolver;

use async_trait::async_trait;

use crate::domain::{Coordinate, DomainResult};

pub use nominatim::NominatimClient;
pub use resolver::LocationResolver;

/// Abstract reverse geocoder
///
/// Implementations can call a real service, a stub, etc.
#[async_trait]
pub trait ReverseGeocode: Send + Sync {
    /// Resolve a coordinate to a formatted address, if the service knows one
    async fn reverse(&self, coordinate: Coordinate) -> DomainResult<Option<String>>;
}
