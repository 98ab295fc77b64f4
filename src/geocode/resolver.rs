//! Location Resolver
//!
//! Non-blocking front for a [`ReverseGeocode`] implementation. `request`
//! spawns the lookup and returns immediately; consumers poll
//! `last_address` for the most recent outcome. Overlapping requests are not
//! cancelled; each completion overwrites the slot, so the last writer wins.

use std::sync::{Arc, Mutex};

use log::warn;

use crate::domain::Coordinate;
use crate::geocode::ReverseGeocode;

#[derive(Clone)]
pub struct LocationResolver {
    geocoder: Arc<dyn ReverseGeocode>,
    last_address: Arc<Mutex<Option<String>>>,
}

impl LocationResolver {
    pub fn new(geocoder: Arc<dyn ReverseGeocode>) -> Self {
        Self {
            geocoder,
            last_address: Arc::new(Mutex::new(None)),
        }
    }

    /// Start resolving a coordinate in the background
    ///
    /// A failed lookup is logged and clears the slot, so a stale address
    /// from an earlier request is never mistaken for this one's result.
    pub fn request(&self, coordinate: Coordinate) {
        let geocoder = Arc::clone(&self.geocoder);
        let slot = Arc::clone(&self.last_address);

        tokio::spawn(async move {
            let resolved = match geocoder.reverse(coordinate).await {
                Ok(address) => address,
                Err(e) => {
                    warn!("reverse geocoding failed: {}", e);
                    None
                }
            };

            *slot.lock().unwrap_or_else(|e| e.into_inner()) = resolved;
        });
    }

    /// Most recently resolved address, if any request has completed with one
    pub fn last_address(&self) -> Option<String> {
        self.last_address
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
