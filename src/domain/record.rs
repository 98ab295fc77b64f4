//! Record Entity
//!
//! Represents one hunt target: fixed identity (id/title/hint) plus mutable
//! progress fields (found flag, photo, found timestamp, resolved address).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One trackable hunt target
///
/// Serializes with camelCase field names; the optional fields are omitted
/// entirely when absent rather than written as null or empty placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier, assigned at seeding, never regenerated
    pub id: String,
    /// Display name
    pub title: String,
    /// Display clue text
    pub hint: String,
    /// Found status; independent of whether a photo is attached
    #[serde(default)]
    pub found: bool,
    /// Captured photo bytes, stored as base64 on disk
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "photo_base64"
    )]
    pub photo_data: Option<Vec<u8>>,
    /// Set when the record transitions to found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_at: Option<DateTime<Utc>>,
    /// Reverse-geocoded address captured at mark time, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Record {
    /// Create a new unfound record with empty progress fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            hint: hint.into(),
            found: false,
            photo_data: None,
            found_at: None,
            address: None,
        }
    }
}

/// The fixed default hunt used when no persisted state exists
pub fn seed_records() -> Vec<Record> {
    [
        (
            "clock-tower",
            "The Old Clock Tower",
            "Its hands have pointed at noon since the storm of '87.",
        ),
        (
            "iron-bridge",
            "The Iron Footbridge",
            "Count the rivets on the third arch from the north bank.",
        ),
        (
            "mural-alley",
            "The Painted Alley",
            "A whale swims across three garage doors.",
        ),
        (
            "stone-lion",
            "The Sleeping Lion",
            "He guards the library steps but never opens his eyes.",
        ),
        (
            "lighthouse",
            "The Harbor Lighthouse",
            "Striped like a candy cane, locked since the keeper retired.",
        ),
        (
            "oak-hollow",
            "The Hollow Oak",
            "Big enough to stand inside; look up for the initials.",
        ),
        (
            "carousel",
            "The Silent Carousel",
            "Forty-two horses and not one of them matches.",
        ),
        (
            "well-square",
            "The Wishing Well",
            "At the center of the market square; bring a coin.",
        ),
        (
            "train-depot",
            "The Abandoned Depot",
            "The timetable still lists the last train out.",
        ),
        (
            "bell-chapel",
            "The Chapel Bell",
            "Rings on its own when the wind comes off the water.",
        ),
    ]
    .into_iter()
    .map(|(id, title, hint)| Record::new(id, title, hint))
    .collect()
}

mod photo_base64 {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => STANDARD.encode(bytes).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
