//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for record persistence.
//! Implementations can use a JSON file, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Record};

/// Persistence seam for the hunt record list
///
/// The store always saves the full ordered list; a save replaces whatever
/// was persisted before.
#[async_trait]
pub trait RecordStorage: Send + Sync {
    /// Persist the full ordered record list, replacing any previous state
    async fn save(&self, records: &[Record]) -> DomainResult<()>;

    /// Load the persisted record list
    ///
    /// Returns `Ok(None)` when no state has ever been saved. A corrupt or
    /// unreadable file is an error; callers decide how to recover.
    async fn load(&self) -> DomainResult<Option<Vec<Record>>>;
}
