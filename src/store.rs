//! Hunt Store
//!
//! Owns the ordered record list, its derived statistics, and the
//! mutate-then-persist-then-notify contract. Mutations never fail loudly:
//! unknown ids are silent no-ops and persistence failures are logged while
//! the in-memory list stays authoritative.

use chrono::Utc;
use log::{debug, info, warn};

use crate::domain::{seed_records, Record};
use crate::repository::RecordStorage;

/// Finding at least this many targets earns the discount
pub const DISCOUNT_THRESHOLD: usize = 7;

type ChangeListener = Box<dyn Fn(&[Record]) + Send + Sync>;

/// The owner of the record list and its persistence
///
/// Construct one instance at application start with [`HuntStore::open`] and
/// hand it to whatever consumes it; there is no implicit global.
pub struct HuntStore {
    records: Vec<Record>,
    storage: Box<dyn RecordStorage>,
    listeners: Vec<ChangeListener>,
}

impl HuntStore {
    /// Load persisted state, or seed the default hunt when none is usable
    ///
    /// A missing file and a corrupt file are treated alike: the fixed
    /// ten-record seed is installed and immediately persisted. Never fails.
    pub async fn open(storage: Box<dyn RecordStorage>) -> Self {
        let records = match storage.load().await {
            Ok(Some(records)) => records,
            Ok(None) => {
                info!("no saved hunt state, seeding defaults");
                Self::seed_and_persist(&*storage).await
            }
            Err(e) => {
                warn!("discarding unreadable hunt state, seeding defaults: {}", e);
                Self::seed_and_persist(&*storage).await
            }
        };

        Self {
            records,
            storage,
            listeners: Vec::new(),
        }
    }

    async fn seed_and_persist(storage: &dyn RecordStorage) -> Vec<Record> {
        let records = seed_records();
        if let Err(e) = storage.save(&records).await {
            warn!("failed to persist seeded hunt state: {}", e);
        }
        records
    }

    /// Current ordered record list
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up a record by id
    pub fn record(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records currently marked found
    pub fn found_count(&self) -> usize {
        self.records.iter().filter(|r| r.found).count()
    }

    /// Whether every record is found
    pub fn all_found(&self) -> bool {
        self.found_count() == self.records.len()
    }

    /// Whether enough records are found to earn the discount
    pub fn has_discount(&self) -> bool {
        self.found_count() >= DISCOUNT_THRESHOLD
    }

    /// Register a listener invoked with the new list after each mutation
    pub fn subscribe(&mut self, listener: impl Fn(&[Record]) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Mark a record as found
    ///
    /// `photo_data` and `address` are stored exactly as passed: `None`
    /// overwrites (clears) a previously captured value. `found_at` is set to
    /// the current time on every call, so repeating the call refreshes the
    /// timestamp but changes nothing else. Unknown id: silent no-op, no
    /// write.
    pub async fn mark_found(
        &mut self,
        id: &str,
        photo_data: Option<Vec<u8>>,
        address: Option<String>,
    ) {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            debug!("mark_found: unknown record id {}", id);
            return;
        };

        record.found = true;
        record.found_at = Some(Utc::now());
        record.photo_data = photo_data;
        record.address = address;

        self.persist().await;
        self.notify();
    }

    /// Clear a record's photo, leaving found status, timestamp and address
    /// untouched. Unknown id: silent no-op, no write.
    pub async fn remove_photo(&mut self, id: &str) {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            debug!("remove_photo: unknown record id {}", id);
            return;
        };

        record.photo_data = None;

        self.persist().await;
        self.notify();
    }

    /// Return every record to its unfound state
    ///
    /// Clears `found`, `photo_data`, `found_at` and `address` on all
    /// records; id/title/hint are untouched. The only bulk mutation.
    pub async fn reset_all(&mut self) {
        for record in &mut self.records {
            record.found = false;
            record.photo_data = None;
            record.found_at = None;
            record.address = None;
        }

        self.persist().await;
        self.notify();
    }

    async fn persist(&self) {
        if let Err(e) = self.storage.save(&self.records).await {
            warn!("failed to persist hunt state: {}", e);
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.records);
        }
    }
}
