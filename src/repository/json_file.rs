//! JSON File Storage
//!
//! Persists the record list as a pretty-printed JSON array at a fixed path.
//! Writes go to a sibling temp file first and are renamed into place, so a
//! concurrent reader never observes a partially-written file.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{DomainResult, Record};
use crate::repository::RecordStorage;

/// File name used inside the application's private data directory
pub const DEFAULT_FILE_NAME: &str = "hunt_records.json";

pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the well-known file name inside `data_dir`
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(data_dir.into().join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut os = self.path.as_os_str().to_os_string();
        os.push(".tmp");
        PathBuf::from(os)
    }
}

#[async_trait]
impl RecordStorage for JsonFileStorage {
    async fn save(&self, records: &[Record]) -> DomainResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn load(&self) -> DomainResult<Option<Vec<Record>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let records = serde_json::from_slice(&bytes)?;
        Ok(Some(records))
    }
}
