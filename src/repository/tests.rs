//! Repository Integration Tests
//!
//! Tests for JsonFileStorage against a temporary directory.

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::tempdir;

    use crate::domain::{seed_records, Record};
    use crate::repository::{JsonFileStorage, RecordStorage};

    fn sample_records() -> Vec<Record> {
        let mut records = seed_records();
        records[0].found = true;
        records[0].photo_data = Some(vec![0, 1, 2, 250]);
        records[0].found_at = Some(Utc::now());
        records[0].address = Some("1 Harbor Road".to_string());
        records[3].found = true;
        records[3].found_at = Some(Utc::now());
        records
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonFileStorage::in_dir(dir.path());

        let records = sample_records();
        storage.save(&records).await.expect("save");

        let loaded = storage.load().await.expect("load").expect("some state");
        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonFileStorage::in_dir(dir.path());

        let loaded = storage.load().await.expect("load");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_error() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonFileStorage::in_dir(dir.path());
        std::fs::write(storage.path(), b"{not json").expect("write garbage");

        assert!(storage.load().await.is_err());
    }

    #[tokio::test]
    async fn test_save_creates_missing_parent_dirs() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonFileStorage::new(dir.path().join("nested").join("state.json"));

        storage.save(&seed_records()).await.expect("save");
        assert!(storage.path().exists());
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonFileStorage::in_dir(dir.path());

        storage.save(&sample_records()).await.expect("save");
        storage.save(&seed_records()).await.expect("second save");

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .expect("read_dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["hunt_records.json".to_string()]);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_state() {
        let dir = tempdir().expect("tempdir");
        let storage = JsonFileStorage::in_dir(dir.path());

        storage.save(&sample_records()).await.expect("save");
        let reset = seed_records();
        storage.save(&reset).await.expect("second save");

        let loaded = storage.load().await.expect("load").expect("some state");
        assert_eq!(loaded, reset);
    }
}
