//! Dataset Module Tests
//!
//! Validates dataset construction and the publish/snapshot lifecycle.
//!
//! ## Test Scopes
//! - **Generator**: Size, key range, ordering, naming and determinism.
//! - **DatasetStore**: Replace/snapshot semantics, including concurrent readers.
//! - **Handlers**: Size validation and the regenerate endpoint.

#[cfg(test)]
mod tests {
    use crate::dataset::generator::{
        generate_dataset, is_valid_size, CATEGORIES, KEY_BASE, MAX_SIZE, MIN_SIZE,
    };
    use crate::dataset::handlers::{handle_generate, parse_size};
    use crate::dataset::protocol::{GenerateParams, GenerateResponse};
    use crate::dataset::store::DatasetStore;
    use crate::dataset::types::{Dataset, Record};
    use crate::error::ValidationError;
    use crate::search::engine::{timed_search, SearchAlgorithm};
    use axum::extract::Query;
    use axum::http::{header, StatusCode, Uri};
    use axum::response::IntoResponse;
    use axum::{Extension, Json};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;

    fn record(key: i64) -> Record {
        Record {
            key,
            name: format!("Record {}", key),
            category: "Statistika".to_string(),
        }
    }

    // ============================================================
    // GENERATOR TESTS
    // ============================================================

    #[test]
    fn test_generate_exact_size_and_key_range() {
        for size in [1, 5, 1000, MAX_SIZE] {
            let dataset = generate_dataset(size);

            assert_eq!(dataset.len(), size);
            assert_eq!(dataset.records()[0].key, KEY_BASE + 1);
            assert_eq!(dataset.records()[size - 1].key, KEY_BASE + size as i64);
        }
    }

    #[test]
    fn test_generate_keys_strictly_ascending() {
        let dataset = generate_dataset(MAX_SIZE);

        // Strictly ascending also implies unique
        assert!(dataset
            .records()
            .windows(2)
            .all(|pair| pair[0].key < pair[1].key));
    }

    #[test]
    fn test_generate_names_and_categories() {
        let dataset = generate_dataset(7);
        let records = dataset.records();

        assert_eq!(records[0].name, "Record 1");
        assert_eq!(records[0].category, CATEGORIES[1]);

        // Ordinal 6 wraps around to the first category
        assert_eq!(records[5].name, "Record 6");
        assert_eq!(records[5].category, "Teknik Informatika");

        assert_eq!(records[6].category, "Sistem Informasi");
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate_dataset(250), generate_dataset(250));
    }

    #[test]
    fn test_dataset_construction_sorts_by_key() {
        let dataset = Dataset::from_records(vec![record(30), record(10), record(20)]);
        let keys: Vec<i64> = dataset.records().iter().map(|r| r.key).collect();

        assert_eq!(keys, vec![10, 20, 30]);
    }

    #[test]
    fn test_size_bounds() {
        assert!(!is_valid_size(0));
        assert!(is_valid_size(MIN_SIZE));
        assert!(is_valid_size(MAX_SIZE));
        assert!(!is_valid_size(MAX_SIZE + 1));
    }

    // ============================================================
    // STORE TESTS
    // ============================================================

    #[test]
    fn test_store_initial_snapshot() {
        let store = DatasetStore::new(generate_dataset(10));
        let snapshot = store.snapshot();

        assert_eq!(snapshot.version, 0);
        assert_eq!(snapshot.dataset.len(), 10);
        assert_eq!(store.len(), 10);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_store_replace_bumps_version() {
        let store = DatasetStore::new(generate_dataset(10));

        assert_eq!(store.replace(generate_dataset(20)), 1);
        assert_eq!(store.replace(generate_dataset(30)), 2);
        assert_eq!(store.version(), 2);
        assert_eq!(store.len(), 30);
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = DatasetStore::new(generate_dataset(10));
        let before = store.snapshot();

        store.replace(generate_dataset(3));
        let after = store.snapshot();

        // The earlier reader still sees the complete old dataset
        assert_eq!(before.dataset.len(), 10);
        assert_eq!(before.dataset.records()[9].key, KEY_BASE + 10);
        assert_eq!(after.dataset.len(), 3);
        assert!(!Arc::ptr_eq(&before.dataset, &after.dataset));
    }

    #[test]
    fn test_concurrent_search_sees_old_or_new_never_mixed() {
        let store = DatasetStore::new(generate_dataset(5));
        let stop = Arc::new(AtomicBool::new(false));
        let probe = KEY_BASE + 30;

        let writer = {
            let store = store.clone();
            let stop = stop.clone();
            thread::spawn(move || {
                for round in 0..200 {
                    let size = if round % 2 == 0 { 50 } else { 5 };
                    store.replace(generate_dataset(size));
                }
                stop.store(true, Ordering::SeqCst);
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                let stop = stop.clone();
                thread::spawn(move || {
                    let mut rounds = 0;
                    while !stop.load(Ordering::SeqCst) || rounds < 100 {
                        let snapshot = store.snapshot();
                        let size = snapshot.dataset.len();
                        assert!(size == 5 || size == 50, "unexpected size {}", size);

                        let linear = timed_search(SearchAlgorithm::Linear, &snapshot.dataset, probe);
                        let binary = timed_search(SearchAlgorithm::Binary, &snapshot.dataset, probe);

                        // Presence must match the snapshot that was searched
                        assert_eq!(linear.found(), size == 50);
                        assert_eq!(linear.record, binary.record);
                        if let Some(found) = linear.record {
                            assert_eq!(found.key, probe);
                            assert_eq!(found.name, "Record 30");
                        }
                        rounds += 1;
                    }
                })
            })
            .collect();

        writer.join().expect("writer panicked");
        for reader in readers {
            reader.join().expect("reader panicked");
        }

        assert_eq!(store.version(), 200);
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size(Some("5")), Ok(5));
        assert_eq!(parse_size(Some(" 50000 ")), Ok(50000));
        assert_eq!(parse_size(None), Err(ValidationError::MissingSize));
        assert!(matches!(
            parse_size(Some("0")),
            Err(ValidationError::InvalidSize(_))
        ));
        assert!(matches!(
            parse_size(Some("50001")),
            Err(ValidationError::InvalidSize(_))
        ));
        assert!(matches!(
            parse_size(Some("-3")),
            Err(ValidationError::InvalidSize(_))
        ));
        assert!(matches!(
            parse_size(Some("ten")),
            Err(ValidationError::InvalidSize(_))
        ));
    }

    #[tokio::test]
    async fn test_handle_generate_replaces_dataset() {
        let store = DatasetStore::new(generate_dataset(1000));

        let (status, Json(body)) = handle_generate(
            Ok(Query(GenerateParams {
                size: Some("5".to_string()),
            })),
            Extension(store.clone()),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert_eq!(body.size, 5);
        assert_eq!(store.len(), 5);
        assert_eq!(store.version(), 1);
    }

    #[tokio::test]
    async fn test_handle_generate_rejects_out_of_range() {
        let store = DatasetStore::new(generate_dataset(1000));

        for raw in ["0", "50001", "abc"] {
            let err = handle_generate(
                Ok(Query(GenerateParams {
                    size: Some(raw.to_string()),
                })),
                Extension(store.clone()),
            )
            .await
            .unwrap_err();

            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }

        // Nothing was published
        assert_eq!(store.len(), 1000);
        assert_eq!(store.version(), 0);
    }

    #[tokio::test]
    async fn test_handle_generate_missing_size() {
        let store = DatasetStore::new(generate_dataset(10));

        let err = handle_generate(Ok(Query(GenerateParams::default())), Extension(store))
            .await
            .unwrap_err();

        let payload = serde_json::to_value(err.payload()).unwrap();
        assert_eq!(payload["error"], "Parameter 'size' diperlukan");
        assert!(payload.get("waktu_microdetik").is_none());
    }

    #[tokio::test]
    async fn test_handle_generate_repeated_size_is_json_bad_request() {
        let store = DatasetStore::new(generate_dataset(10));
        let uri: Uri = "/api/generate?size=5&size=6".parse().unwrap();

        let err = handle_generate(Query::try_from_uri(&uri), Extension(store.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSize(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_generate_response_serialization() {
        let response = GenerateResponse {
            success: true,
            size: 5,
            generate_time_microdetik: 12,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "size": 5, "generate_time_microdetik": 12})
        );
    }
}
