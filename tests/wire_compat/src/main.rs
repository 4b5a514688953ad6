fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use chirp_protocol::{
        EventKind, Notification, TaskProgress, TranslationRequest, TranslationResponse,
    };

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    ///
    /// Fixtures are verbatim captures from a live chirp service.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Normalizes JSON values so that integer-valued floats compare equal.
    ///
    /// The service serializes whole-number progress and timestamps as JSON
    /// integers (`100`), Rust serializes `f64` as `100.0`. Both are
    /// semantically identical; this normalizes numbers so they compare as
    /// equal.
    fn normalize_value(v: &serde_json::Value) -> serde_json::Value {
        match v {
            serde_json::Value::Number(n) => {
                if let Some(f) = n.as_f64() {
                    serde_json::json!(f)
                } else {
                    v.clone()
                }
            }
            serde_json::Value::Object(map) => {
                let normalized: serde_json::Map<String, serde_json::Value> = map
                    .iter()
                    .map(|(k, v)| (k.clone(), normalize_value(v)))
                    .collect();
                serde_json::Value::Object(normalized)
            }
            serde_json::Value::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(normalize_value).collect())
            }
            _ => v.clone(),
        }
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and
    /// compares the JSON values (order-independent, float-normalized).
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        let norm_fixture = normalize_value(&fixture);
        let norm_reserialized = normalize_value(&reserialized);
        assert_eq!(
            norm_fixture, norm_reserialized,
            "roundtrip mismatch for {name}:\n  service: {fixture}\n  rust:    {reserialized}"
        );
    }

    // --- Notification feed ---

    #[test]
    fn fixture_notification_unread() {
        roundtrip_test::<Notification>("notification_unread.json");
    }

    #[test]
    fn fixture_notification_task_progress() {
        roundtrip_test::<Notification>("notification_task_progress.json");
    }

    #[test]
    fn fixture_notification_batch() {
        roundtrip_test::<Vec<Notification>>("notification_batch.json");
    }

    #[test]
    fn fixture_task_progress_payload() {
        roundtrip_test::<TaskProgress>("task_progress.json");
    }

    #[test]
    fn batch_kinds_and_order() {
        let batch: Vec<Notification> =
            serde_json::from_value(load_fixture("notification_batch.json")).unwrap();

        assert_eq!(batch.len(), 4);
        assert_eq!(batch[0].kind(), EventKind::UnreadMessageCount);
        assert_eq!(batch[1].kind(), EventKind::TaskProgress);
        assert_eq!(batch[2].kind(), EventKind::Unknown);
        assert_eq!(batch[2].name, "export_ready");
        assert_eq!(batch[3].kind(), EventKind::UnreadMessageCount);

        assert!(
            batch.windows(2).all(|w| w[0].timestamp < w[1].timestamp),
            "feed is ascending by timestamp"
        );
    }

    #[test]
    fn unread_data_reads_as_count() {
        let n: Notification =
            serde_json::from_value(load_fixture("notification_unread.json")).unwrap();
        assert_eq!(n.unread_count(), 3);
    }

    #[test]
    fn task_progress_payload_parses_from_feed_entry() {
        let n: Notification =
            serde_json::from_value(load_fixture("notification_task_progress.json")).unwrap();
        let progress = n.task_progress().unwrap();
        assert_eq!(progress.task_id, "8f0998af-6606-4f76-9171-1e1042bd4438");
        assert_eq!(progress.percent(), 38);
    }

    #[test]
    fn whole_percent_progress_is_a_json_integer() {
        // Completed tasks report `progress: 100` as an integer.
        let progress: TaskProgress =
            serde_json::from_value(load_fixture("task_progress.json")).unwrap();
        assert_eq!(progress.percent(), 100);
    }

    // --- Legacy tolerance: entries without a data field ---

    #[test]
    fn notification_without_data_tolerated() {
        let json = r#"{
            "name": "unread_message_count",
            "timestamp": 1756200000
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert!(n.data.is_null(), "missing data should default to null");
        assert_eq!(n.unread_count(), 0);
    }

    // --- Translation endpoint ---

    #[test]
    fn fixture_translation_request() {
        roundtrip_test::<TranslationRequest>("translation_request.json");
    }

    #[test]
    fn fixture_translation_response() {
        roundtrip_test::<TranslationResponse>("translation_response.json");
    }
}
