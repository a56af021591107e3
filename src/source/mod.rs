//! State snapshot input.
//!
//! The snapshot is read once at startup; the catalog is built from it and
//! never refreshed during a session.

use crate::model::{SnapshotError, StateSnapshot};
use std::path::Path;
use tracing::info;

/// Read and parse a state snapshot document from disk.
///
/// # Errors
///
/// Returns `SnapshotError::FileNotFound` if the path does not exist,
/// `SnapshotError::Read` for other I/O failures and `SnapshotError::Json`
/// when the content is not a snapshot document.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<StateSnapshot, SnapshotError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SnapshotError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot = parse_snapshot(&contents, path)?;
    info!(
        path = %path.display(),
        users = snapshot.user_count(),
        channels = snapshot.channels().len(),
        dms = snapshot.dms().len(),
        groups = snapshot.groups().len(),
        "Loaded state snapshot"
    );
    Ok(snapshot)
}

/// Parse snapshot JSON. `origin` is only used for error reporting.
pub fn parse_snapshot(contents: &str, origin: &Path) -> Result<StateSnapshot, SnapshotError> {
    serde_json::from_str(contents).map_err(|source| SnapshotError::Json {
        path: origin.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserResolver;
    use std::env;
    use std::fs;

    const DOCUMENT: &str = r#"{
        "self_id": "U000",
        "users": [
            {"id": "U000", "name": "me"},
            {"id": "U1", "name": "alice", "real_name": "Alice A.", "display_name": ""},
            {"id": "B1", "name": "deploy", "is_bot": true}
        ],
        "online_users": ["U1"],
        "channels": [{"id": "C1", "name": "general", "is_channel": true}],
        "dms": [{"id": "D1", "user": "U1"}],
        "groups": [{"id": "G1", "members": ["U000", "U1"]}]
    }"#;

    #[test]
    fn load_snapshot_reads_document() {
        let path = env::temp_dir().join("quickswitch_test_snapshot.json");
        fs::write(&path, DOCUMENT).expect("write snapshot");

        let snapshot = load_snapshot(&path).expect("valid snapshot");
        assert_eq!(snapshot.self_id(), Some("U000"));
        assert_eq!(snapshot.display_name("U1"), Some("Alice A."));
        assert!(snapshot.is_online("U1"));
        assert_eq!(snapshot.channels().len(), 1);
        assert_eq!(snapshot.dms().len(), 1);
        assert_eq!(snapshot.groups().len(), 1);

        fs::remove_file(path).ok();
    }

    #[test]
    fn load_snapshot_missing_file_is_file_not_found() {
        let result = load_snapshot("/nonexistent/quickswitch/snapshot.json");
        assert!(matches!(result, Err(SnapshotError::FileNotFound { .. })));
    }

    #[test]
    fn load_snapshot_directory_is_read_error() {
        let result = load_snapshot(env::temp_dir());
        assert!(
            matches!(result, Err(SnapshotError::Read { .. })),
            "Reading a directory should surface the I/O error, got: {:?}",
            result
        );
    }

    #[test]
    fn parse_snapshot_rejects_malformed_json() {
        let result = parse_snapshot("{\"users\": [", Path::new("inline.json"));
        match result {
            Err(SnapshotError::Json { path, .. }) => assert_eq!(path, Path::new("inline.json")),
            other => panic!("expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn parse_snapshot_accepts_empty_object() {
        let snapshot = parse_snapshot("{}", Path::new("empty.json")).expect("defaults apply");
        assert!(snapshot.channels().is_empty());
        assert!(snapshot.dms().is_empty());
    }
}
