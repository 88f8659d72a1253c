//! Whole-file loading of account sources
//!
//! Every call reads the file from disk again; nothing is cached between
//! requests, so a changed, removed or unreadable file is observed on the
//! very next read.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, trace};

use crate::domain::record::{parse_records, Record};
use crate::domain::DomainError;

/// Read the file at `path` as text.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub async fn read_source(path: &Path) -> Result<String, DomainError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        let message = match e.kind() {
            ErrorKind::NotFound => "file does not exist".to_string(),
            ErrorKind::PermissionDenied => "cannot read file: permission denied".to_string(),
            _ => format!("cannot read file: {}", e),
        };

        DomainError::source_unavailable(path.display().to_string(), message)
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read and parse the file at `path` into a snapshot of records
pub async fn load_snapshot<R>(path: &Path) -> Result<Vec<R>, DomainError>
where
    R: Record + std::fmt::Debug,
{
    let content = read_source(path).await?;

    let records = parse_records::<R>(&content)
        .map_err(|e| DomainError::malformed_source(path.display().to_string(), e))?;

    for record in &records {
        trace!(kind = R::KIND, ?record, "Parsed record");
    }

    debug!(
        kind = R::KIND,
        path = %path.display(),
        count = records.len(),
        "Loaded snapshot"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Group, User};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_snapshot_reads_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("group");
        std::fs::write(&path, "root:x:0:\nsudo:x:27:adonofero\n").unwrap();

        let groups: Vec<Group> = load_snapshot(&path).await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].members(), ["adonofero"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_source_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("passwd");

        let err = load_snapshot::<User>(&path).await.unwrap_err();
        match err {
            DomainError::SourceUnavailable { path: reported, message } => {
                assert!(reported.ends_with("passwd"));
                assert_eq!(message, "file does not exist");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_directory_is_source_unavailable() {
        let dir = TempDir::new().unwrap();

        let err = load_snapshot::<User>(dir.path()).await.unwrap_err();
        assert!(matches!(err, DomainError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_reports_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("passwd");
        std::fs::write(&path, "root:x:0:0:root:/root:/bin/bash\nbroken:x:1\n").unwrap();

        let err = load_snapshot::<User>(&path).await.unwrap_err();
        match err {
            DomainError::MalformedSource {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "broken:x:1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("passwd");
        std::fs::write(&path, b"j:x:5:5:J\xe9r\xf4me:/home/j:/bin/sh\n").unwrap();

        let users: Vec<User> = load_snapshot(&path).await.unwrap();
        assert_eq!(users[0].uid(), 5);
        assert!(users[0].comment().contains('\u{FFFD}'));
    }
}
