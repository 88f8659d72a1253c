//! File-backed group repository

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::group::{Group, GroupRepository};
use crate::domain::DomainError;
use crate::infrastructure::source::load_snapshot;

/// Reads groups from a group-formatted file on every call
#[derive(Debug, Clone)]
pub struct FileGroupRepository {
    path: PathBuf,
}

impl FileGroupRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GroupRepository for FileGroupRepository {
    async fn list(&self) -> Result<Vec<Group>, DomainError> {
        load_snapshot(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_rereads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("group");
        std::fs::write(&path, "root:x:0:\n").unwrap();

        let repo = FileGroupRepository::new(&path);
        let first = repo.list().await.unwrap();
        assert_eq!(first, vec![Group::new("root", 0)]);

        std::fs::write(&path, "root:x:0:\nsys:x:3:sys\n").unwrap();
        let second = repo.list().await.unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(first.len(), 1);
    }

    #[tokio::test]
    async fn test_list_after_removal_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("group");
        std::fs::write(&path, "root:x:0:\n").unwrap();

        let repo = FileGroupRepository::new(&path);
        let before = repo.list().await.unwrap();

        std::fs::remove_file(&path).unwrap();
        let result = repo.list().await;

        assert!(matches!(result, Err(DomainError::SourceUnavailable { .. })));
        assert_eq!(before, vec![Group::new("root", 0)]);
    }
}
