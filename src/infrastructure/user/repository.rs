//! File-backed user repository

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::source::load_snapshot;

/// Reads users from a passwd-formatted file on every call
#[derive(Debug, Clone)]
pub struct FileUserRepository {
    path: PathBuf,
}

impl FileUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserRepository for FileUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        load_snapshot(&self.path).await
    }
}
