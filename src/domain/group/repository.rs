//! Group repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Group;
use crate::domain::DomainError;

/// Source of group snapshots
#[async_trait]
pub trait GroupRepository: Send + Sync + Debug {
    /// Read every group, in source order. Each call produces a fresh snapshot.
    async fn list(&self) -> Result<Vec<Group>, DomainError>;
}
