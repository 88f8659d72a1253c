//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Source of user snapshots
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Read every user, in source order. Each call produces a fresh snapshot.
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}


#[cfg(test)]
mod tests {
    use super::mock::MockUserRepository;
    use super::*;

    #[tokio::test]
    async fn test_mock_list_returns_snapshot() {
        let repo = MockUserRepository::with_users(vec![User::new("root", 0, 0)]);

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(repo.reads(), 1);
    }

    #[tokio::test]
    async fn test_mock_should_fail() {
        let repo = MockUserRepository::new();
        repo.set_should_fail(true).await;

        let result = repo.list().await;
        assert!(matches!(result, Err(DomainError::SourceUnavailable { .. })));
    }
}
