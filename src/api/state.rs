//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, Group, GroupQuery, GroupRepository, User, UserQuery, UserRepository};
use crate::infrastructure::{GroupService, UserService};

/// Application state containing shared services using dynamic dispatch.
///
/// The services hold no snapshot of their own; cloning the state is cheap and
/// every handler reads the sources again.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub group_service: Arc<dyn GroupServiceTrait>,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        group_service: Arc<dyn GroupServiceTrait>,
    ) -> Self {
        Self {
            user_service,
            group_service,
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn all_users(&self) -> Result<Vec<User>, DomainError>;
    async fn user_by_id(&self, uid: i32) -> Result<User, DomainError>;
    async fn query_users(&self, query: &UserQuery) -> Result<Vec<User>, DomainError>;
    async fn groups_of_user(&self, uid: i32) -> Result<Vec<Group>, DomainError>;
}

/// Trait for group service operations
#[async_trait::async_trait]
pub trait GroupServiceTrait: Send + Sync {
    async fn all_groups(&self) -> Result<Vec<Group>, DomainError>;
    async fn group_by_id(&self, gid: i32) -> Result<Group, DomainError>;
    async fn query_groups(&self, query: &GroupQuery) -> Result<Vec<Group>, DomainError>;
    async fn groups_of_user(&self, name: &str) -> Result<Vec<Group>, DomainError>;
}

#[async_trait::async_trait]
impl<R, G> UserServiceTrait for UserService<R, G>
where
    R: UserRepository + 'static,
    G: GroupRepository + 'static,
{
    async fn all_users(&self) -> Result<Vec<User>, DomainError> {
        UserService::all_users(self).await
    }

    async fn user_by_id(&self, uid: i32) -> Result<User, DomainError> {
        UserService::user_by_id(self, uid).await
    }

    async fn query_users(&self, query: &UserQuery) -> Result<Vec<User>, DomainError> {
        UserService::query_users(self, query).await
    }

    async fn groups_of_user(&self, uid: i32) -> Result<Vec<Group>, DomainError> {
        UserService::groups_of_user(self, uid).await
    }
}

#[async_trait::async_trait]
impl<R: GroupRepository + 'static> GroupServiceTrait for GroupService<R> {
    async fn all_groups(&self) -> Result<Vec<Group>, DomainError> {
        GroupService::all_groups(self).await
    }

    async fn group_by_id(&self, gid: i32) -> Result<Group, DomainError> {
        GroupService::group_by_id(self, gid).await
    }

    async fn query_groups(&self, query: &GroupQuery) -> Result<Vec<Group>, DomainError> {
        GroupService::query_groups(self, query).await
    }

    async fn groups_of_user(&self, name: &str) -> Result<Vec<Group>, DomainError> {
        GroupService::groups_of_user(self, name).await
    }
}
