//! User service: lookups, queries and group membership over a fresh user snapshot

use std::sync::Arc;

use tracing::debug;

use crate::domain::group::{Group, GroupRepository};
use crate::domain::user::{User, UserQuery, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::group::GroupService;

/// User service answering lookups against the user source.
///
/// Group membership is resolved through the group service, by user name.
#[derive(Debug)]
pub struct UserService<R: UserRepository, G: GroupRepository> {
    repository: Arc<R>,
    groups: Arc<GroupService<G>>,
}

impl<R: UserRepository, G: GroupRepository> UserService<R, G> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, groups: Arc<GroupService<G>>) -> Self {
        Self { repository, groups }
    }

    /// Every user, in file order
    pub async fn all_users(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// First user in file order with the given uid
    pub async fn user_by_id(&self, uid: i32) -> Result<User, DomainError> {
        self.repository
            .list()
            .await?
            .into_iter()
            .find(|user| user.uid() == uid)
            .ok_or_else(|| DomainError::not_found(format!("Could not find user with uid {}", uid)))
    }

    /// Users matching every criterion set in `query`
    pub async fn query_users(&self, query: &UserQuery) -> Result<Vec<User>, DomainError> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().filter(|user| query.matches(user)).collect())
    }

    /// Groups listing the user with `uid` as a member.
    ///
    /// Fails with `NotFound` before the group source is read when no user
    /// has that uid. The two files are read independently.
    pub async fn groups_of_user(&self, uid: i32) -> Result<Vec<Group>, DomainError> {
        let user = self.user_by_id(uid).await?;
        debug!(uid = uid, user = %user.name(), "Matched user to uid");

        self.groups.groups_of_user(user.name()).await
    }
}
