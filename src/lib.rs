//! Passwd as a Service
//!
//! Read-only HTTP queries over a passwd-formatted user file and a
//! group-formatted group file. Both files are re-read on every request, so
//! answers always reflect their current contents.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::SourcesConfig;
use infrastructure::{FileGroupRepository, FileUserRepository, GroupService, UserService};

/// Wire the file-backed repositories and services into the application state.
///
/// The group service is shared with the user service, which resolves
/// memberships through it.
pub fn create_app_state(sources: &SourcesConfig) -> AppState {
    let group_repository = Arc::new(FileGroupRepository::new(&sources.groups_file));
    let user_repository = Arc::new(FileUserRepository::new(&sources.users_file));

    let group_service = Arc::new(GroupService::new(group_repository));
    let user_service = Arc::new(UserService::new(user_repository, Arc::clone(&group_service)));

    AppState::new(user_service, group_service)
}
