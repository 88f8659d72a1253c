//! Infrastructure layer - File-backed repositories, services and logging

pub mod group;
pub mod logging;
pub mod source;
pub mod user;

pub use group::{FileGroupRepository, GroupService};
pub use user::{FileUserRepository, UserService};
