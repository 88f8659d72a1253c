//! User domain
//!
//! Accounts read from a passwd-formatted file, the query type used to filter
//! them, and the repository trait that produces snapshots.

mod entity;
mod query;
mod repository;

pub use entity::User;
pub use query::UserQuery;
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::mock::MockUserRepository;
