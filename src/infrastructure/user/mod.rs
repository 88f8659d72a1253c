//! User infrastructure module
//!
//! File-backed user repository and the user service, which also resolves a
//! user's group memberships through the group service.

mod repository;
mod service;

pub use repository::FileUserRepository;
pub use service::UserService;
