//! Domain layer - Account records, queries and repository contracts

pub mod error;
pub mod group;
pub mod record;
pub mod user;

pub use error::DomainError;
pub use group::{Group, GroupQuery, GroupRepository};
pub use record::{parse_records, FieldError, ParseError, Record};
pub use user::{User, UserQuery, UserRepository};
