//! Group domain
//!
//! Groups read from a group-formatted file. Membership is by user name.

mod entity;
mod query;
mod repository;

pub use entity::{parse_members, Group, MEMBER_DELIMITER};
pub use query::GroupQuery;
pub use repository::GroupRepository;

#[cfg(test)]
pub use repository::mock::MockGroupRepository;
