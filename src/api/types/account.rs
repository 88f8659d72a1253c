//! Wire representations of users and groups

use serde::{Deserialize, Serialize};

use crate::domain::{Group, User};

/// User as rendered to clients. The password field is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub name: String,
    pub uid: i32,
    pub gid: i32,
    pub comment: String,
    pub home: String,
    pub shell: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            uid: user.uid(),
            gid: user.gid(),
            comment: user.comment().to_string(),
            home: user.home().to_string(),
            shell: user.shell().to_string(),
        }
    }
}

/// Group as rendered to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResponse {
    pub name: String,
    pub gid: i32,
    pub members: Vec<String>,
}

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name().to_string(),
            gid: group.gid(),
            members: group.members().to_vec(),
        }
    }
}
