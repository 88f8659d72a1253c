//! User entity parsed from a passwd-formatted file

use crate::domain::record::{parse_id, FieldError, Record};

/// An account from the users file.
///
/// Values are immutable once built; equality compares every field, so two
/// accounts sharing a uid are still distinct users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    uid: i32,
    gid: i32,
    comment: String,
    home: String,
    shell: String,
}

impl User {
    /// Create a user with empty comment, home and shell
    pub fn new(name: impl Into<String>, uid: i32, gid: i32) -> Self {
        Self {
            name: name.into(),
            uid,
            gid,
            comment: String::new(),
            home: String::new(),
            shell: String::new(),
        }
    }

    /// Set the comment (GECOS) field (builder pattern)
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the home directory (builder pattern)
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    /// Set the login shell (builder pattern)
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    // Getters

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uid(&self) -> i32 {
        self.uid
    }

    pub fn gid(&self) -> i32 {
        self.gid
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }
}

/// Fields: name, password, uid, gid, comment, home, shell.
/// The password field is read past and never kept.
impl Record for User {
    const KIND: &'static str = "user";
    const FIELD_COUNT: usize = 7;

    fn from_fields(fields: &[&str]) -> Result<Self, FieldError> {
        let uid = parse_id("uid", fields[2])?;
        let gid = parse_id("gid", fields[3])?;

        Ok(Self::new(fields[0], uid, gid)
            .with_comment(fields[4])
            .with_home(fields[5])
            .with_shell(fields[6]))
    }
}
