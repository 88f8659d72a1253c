//! Group entity parsed from a group-formatted file

use crate::domain::record::{parse_id, FieldError, Record};

/// Separator of user names inside the member-list field
pub const MEMBER_DELIMITER: char = ',';

/// A group from the groups file. Members are user names, kept in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    gid: i32,
    members: Vec<String>,
}

impl Group {
    /// Create a group without members
    pub fn new(name: impl Into<String>, gid: i32) -> Self {
        Self {
            name: name.into(),
            gid,
            members: Vec::new(),
        }
    }

    /// Set the member list (builder pattern)
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gid(&self) -> i32 {
        self.gid
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Exact, case-sensitive membership check
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }
}

/// Split the member-list field. An empty field means no members; otherwise
/// entries are taken verbatim, including empty ones.
pub fn parse_members(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }

    field.split(MEMBER_DELIMITER).map(String::from).collect()
}

/// Fields: name, password, gid, member list.
impl Record for Group {
    const KIND: &'static str = "group";
    const FIELD_COUNT: usize = 4;

    fn from_fields(fields: &[&str]) -> Result<Self, FieldError> {
        let gid = parse_id("gid", fields[2])?;

        Ok(Self::new(fields[0], gid).with_members(parse_members(fields[3])))
    }
}
