//! Conjunctive group query

use super::entity::Group;

/// Criteria for filtering groups. `name` and `gid` match exactly; `members`
/// matches groups whose member list contains every given name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupQuery {
    pub name: Option<String>,
    pub gid: Option<i32>,
    pub members: Option<Vec<String>>,
}

impl GroupQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_gid(mut self, gid: i32) -> Self {
        self.gid = Some(gid);
        self
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = Some(members.into_iter().map(Into::into).collect());
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.gid.is_none() && self.members.is_none()
    }

    /// Check a group against every set criterion
    pub fn matches(&self, group: &Group) -> bool {
        if let Some(ref name) = self.name {
            if group.name() != name {
                return false;
            }
        }

        if let Some(gid) = self.gid {
            if group.gid() != gid {
                return false;
            }
        }

        if let Some(ref members) = self.members {
            if !members.iter().all(|member| group.has_member(member)) {
                return false;
            }
        }

        true
    }
}
