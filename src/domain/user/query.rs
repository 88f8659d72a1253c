//! Conjunctive user query

use super::entity::User;

/// Criteria for filtering users. Every criterion that is set must match
/// exactly; unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub name: Option<String>,
    pub uid: Option<i32>,
    pub gid: Option<i32>,
    pub comment: Option<String>,
    pub home: Option<String>,
    pub shell: Option<String>,
}

impl UserQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_uid(mut self, uid: i32) -> Self {
        self.uid = Some(uid);
        self
    }

    pub fn with_gid(mut self, gid: i32) -> Self {
        self.gid = Some(gid);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.uid.is_none()
            && self.gid.is_none()
            && self.comment.is_none()
            && self.home.is_none()
            && self.shell.is_none()
    }

    /// Check a user against every set criterion
    pub fn matches(&self, user: &User) -> bool {
        if let Some(ref name) = self.name {
            if user.name() != name {
                return false;
            }
        }

        if let Some(uid) = self.uid {
            if user.uid() != uid {
                return false;
            }
        }

        if let Some(gid) = self.gid {
            if user.gid() != gid {
                return false;
            }
        }

        if let Some(ref comment) = self.comment {
            if user.comment() != comment {
                return false;
            }
        }

        if let Some(ref home) = self.home {
            if user.home() != home {
                return false;
            }
        }

        if let Some(ref shell) = self.shell {
            if user.shell() != shell {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new("sys", 3, 3)
            .with_comment("sys")
            .with_home("/dev")
            .with_shell("/usr/sbin/nologin")
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = UserQuery::new();
        assert!(query.is_empty());
        assert!(query.matches(&sample()));
    }

    #[test]
    fn test_single_criteria() {
        assert!(UserQuery::new().with_name("sys").matches(&sample()));
        assert!(!UserQuery::new().with_name("Sys").matches(&sample()));
        assert!(UserQuery::new().with_shell("/usr/sbin/nologin").matches(&sample()));
        assert!(!UserQuery::new().with_home("/dev/").matches(&sample()));
    }

    #[test]
    fn test_all_criteria_must_match() {
        let query = UserQuery::new().with_uid(3).with_gid(3).with_comment("sys");
        assert!(!query.is_empty());
        assert!(query.matches(&sample()));

        let query = UserQuery::new().with_uid(3).with_gid(4);
        assert!(!query.matches(&sample()));
    }
}
