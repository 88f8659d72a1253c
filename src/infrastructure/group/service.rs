//! Group service: lookups and queries over a fresh group snapshot

use std::sync::Arc;

use tracing::debug;

use crate::domain::group::{Group, GroupQuery, GroupRepository};
use crate::domain::DomainError;

/// Group service answering lookups against the group source
#[derive(Debug)]
pub struct GroupService<R: GroupRepository> {
    repository: Arc<R>,
}

impl<R: GroupRepository> GroupService<R> {
    /// Create a new group service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Every group, in file order
    pub async fn all_groups(&self) -> Result<Vec<Group>, DomainError> {
        self.repository.list().await
    }

    /// Groups listing `name` as a member. Empty when there are none.
    pub async fn groups_of_user(&self, name: &str) -> Result<Vec<Group>, DomainError> {
        let groups: Vec<Group> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|group| group.has_member(name))
            .collect();

        debug!(user = %name, count = groups.len(), "Resolved group membership");
        Ok(groups)
    }

    /// First group in file order with the given gid
    pub async fn group_by_id(&self, gid: i32) -> Result<Group, DomainError> {
        self.repository
            .list()
            .await?
            .into_iter()
            .find(|group| group.gid() == gid)
            .ok_or_else(|| DomainError::not_found(format!("Could not find group with gid {}", gid)))
    }

    /// Groups matching every criterion set in `query`
    pub async fn query_groups(&self, query: &GroupQuery) -> Result<Vec<Group>, DomainError> {
        let groups = self.repository.list().await?;
        Ok(groups.into_iter().filter(|group| query.matches(group)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::group::MockGroupRepository;

    fn query_groups_fixture() -> Vec<Group> {
        vec![
            Group::new("root", 0),
            Group::new("sys", 1000).with_members(["sys"]),
            Group::new("lpadmin", 118).with_members(["sys"]),
            Group::new("multigroup", 1001).with_members(["adonofero", "tester"]),
            Group::new("othermulti", 1002).with_members(["tester"]),
            Group::new("adonofero", 1003).with_members(["adonofero"]),
        ]
    }

    fn create_service(groups: Vec<Group>) -> GroupService<MockGroupRepository> {
        GroupService::new(Arc::new(MockGroupRepository::with_groups(groups)))
    }

    #[tokio::test]
    async fn test_all_groups_in_order() {
        let service = create_service(query_groups_fixture());

        let groups = service.all_groups().await.unwrap();
        assert_eq!(groups, query_groups_fixture());
    }

    #[tokio::test]
    async fn test_all_groups_empty_source() {
        let service = create_service(Vec::new());
        assert!(service.all_groups().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_groups_of_user() {
        let service = create_service(query_groups_fixture());

        let groups = service.groups_of_user("sys").await.unwrap();
        let names: Vec<&str> = groups.iter().map(Group::name).collect();
        assert_eq!(names, vec!["sys", "lpadmin"]);
    }

    #[tokio::test]
    async fn test_groups_of_user_none_match() {
        let service = create_service(query_groups_fixture());

        assert!(service.groups_of_user("nobody").await.unwrap().is_empty());
        assert!(service.groups_of_user("Sys").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_group_by_id() {
        let service = create_service(query_groups_fixture());

        let group = service.group_by_id(118).await.unwrap();
        assert_eq!(group, Group::new("lpadmin", 118).with_members(["sys"]));
    }

    #[tokio::test]
    async fn test_group_by_id_first_match_wins() {
        let service = create_service(vec![
            Group::new("first", 50),
            Group::new("second", 50).with_members(["x"]),
        ]);

        let group = service.group_by_id(50).await.unwrap();
        assert_eq!(group.name(), "first");
    }

    #[tokio::test]
    async fn test_group_by_id_not_found() {
        let service = create_service(query_groups_fixture());

        let result = service.group_by_id(9999).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_query_groups_members_superset() {
        let service = create_service(query_groups_fixture());

        let query = GroupQuery::new().with_members(["tester", "adonofero"]);
        let groups = service.query_groups(&query).await.unwrap();

        assert_eq!(
            groups,
            vec![Group::new("multigroup", 1001).with_members(["adonofero", "tester"])]
        );
    }

    #[tokio::test]
    async fn test_query_groups_single_member() {
        let service = create_service(query_groups_fixture());

        let query = GroupQuery::new().with_members(["adonofero"]);
        let names: Vec<String> = service
            .query_groups(&query)
            .await
            .unwrap()
            .iter()
            .map(|g| g.name().to_string())
            .collect();

        assert_eq!(names, vec!["multigroup", "adonofero"]);
    }

    #[tokio::test]
    async fn test_query_groups_intersection() {
        let service = create_service(query_groups_fixture());

        let query = GroupQuery::new().with_name("adonofero").with_members(["adonofero"]);
        let groups = service.query_groups(&query).await.unwrap();
        assert_eq!(groups, vec![Group::new("adonofero", 1003).with_members(["adonofero"])]);

        let query = GroupQuery::new().with_name("adonofero").with_gid(1001);
        assert!(service.query_groups(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_groups_without_criteria_returns_all() {
        let service = create_service(query_groups_fixture());

        let groups = service.query_groups(&GroupQuery::new()).await.unwrap();
        assert_eq!(groups.len(), 6);
    }

    #[tokio::test]
    async fn test_source_failure_propagates() {
        let repo = Arc::new(MockGroupRepository::new());
        repo.set_should_fail(true).await;
        let service = GroupService::new(repo);

        assert!(matches!(
            service.all_groups().await,
            Err(DomainError::SourceUnavailable { .. })
        ));
        assert!(matches!(
            service.group_by_id(0).await,
            Err(DomainError::SourceUnavailable { .. })
        ));
    }
}
