use crate::modules::members::core::member::{Member, NewMember};
use crate::modules::members::store::{MemberStore, StoreError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JoinError {
    #[error("member with name {0:?} already exists")]
    DuplicateName(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Stateless orchestration over the member store. The one business rule lives
/// here: a name can only be registered once.
pub struct MemberService {
    store: Arc<dyn MemberStore>,
}

impl MemberService {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    /// Registers a member and returns the assigned id.
    pub async fn join(&self, new: NewMember) -> Result<i64, JoinError> {
        if self.store.find_by_name(&new.name).await?.is_some() {
            return Err(JoinError::DuplicateName(new.name));
        }
        let member = self.store.save(new).await?;
        tracing::info!(member_id = member.id, "member joined");
        Ok(member.id)
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<Member>, StoreError> {
        self.store.find_by_id(id).await
    }

    pub async fn find_members(&self) -> Result<Vec<Member>, StoreError> {
        self.store.find_all().await
    }
}

#[cfg(test)]
mod member_service_tests {
    use super::*;
    use crate::modules::members::store::in_memory::InMemoryMemberStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (Arc<InMemoryMemberStore>, MemberService) {
        let store = Arc::new(InMemoryMemberStore::new());
        let service = MemberService::new(store.clone());
        (store, service)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_join_a_member_and_return_its_id(
        before_each: (Arc<InMemoryMemberStore>, MemberService),
    ) {
        let (store, service) = before_each;
        let id = service
            .join(NewMember::new("spring"))
            .await
            .expect("join failed");
        let stored = store.find_by_id(id).await.unwrap();
        assert_eq!(stored.map(|m| m.name), Some("spring".to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_join_with_a_duplicate_name(
        before_each: (Arc<InMemoryMemberStore>, MemberService),
    ) {
        let (store, service) = before_each;
        service
            .join(NewMember::new("spring"))
            .await
            .expect("first join failed");
        let result = service.join(NewMember::new("spring")).await;
        assert!(matches!(result, Err(JoinError::DuplicateName(ref name)) if name == "spring"));

        // The store holds exactly one record with that name.
        let all = store.find_all().await.unwrap();
        assert_eq!(all.iter().filter(|m| m.name == "spring").count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delegate_lookups_to_the_store(
        before_each: (Arc<InMemoryMemberStore>, MemberService),
    ) {
        let (_store, service) = before_each;
        let id1 = service.join(NewMember::new("spring1")).await.unwrap();
        let id2 = service.join(NewMember::new("spring2")).await.unwrap();

        let members = service.find_members().await.unwrap();
        assert_eq!(members.len(), 2);

        let one = service.find_one(id1).await.unwrap().unwrap();
        assert_eq!(one.name, "spring1");
        let two = service.find_one(id2).await.unwrap().unwrap();
        assert_eq!(two.name, "spring2");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_for_an_unknown_id(
        before_each: (Arc<InMemoryMemberStore>, MemberService),
    ) {
        let (_store, service) = before_each;
        assert!(service.find_one(42).await.unwrap().is_none());
    }
}
