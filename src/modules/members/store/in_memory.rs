// In memory implementation of the MemberStore port.
//
// Purpose
// - Support service and handler tests and local development without a database.
//
// Responsibilities
// - Assign ids from a strictly increasing counter, starting at 1.
// - Keep rows in insertion order so `find_all` reflects save order.
//
// The counter and rows share one lock; axum serves concurrently and the
// original collection had no synchronization at all.

use crate::modules::members::core::member::{Member, NewMember};
use crate::modules::members::store::{MemberStore, StoreError};
use tokio::sync::Mutex;

#[derive(Default)]
struct Inner {
    seq: i64,
    rows: Vec<Member>,
}

#[derive(Default)]
pub struct InMemoryMemberStore {
    inner: Mutex<Inner>,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn save(&self, new: NewMember) -> Result<Member, StoreError> {
        let mut g = self.inner.lock().await;
        g.seq += 1;
        let member = Member {
            id: g.seq,
            name: new.name,
        };
        g.rows.push(member.clone());
        Ok(member)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, StoreError> {
        let g = self.inner.lock().await;
        Ok(g.rows.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Member>, StoreError> {
        let g = self.inner.lock().await;
        Ok(g.rows.iter().find(|m| m.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>, StoreError> {
        let g = self.inner.lock().await;
        Ok(g.rows.clone())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut g = self.inner.lock().await;
        g.rows.clear();
        Ok(())
    }
}
