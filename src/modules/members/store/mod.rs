// Persistence port for members.
//
// Responsibilities
// - Assign ids on save (counter for the in-memory variant, autoincrement for sqlite).
// - Answer lookups by id, by name, and for the full collection.
//
// "Not found" is a normal `Ok(None)` result, never an error.

pub mod in_memory;
pub mod sqlite;

use crate::modules::members::core::member::{Member, NewMember};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("store backend: {0}")]
    Backend(String),
}

#[async_trait::async_trait]
pub trait MemberStore: Send + Sync {
    /// Persists the record, assigning its id, and returns the stored member.
    async fn save(&self, new: NewMember) -> Result<Member, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, StoreError>;

    /// First record whose name matches exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<Member>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Member>, StoreError>;

    /// Removes all records. Test teardown utility, not routed over HTTP.
    async fn clear(&self) -> Result<(), StoreError>;
}
