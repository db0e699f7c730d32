// Sqlite implementation of the MemberStore port.
//
// Responsibilities
// - Let the database assign ids via the autoincrement rowid.
// - Map rows to `Member` through `sqlx::FromRow`.
//
// Transactional behavior is the database's own; this adapter adds none.

use crate::modules::members::core::member::{Member, NewMember};
use crate::modules::members::store::{MemberStore, StoreError};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub struct SqliteMemberStore {
    pool: SqlitePool,
}

impl SqliteMemberStore {
    /// Connects to the given sqlite url and ensures the member table exists.
    ///
    /// For `sqlite::memory:` the pool is pinned to a single connection so the
    /// database outlives individual checkouts.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(url)
            .await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS member (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl MemberStore for SqliteMemberStore {
    async fn save(&self, new: NewMember) -> Result<Member, StoreError> {
        let member = sqlx::query_as::<_, Member>(
            "INSERT INTO member (name) VALUES (?1) RETURNING id, name",
        )
        .bind(new.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(member)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, StoreError> {
        let member = sqlx::query_as::<_, Member>("SELECT id, name FROM member WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(member)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Member>, StoreError> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, name FROM member WHERE name = ?1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(member)
    }

    async fn find_all(&self) -> Result<Vec<Member>, StoreError> {
        let members = sqlx::query_as::<_, Member>("SELECT id, name FROM member ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(members)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM member").execute(&self.pool).await?;
        Ok(())
    }
}
