use serde::{Deserialize, Serialize};

/// A registered member. The id is assigned by the store on save and never
/// reused within a process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
}

/// Registration input; the store turns this into a `Member` by assigning an id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewMember {
    pub name: String,
}

impl NewMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
