/// Data models for post-service
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted post. `id` is assigned by the store on insert;
/// `title` and `contents` are always non-empty once persisted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment attached to a post. Handlers treat this as an opaque
/// record; only the store reads or writes its fields.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Write payload for insert/update. Built only from validated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub contents: String,
}
