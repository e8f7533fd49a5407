use crate::models::{Comment, Post, PostFields};
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a store implementation. Carries the
/// human-readable message and the driver's debug representation so
/// error responses can attach both.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
    detail: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError {
            message: err.to_string(),
            detail: format!("{:?}", err),
        }
    }
}

/// What an insert reported back. Stores differ: some return the new
/// id, some the full row, some a partial row that carries the id.
/// `resolve` collapses all three into the id-or-record distinction
/// the create handler needs.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// Only the new id
    Id(i64),
    /// The full persisted record
    Record(Post),
    /// A partial record; only the id is trusted
    Partial { id: i64 },
}

impl InsertOutcome {
    /// The full record if the store returned one, otherwise the id
    /// to look it up with.
    pub fn resolve(self) -> std::result::Result<Post, i64> {
        match self {
            InsertOutcome::Record(post) => Ok(post),
            InsertOutcome::Id(id) | InsertOutcome::Partial { id } => Err(id),
        }
    }
}

/// The persistence contract for posts and their comments.
///
/// All six operations are async and independent; the handlers chain
/// them sequentially within a request. Consistency between a lookup
/// and a later mutation is the implementation's concern, the handlers
/// only react to what each call reports.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, order unspecified.
    async fn find_all(&self) -> Result<Vec<Post>, StoreError>;

    /// A single post, or `None` if no such id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError>;

    /// Insert a new post. See [`InsertOutcome`] for the return shape.
    async fn insert(&self, fields: &PostFields) -> Result<InsertOutcome, StoreError>;

    /// Replace title and contents of an existing post. Returns the
    /// number of rows affected; `0` means the id matched nothing.
    async fn update(&self, id: i64, fields: &PostFields) -> Result<u64, StoreError>;

    /// Delete a post. The return carries no payload.
    async fn remove(&self, id: i64) -> Result<(), StoreError>;

    /// All comments attached to a post, possibly empty.
    async fn find_comments_by_post_id(&self, id: i64) -> Result<Vec<Comment>, StoreError>;
}
