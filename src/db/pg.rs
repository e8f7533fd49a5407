use crate::db::store::{InsertOutcome, PostStore, StoreError};
use crate::models::{Comment, Post, PostFields};
use async_trait::async_trait;
use sqlx::PgPool;

/// Postgres-backed [`PostStore`].
///
/// Expects a `posts(id BIGSERIAL, title, contents, created_at,
/// updated_at)` table and a `comments(id BIGSERIAL, post_id, text,
/// created_at)` table. Whether deleting a post cascades to its
/// comments is decided by the schema's foreign key, not here.
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn find_all(&self) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, contents, created_at, updated_at
            FROM posts
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, contents, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn insert(&self, fields: &PostFields) -> Result<InsertOutcome, StoreError> {
        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO posts (title, contents)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.contents)
        .fetch_one(&self.pool)
        .await?;

        Ok(InsertOutcome::Id(row.0))
    }

    async fn update(&self, id: i64, fields: &PostFields) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $1, contents = $2, updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.contents)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn remove(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_comments_by_post_id(&self, id: i64) -> Result<Vec<Comment>, StoreError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, text, created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}
