// src/infrastructure/repositories/postgres_comment.rs
use super::{map_sqlx, to_bigint};
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentAuthor, CommentId, CommentRepository, CommentText, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageWindow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author: CommentAuthor::new(row.author)?,
            text: CommentText::new(row.text)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            author,
            text,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, author, text, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, article_id, author, text, created_at",
        )
        .bind(i64::from(article_id))
        .bind(author.into_inner())
        .bind(text.into_inner())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE article_id = $1")
                .bind(i64::from(article_id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        window: PageWindow,
    ) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, author, text, created_at
             FROM comments
             WHERE article_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(i64::from(article_id))
        .bind(to_bigint(window.limit))
        .bind(to_bigint(window.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
