// src/infrastructure/repositories/postgres_tag.rs
use std::collections::HashMap;

use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::tag::{Tag, TagId, TagName, TagReconciliation};
use sqlx::{FromRow, PgConnection, postgres::PgExecutor};

#[derive(Debug, FromRow)]
struct ArticleTagRow {
    article_id: i64,
    tag_id: i64,
    name: String,
}

/// Tags for each of `article_ids`, ordered by name.
pub(super) async fn fetch_tags<'e, E>(
    executor: E,
    article_ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<Tag>>>
where
    E: PgExecutor<'e>,
{
    let mut by_article: HashMap<i64, Vec<Tag>> = HashMap::new();
    if article_ids.is_empty() {
        return Ok(by_article);
    }

    let rows = sqlx::query_as::<_, ArticleTagRow>(
        "SELECT at.article_id, t.id AS tag_id, t.name
         FROM article_tags at
         JOIN tags t ON t.id = at.tag_id
         WHERE at.article_id = ANY($1)
         ORDER BY lower(t.name)",
    )
    .bind(article_ids.to_vec())
    .fetch_all(executor)
    .await
    .map_err(map_sqlx)?;

    for row in rows {
        let tag = Tag {
            id: TagId::new(row.tag_id)?,
            name: TagName::new(row.name)?,
        };
        by_article.entry(row.article_id).or_default().push(tag);
    }
    Ok(by_article)
}

/// Apply `plan` on the caller's transaction. The article row must already
/// be locked so a replace sees every association committed before it.
pub(super) async fn apply_reconciliation(
    conn: &mut PgConnection,
    article_id: i64,
    plan: &TagReconciliation,
) -> DomainResult<()> {
    if plan.replaces_existing() {
        sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }

    for name in plan.names() {
        let tag_id = get_or_create(&mut *conn, name).await?;
        sqlx::query(
            "INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(article_id)
        .bind(tag_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    }

    Ok(())
}

async fn get_or_create(conn: &mut PgConnection, name: &TagName) -> DomainResult<i64> {
    sqlx::query("INSERT INTO tags (name) VALUES ($1) ON CONFLICT ((lower(name))) DO NOTHING")
        .bind(name.as_str())
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    sqlx::query_scalar::<_, i64>("SELECT id FROM tags WHERE lower(name) = lower($1)")
        .bind(name.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(map_sqlx)
}
