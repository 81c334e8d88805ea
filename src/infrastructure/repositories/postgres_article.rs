// src/infrastructure/repositories/postgres_article.rs
use super::postgres_tag::{apply_reconciliation, fetch_tags};
use super::{map_sqlx, to_bigint};
use crate::domain::article::{
    Article, ArticleAuthor, ArticleFilter, ArticleId, ArticleReadRepository, ArticleStatus,
    ArticleText, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageWindow;
use crate::domain::tag::Tag;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder, postgres::PgExecutor};

const ARTICLE_COLUMNS: &str = "a.id, a.title, a.author, a.text, a.category_id, a.status, a.created_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    author: String,
    text: String,
    category_id: Option<i64>,
    status: String,
    created_at: DateTime<Utc>,
}

impl ArticleRow {
    fn into_article(self, tags: Vec<Tag>) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            author: ArticleAuthor::new(self.author)?,
            text: ArticleText::new(self.text)?,
            category_id: self.category_id.map(CategoryId::new).transpose()?,
            status: self.status.parse::<ArticleStatus>()?,
            tags,
            created_at: self.created_at,
        })
    }
}

/// Pair each row with its tags using one extra query.
async fn hydrate<'e, E>(executor: E, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>>
where
    E: PgExecutor<'e>,
{
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = fetch_tags(executor, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let article_tags = tags.remove(&row.id).unwrap_or_default();
            row.into_article(article_tags)
        })
        .collect()
}

async fn load_with_tags(conn: &mut PgConnection, id: i64) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = $1"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    match row {
        Some(row) => Ok(hydrate(&mut *conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

/// Escape `LIKE` wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            content,
            status,
            tags,
            created_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles (title, author, text, category_id, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(content.title.into_inner())
        .bind(content.author.into_inner())
        .bind(content.text.into_inner())
        .bind(content.category_id.map(i64::from))
        .bind(status.as_str())
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        apply_reconciliation(&mut tx, id, &tags).await?;

        let article = load_with_tags(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article vanished".into()))?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            content,
            status,
            tags,
        } = update;
        let id = i64::from(id);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let found = if content.is_none() && status.is_none() {
            sqlx::query_scalar::<_, i64>("SELECT id FROM articles WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx)?
                .is_some()
        } else {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET ");
            let mut set = builder.separated(", ");
            if let Some(content) = content {
                set.push("title = ");
                set.push_bind_unseparated(content.title.into_inner());
                set.push("author = ");
                set.push_bind_unseparated(content.author.into_inner());
                set.push("text = ");
                set.push_bind_unseparated(content.text.into_inner());
                set.push("category_id = ");
                set.push_bind_unseparated(content.category_id.map(i64::from));
            }
            if let Some(status) = status {
                set.push("status = ");
                set.push_bind_unseparated(status.as_str());
            }
            builder.push(" WHERE id = ");
            builder.push_bind(id);

            let result = builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            result.rows_affected() > 0
        };

        if !found {
            return Err(DomainError::not_found("article not found"));
        }

        if let Some(plan) = tags.filter(|plan| !plan.is_noop()) {
            apply_reconciliation(&mut tx, id, &plan).await?;
        }

        let article = load_with_tags(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::not_found("article not found"))?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(article)
    }
}

impl PostgresArticleReadRepository {
    fn apply_conditions(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        builder.push(" WHERE a.status = ");
        builder.push_bind(filter.status().as_str());

        if let Some(search) = filter.search() {
            let pattern = like_pattern(search.as_str());
            builder.push(" AND (a.title ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" ESCAPE '\\' OR a.author ILIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\' OR ");
            Self::push_tag_exists(builder, search.as_str());
            builder.push(")");
        } else if let Some(tag) = filter.tag() {
            builder.push(" AND ");
            Self::push_tag_exists(builder, tag);
        }
    }

    fn push_tag_exists(builder: &mut QueryBuilder<'_, Postgres>, name: &str) {
        builder.push(
            "EXISTS (SELECT 1 FROM article_tags at JOIN tags t ON t.id = at.tag_id \
             WHERE at.article_id = a.id AND lower(t.name) = lower(",
        );
        builder.push_bind(name.to_string());
        builder.push("))");
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        load_with_tags(&mut conn, i64::from(id)).await
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::apply_conditions(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        Self::apply_conditions(&mut builder, filter);
        builder.push(" ORDER BY a.created_at DESC, a.id DESC");
        if let Some(window) = window {
            builder.push(" LIMIT ");
            builder.push_bind(to_bigint(window.limit));
            builder.push(" OFFSET ");
            builder.push_bind(to_bigint(window.offset));
        }

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        hydrate(&self.pool, rows).await
    }
}
