use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageWindow;
use async_trait::async_trait;

/// Writes persist the article row and apply its tag reconciliation as one
/// unit.
#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
    /// Newest first. `None` returns every match.
    async fn list(
        &self,
        filter: &ArticleFilter,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<Article>>;
}
