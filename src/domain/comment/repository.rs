use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageWindow;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64>;
    /// Newest first.
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        window: PageWindow,
    ) -> DomainResult<Vec<Comment>>;
}
