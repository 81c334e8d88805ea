use super::CommentQueryService;
use crate::{
    application::{
        dto::{CommentDto, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, pagination::Paginator},
};

pub const COMMENTS_PER_PAGE: u32 = 3;
pub const COMMENT_ORPHANS: u32 = 0;

pub struct ListCommentsQuery {
    pub article_id: i64,
    pub page: Option<String>,
}

impl CommentQueryService {
    /// Newest first. Unlike the article index, an unusable page number falls
    /// back to the first or last page instead of failing.
    pub async fn list_for_article(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<PageDto<CommentDto>> {
        let article_id = ArticleId::new(query.article_id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        let count = self.comment_repo.count_for_article(article_id).await?;
        let paginator = Paginator::new(count, COMMENTS_PER_PAGE, COMMENT_ORPHANS);
        let number = paginator.resolve_lenient(query.page.as_deref());

        let comments = self
            .comment_repo
            .list_for_article(article_id, paginator.window(number))
            .await?;

        Ok(PageDto::new(
            comments.into_iter().map(CommentDto::from).collect(),
            paginator.meta(number),
        ))
    }
}
