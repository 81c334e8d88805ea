use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleUpdate,
};

pub struct ArchiveArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Soft delete: the row stays and remains viewable by id.
    pub async fn archive_article(
        &self,
        command: ArchiveArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(command.id).await?;
        if !article.archive() {
            tracing::debug!(article_id = article.id.0, "article already archived");
            return Ok(article.into());
        }

        let update = ArticleUpdate::new(article.id).with_status(article.status);
        let archived = self.write_repo.update(update).await?;
        tracing::info!(article_id = archived.id.0, "article archived");
        Ok(archived.into())
    }
}
