use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleForm, FieldErrors, validate_article_form},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleContent, ArticleStatus, ArticleUpdate},
        tag::TagManager,
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub form: ArticleForm,
}

impl ArticleCommandService {
    /// Replace the editable fields and the tag set of an article. Submitting
    /// `archived` archives it; an archived article cannot be reactivated.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load(command.id).await?;
        let fields = validate_article_form(&command.form).into_result()?;

        let mut errors = FieldErrors::default();
        let requested_status = fields.status.unwrap_or(article.status);
        if !article.status.can_transition_to(requested_status) {
            errors.add("status", "archived articles cannot be reactivated");
        }
        self.check_category(fields.category_id, &mut errors).await?;
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let mut update = ArticleUpdate::new(article.id)
            .with_content(ArticleContent {
                title: fields.title,
                author: fields.author,
                text: fields.text,
                category_id: fields.category_id,
            })
            .with_tags(TagManager::plan_for_update(fields.tags));
        if requested_status != article.status {
            update = update.with_status(requested_status);
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            article_id = updated.id.0,
            archived = updated.status == ArticleStatus::Archived,
            tags = updated.tags.len(),
            "article updated"
        );
        Ok(updated.into())
    }
}
