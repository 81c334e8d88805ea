// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleForm, FieldErrors, validate_article_form},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleContent, ArticleStatus, NewArticle},
        tag::TagManager,
    },
};

pub struct CreateArticleCommand {
    pub form: ArticleForm,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let fields = validate_article_form(&command.form).into_result()?;

        let mut errors = FieldErrors::default();
        if fields
            .status
            .is_some_and(|status| status != ArticleStatus::Active)
        {
            errors.add("status", "new articles must be active");
        }
        self.check_category(fields.category_id, &mut errors).await?;
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let new_article = NewArticle {
            content: ArticleContent {
                title: fields.title,
                author: fields.author,
                text: fields.text,
                category_id: fields.category_id,
            },
            status: ArticleStatus::Active,
            tags: TagManager::plan_for_create(fields.tags),
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = created.id.0,
            tags = created.tags.len(),
            "article created"
        );
        Ok(created.into())
    }
}
