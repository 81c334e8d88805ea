use super::{ArticleQueryService, GetArticleByIdQuery};
use crate::{
    application::{
        dto::{ArticleForm, ArticleFormContextDto, CategoryDto, StatusChoiceDto},
        error::ApplicationResult,
    },
    domain::article::ArticleStatus,
};

impl ArticleQueryService {
    pub async fn create_form_context(&self) -> ApplicationResult<ArticleFormContextDto> {
        let values = ArticleForm {
            status: Some(ArticleStatus::Active.as_str().to_string()),
            ..ArticleForm::default()
        };
        self.form_context(None, values).await
    }

    pub async fn update_form_context(&self, id: i64) -> ApplicationResult<ArticleFormContextDto> {
        let article = self.get_article_by_id(GetArticleByIdQuery { id }).await?;
        let values = article.to_form();
        self.form_context(Some(article.id), values).await
    }

    async fn form_context(
        &self,
        article_id: Option<i64>,
        values: ArticleForm,
    ) -> ApplicationResult<ArticleFormContextDto> {
        let categories = self.category_repo.list().await?;
        Ok(ArticleFormContextDto {
            article_id,
            values,
            categories: categories.into_iter().map(CategoryDto::from).collect(),
            statuses: ArticleStatus::ALL.into_iter().map(StatusChoiceDto::from).collect(),
        })
    }
}
