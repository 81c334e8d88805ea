use crate::domain::article::{Article, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ArticleForm, CategoryDto, CommentDto, PageDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub text: String,
    pub category_id: Option<i64>,
    pub status: String,
    pub tags: Vec<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            author: article.author.into_inner(),
            text: article.text.into_inner(),
            category_id: article.category_id.map(Into::into),
            status: article.status.as_str().to_string(),
            tags: article
                .tags
                .into_iter()
                .map(|tag| tag.name.into_inner())
                .collect(),
            created_at: article.created_at,
        }
    }
}

impl ArticleDto {
    /// Form values pre-filled from this article, tags joined with commas.
    pub fn to_form(&self) -> ArticleForm {
        ArticleForm {
            title: self.title.clone(),
            author: self.author.clone(),
            text: self.text.clone(),
            category: self.category_id.map(|id| id.to_string()),
            status: Some(self.status.clone()),
            tags: self.tags.join(","),
        }
    }
}

/// Index view context: the active page plus the archived sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListDto {
    pub articles: PageDto<ArticleDto>,
    pub archived_articles: Vec<ArticleDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Url-encoded `search=...` fragment for page links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub article: ArticleDto,
    pub comments: PageDto<CommentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusChoiceDto {
    pub value: String,
    pub label: String,
}

impl From<ArticleStatus> for StatusChoiceDto {
    fn from(status: ArticleStatus) -> Self {
        Self {
            value: status.as_str().to_string(),
            label: status.label().to_string(),
        }
    }
}

/// Everything a create or update form needs to render.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleFormContextDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,
    pub values: ArticleForm,
    pub categories: Vec<CategoryDto>,
    pub statuses: Vec<StatusChoiceDto>,
}
