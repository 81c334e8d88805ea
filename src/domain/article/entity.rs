// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleAuthor, ArticleId, ArticleStatus, ArticleText, ArticleTitle,
};
use crate::domain::category::CategoryId;
use crate::domain::tag::{Tag, TagReconciliation};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub author: ArticleAuthor,
    pub text: ArticleText,
    pub category_id: Option<CategoryId>,
    pub status: ArticleStatus,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Soft delete. Returns `false` when the article was already archived.
    pub fn archive(&mut self) -> bool {
        if self.status == ArticleStatus::Archived {
            return false;
        }
        self.status = ArticleStatus::Archived;
        true
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name.eq_ignore_case(name))
    }
}

/// Editable fields shared by creation and update forms.
#[derive(Debug, Clone)]
pub struct ArticleContent {
    pub title: ArticleTitle,
    pub author: ArticleAuthor,
    pub text: ArticleText,
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub content: ArticleContent,
    pub status: ArticleStatus,
    pub tags: TagReconciliation,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub content: Option<ArticleContent>,
    pub status: Option<ArticleStatus>,
    pub tags: Option<TagReconciliation>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            content: None,
            status: None,
            tags: None,
        }
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_tags(mut self, tags: TagReconciliation) -> Self {
        self.tags = Some(tags);
        self
    }
}
