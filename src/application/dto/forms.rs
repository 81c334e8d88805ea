// src/application/dto/forms.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::domain::{
    article::{ArticleAuthor, ArticleId, ArticleStatus, ArticleText, ArticleTitle},
    category::CategoryId,
    comment::{CommentAuthor, CommentText},
    errors::DomainResult,
    tag::{TagManager, TagName},
};

pub const INVALID_CHOICE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// Field name to messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn collect<T>(&mut self, field: &str, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                if !self.contains(field) {
                    self.add(field, err.detail());
                }
                None
            }
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Self::default();
        for (field, kinds) in errors.field_errors() {
            for err in kinds {
                let message = err
                    .message
                    .as_ref()
                    .map_or_else(|| "Invalid value".to_string(), ToString::to_string);
                fields.add(field.to_string(), message);
            }
        }
        fields
    }
}

/// Outcome of validating a submitted form.
#[derive(Debug, Clone)]
pub enum FormValidation<T> {
    Valid(T),
    Invalid(FieldErrors),
}

impl<T> FormValidation<T> {
    pub fn into_result(self) -> Result<T, FieldErrors> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ArticleForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title is required and must be at most 200 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 40, message = "Author is required and must be at most 40 characters"))]
    pub author: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 3000, message = "Text is required and must be at most 3000 characters"))]
    pub text: String,
    /// Category id; blank for none.
    #[serde(default)]
    pub category: Option<String>,
    /// `active` or `archived`; blank keeps the default.
    #[serde(default)]
    pub status: Option<String>,
    /// Comma separated, or whitespace separated when there is no comma.
    #[serde(default)]
    #[validate(length(max = 500, message = "Tags must be at most 500 characters"))]
    pub tags: String,
}

#[derive(Debug, Clone)]
pub struct ArticleFields {
    pub title: ArticleTitle,
    pub author: ArticleAuthor,
    pub text: ArticleText,
    pub category_id: Option<CategoryId>,
    pub status: Option<ArticleStatus>,
    pub tags: Vec<TagName>,
}

pub fn validate_article_form(form: &ArticleForm) -> FormValidation<ArticleFields> {
    let mut errors = form.validate().err().map(FieldErrors::from).unwrap_or_default();

    let title = errors.collect("title", ArticleTitle::new(form.title.clone()));
    let author = errors.collect("author", ArticleAuthor::new(form.author.clone()));
    let text = errors.collect("text", ArticleText::new(form.text.clone()));
    let category_id = match blank_to_none(form.category.as_deref()) {
        None => Some(None),
        Some(raw) => match raw.parse::<i64>().ok().and_then(|id| CategoryId::new(id).ok()) {
            Some(id) => Some(Some(id)),
            None => {
                errors.add("category", INVALID_CHOICE);
                None
            }
        },
    };
    let status = match blank_to_none(form.status.as_deref()) {
        None => Some(None),
        Some(raw) => errors.collect("status", raw.parse::<ArticleStatus>()).map(Some),
    };
    let tags = errors.collect("tags", TagManager::parse(&form.tags));

    match (title, author, text, category_id, status, tags) {
        (Some(title), Some(author), Some(text), Some(category_id), Some(status), Some(tags))
            if errors.is_empty() =>
        {
            FormValidation::Valid(ArticleFields {
                title,
                author,
                text,
                category_id,
                status,
                tags,
            })
        }
        _ => FormValidation::Invalid(errors),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CommentForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 40, message = "Author is required and must be at most 40 characters"))]
    pub author: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 400, message = "Text is required and must be at most 400 characters"))]
    pub text: String,
    /// Id of the article being commented on.
    #[serde(default)]
    pub article: String,
}

#[derive(Debug, Clone)]
pub struct CommentFields {
    pub author: CommentAuthor,
    pub text: CommentText,
    pub article_id: ArticleId,
}

pub fn validate_comment_form(form: &CommentForm) -> FormValidation<CommentFields> {
    let mut errors = form.validate().err().map(FieldErrors::from).unwrap_or_default();

    let author = errors.collect("author", CommentAuthor::new(form.author.clone()));
    let text = errors.collect("text", CommentText::new(form.text.clone()));
    let article_id = blank_to_none(Some(&form.article))
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|id| ArticleId::new(id).ok());
    if article_id.is_none() {
        errors.add("article", INVALID_CHOICE);
    }

    match (author, text, article_id) {
        (Some(author), Some(text), Some(article_id)) if errors.is_empty() => {
            FormValidation::Valid(CommentFields {
                author,
                text,
                article_id,
            })
        }
        _ => FormValidation::Invalid(errors),
    }
}

fn blank_to_none(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
