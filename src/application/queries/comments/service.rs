use std::sync::Arc;

use crate::application::dto::{CommentForm, CommentFormContextDto};
use crate::domain::comment::CommentRepository;

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }

    pub fn form_context(&self, article_id: Option<i64>) -> CommentFormContextDto {
        CommentFormContextDto {
            values: CommentForm {
                article: article_id.map(|id| id.to_string()).unwrap_or_default(),
                ..CommentForm::default()
            },
        }
    }
}
