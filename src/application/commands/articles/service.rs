// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{FieldErrors, forms::INVALID_CHOICE},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
        category::{CategoryId, CategoryRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            clock,
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id).map_err(|_| ApplicationError::not_found("article not found"))?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub(super) async fn check_category(
        &self,
        category_id: Option<CategoryId>,
        errors: &mut FieldErrors,
    ) -> ApplicationResult<()> {
        if let Some(id) = category_id {
            if self.category_repo.find_by_id(id).await?.is_none() {
                errors.add("category", INVALID_CHOICE);
            }
        }
        Ok(())
    }
}
