use super::CommentCommandService;
use crate::{
    application::{
        dto::{CommentDto, CommentForm, FieldErrors, forms::INVALID_CHOICE, validate_comment_form},
        error::ApplicationResult,
    },
    domain::comment::NewComment,
};

pub struct CreateCommentCommand {
    pub form: CommentForm,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let fields = validate_comment_form(&command.form).into_result()?;

        if self.article_repo.find_by_id(fields.article_id).await?.is_none() {
            let mut errors = FieldErrors::default();
            errors.add("article", INVALID_CHOICE);
            return Err(errors.into());
        }

        let comment = self
            .comment_repo
            .insert(NewComment {
                article_id: fields.article_id,
                author: fields.author,
                text: fields.text,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(
            comment_id = comment.id.0,
            article_id = comment.article_id.0,
            "comment created"
        );
        Ok(comment.into())
    }
}
