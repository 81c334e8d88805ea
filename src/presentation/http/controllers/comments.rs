// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::CreateCommentCommand,
    dto::{CommentForm, CommentFormContextDto},
};
use crate::presentation::http::controllers::articles::article_location;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Query,
    response::Redirect,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CommentFormParams {
    /// Pre-selects the article being commented on.
    #[serde(default)]
    pub article: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/comments/create",
    params(CommentFormParams),
    responses(
        (status = 200, description = "Blank comment form.", body = CommentFormContextDto)
    ),
    tag = "Comments"
)]
pub async fn create_form(
    Extension(state): Extension<HttpState>,
    Query(params): Query<CommentFormParams>,
) -> Json<CommentFormContextDto> {
    Json(state.services.comment_queries.form_context(params.article))
}

#[utoipa::path(
    post,
    path = "/comments/create",
    request_body(content = CommentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; redirects to the parent article."),
        (status = 422, description = "Form has errors.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Form(form): Form<CommentForm>,
) -> HttpResult<Redirect> {
    let comment = state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand { form: form.clone() })
        .await
        .into_http_form(&form)?;

    Ok(Redirect::to(&article_location(comment.article_id)))
}
