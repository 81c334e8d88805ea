// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{ArchiveArticleCommand, CreateArticleCommand, UpdateArticleCommand},
    dto::{ArticleDetailDto, ArticleDto, ArticleForm, ArticleFormContextDto, ArticleListDto},
    queries::{
        articles::{GetArticleByIdQuery, ListArticlesQuery},
        comments::ListCommentsQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ArticlePath;
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
pub struct ArticleListParams {
    /// Matches title or author substrings and exact tag names.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact tag name; ignored when `search` is present.
    #[serde(default)]
    pub tag: Option<String>,
    /// Page number or `last`.
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<String>,
}

pub(crate) fn article_location(id: i64) -> String {
    format!("/articles/{id}")
}

#[utoipa::path(
    get,
    path = "/",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Active articles with the archived sidebar.", body = ArticleListDto),
        (status = 404, description = "Page does not exist.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListDto>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            search: params.search,
            tag: params.tag,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id"), PageParams),
    responses(
        (status = 200, description = "Article with a page of comments.", body = ArticleDetailDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn article_detail(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ArticleDetailDto>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    let comments = state
        .services
        .comment_queries
        .list_for_article(ListCommentsQuery {
            article_id: article.id,
            page: params.page,
        })
        .await
        .into_http()?;

    Ok(Json(ArticleDetailDto { article, comments }))
}

#[utoipa::path(
    get,
    path = "/articles/create",
    responses(
        (status = 200, description = "Blank article form.", body = ArticleFormContextDto)
    ),
    tag = "Articles"
)]
pub async fn create_form(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleFormContextDto>> {
    state
        .services
        .article_queries
        .create_form_context()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles/create",
    request_body(content = ArticleForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; redirects to the article."),
        (status = 422, description = "Form has errors.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Redirect> {
    let created = state
        .services
        .article_commands
        .create_article(CreateArticleCommand { form: form.clone() })
        .await
        .into_http_form(&form)?;

    Ok(Redirect::to(&article_location(created.id)))
}

#[utoipa::path(
    get,
    path = "/articles/{id}/update",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Form pre-filled from the article.", body = ArticleFormContextDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_form(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
) -> HttpResult<Json<ArticleFormContextDto>> {
    state
        .services
        .article_queries
        .update_form_context(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles/{id}/update",
    params(("id" = i64, Path, description = "Article id")),
    request_body(content = ArticleForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; redirects to the article."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Form has errors.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
    Form(form): Form<ArticleForm>,
) -> HttpResult<Redirect> {
    let updated = state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            form: form.clone(),
        })
        .await
        .into_http_form(&form)?;

    Ok(Redirect::to(&article_location(updated.id)))
}

#[utoipa::path(
    get,
    path = "/articles/{id}/delete",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article to confirm archiving.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_confirmation(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles/{id}/delete",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 303, description = "Archived; redirects to the index."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn archive_article(
    Extension(state): Extension<HttpState>,
    ArticlePath(id): ArticlePath,
) -> HttpResult<Redirect> {
    state
        .services
        .article_commands
        .archive_article(ArchiveArticleCommand { id })
        .await
        .into_http()?;

    Ok(Redirect::to("/"))
}
