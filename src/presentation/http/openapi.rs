// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::article_detail,
        crate::presentation::http::controllers::articles::create_form,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_form,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_confirmation,
        crate::presentation::http::controllers::articles::archive_article,
        crate::presentation::http::controllers::comments::create_form,
        crate::presentation::http::controllers::comments::create_comment,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::PageParams,
            crate::presentation::http::controllers::comments::CommentFormParams,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleListDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::ArticleFormContextDto,
            crate::application::dto::ArticleForm,
            crate::application::dto::CategoryDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentForm,
            crate::application::dto::CommentFormContextDto,
            crate::application::dto::FieldErrors,
            crate::application::dto::PageInfoDto,
            crate::application::dto::StatusChoiceDto
        )
    ),
    tags(
        (name = "Articles", description = "Article listing and lifecycle"),
        (name = "Comments", description = "Article comments"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Blog API",
        description = "Articles, tags, categories and comments",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Servers come from `PUBLIC_API_URLS` (comma separated), falling back to
/// the default listen address.
struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(|segment| segment.trim().trim_end_matches('/'))
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        urls.dedup();

        if urls.is_empty() {
            urls.push("http://127.0.0.1:8080".to_string());
        }

        openapi.servers = Some(urls.into_iter().map(Server::new).collect());
    }
}

/// Swagger UI at `/docs` (document at `/openapi.json`) and ReDoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` and return the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(output_path)
}
