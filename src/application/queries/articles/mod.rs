mod form;
mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::{ARTICLE_ORPHANS, ARTICLES_PER_PAGE, ListArticlesQuery};
pub use service::ArticleQueryService;
