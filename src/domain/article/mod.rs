pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleContent, ArticleUpdate, NewArticle};
pub use filter::ArticleFilter;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleAuthor, ArticleId, ArticleStatus, ArticleText, ArticleTitle, SearchTerm,
};
