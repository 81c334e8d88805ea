// src/application/commands/articles/mod.rs
mod archive;
mod create;
mod service;
mod update;

pub use archive::ArchiveArticleCommand;
pub use create::CreateArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
