// tests/support/builders.rs
use blog_core::application::commands::articles::CreateArticleCommand;
use blog_core::application::commands::comments::CreateCommentCommand;
use blog_core::application::dto::{ArticleDto, ArticleForm, CommentDto, CommentForm};
use blog_core::application::services::ApplicationServices;

pub struct ArticleFormBuilder {
    form: ArticleForm,
}

impl ArticleFormBuilder {
    pub fn new() -> Self {
        Self {
            form: ArticleForm {
                title: "Test Article".into(),
                author: "Test Author".into(),
                text: "Test text".into(),
                category: None,
                status: None,
                tags: String::new(),
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.form.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.form.author = author.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.form.text = text.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.form.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.form.status = Some(status.into());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.form.tags = tags.into();
        self
    }

    pub fn build(self) -> ArticleForm {
        self.form
    }

    /// Create the article through the command service.
    pub async fn create(self, services: &ApplicationServices) -> ArticleDto {
        services
            .article_commands
            .create_article(CreateArticleCommand { form: self.form })
            .await
            .expect("article should be created")
    }
}

impl Default for ArticleFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn add_comment(
    services: &ApplicationServices,
    article_id: i64,
    author: &str,
    text: &str,
) -> CommentDto {
    services
        .comment_commands
        .create_comment(CreateCommentCommand {
            form: CommentForm {
                author: author.into(),
                text: text.into(),
                article: article_id.to_string(),
            },
        })
        .await
        .expect("comment should be created")
}
