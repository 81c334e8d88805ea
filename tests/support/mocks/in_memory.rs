// tests/support/mocks/in_memory.rs
use async_trait::async_trait;
use blog_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use blog_core::domain::category::{Category, CategoryId, CategoryRepository};
use blog_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use blog_core::domain::errors::{DomainError, DomainResult};
use blog_core::domain::pagination::PageWindow;
use blog_core::domain::tag::{Tag, TagId, TagName};
use std::sync::Mutex;

#[derive(Default)]
struct Store {
    articles: Vec<Article>,
    tags: Vec<Tag>,
    comments: Vec<Comment>,
    categories: Vec<Category>,
    next_article_id: i64,
    next_tag_id: i64,
    next_comment_id: i64,
}

impl Store {
    fn get_or_create_tag(&mut self, name: &TagName) -> Tag {
        if let Some(tag) = self
            .tags
            .iter()
            .find(|tag| tag.name.eq_ignore_case(name.as_str()))
        {
            return tag.clone();
        }
        self.next_tag_id += 1;
        let tag = Tag {
            id: TagId(self.next_tag_id),
            name: name.clone(),
        };
        self.tags.push(tag.clone());
        tag
    }

    fn attach(&mut self, index: usize, names: &[TagName]) {
        for name in names {
            let tag = self.get_or_create_tag(name);
            let article = &mut self.articles[index];
            if !article.tags.iter().any(|known| known.id == tag.id) {
                article.tags.push(tag);
            }
        }
        self.articles[index]
            .tags
            .sort_by_key(|tag| tag.name.as_str().to_lowercase());
    }
}

/// One store behind every repository trait, mirroring the Postgres schema
/// closely enough for service and router tests.
pub struct InMemoryBlog {
    store: Mutex<Store>,
}

impl InMemoryBlog {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::default()),
        }
    }

    /// Same categories the migration seeds.
    pub fn with_default_categories() -> Self {
        let blog = Self::new();
        {
            let mut store = blog.store.lock().unwrap();
            store.categories = ["Other", "News", "Technology"]
                .into_iter()
                .zip(1..)
                .map(|(name, id)| Category {
                    id: CategoryId(id),
                    name: name.to_string(),
                })
                .collect();
        }
        blog
    }

    pub fn tag_names(&self) -> Vec<String> {
        let store = self.store.lock().unwrap();
        store
            .tags
            .iter()
            .map(|tag| tag.name.as_str().to_string())
            .collect()
    }

    pub fn comment_count(&self) -> usize {
        self.store.lock().unwrap().comments.len()
    }
}

impl Default for InMemoryBlog {
    fn default() -> Self {
        Self::with_default_categories()
    }
}

fn newest_first<T, K: Ord>(items: &mut [T], key: impl Fn(&T) -> K) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

fn apply_window<T>(items: Vec<T>, window: Option<PageWindow>) -> Vec<T> {
    match window {
        Some(window) => items
            .into_iter()
            .skip(usize::try_from(window.offset).unwrap())
            .take(usize::try_from(window.limit).unwrap())
            .collect(),
        None => items,
    }
}

/* -------------------------------- ArticleWriteRepository -------------------------------- */

#[async_trait]
impl ArticleWriteRepository for InMemoryBlog {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.store.lock().unwrap();
        if let Some(category_id) = article.content.category_id {
            if !store.categories.iter().any(|c| c.id == category_id) {
                return Err(DomainError::NotFound("category not found".into()));
            }
        }

        store.next_article_id += 1;
        let id = ArticleId(store.next_article_id);
        store.articles.push(Article {
            id,
            title: article.content.title,
            author: article.content.author,
            text: article.content.text,
            category_id: article.content.category_id,
            status: article.status,
            tags: Vec::new(),
            created_at: article.created_at,
        });
        let index = store.articles.len() - 1;
        store.attach(index, article.tags.names());
        Ok(store.articles[index].clone())
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut store = self.store.lock().unwrap();
        let index = store
            .articles
            .iter()
            .position(|article| article.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        {
            let article = &mut store.articles[index];
            if let Some(content) = update.content {
                article.title = content.title;
                article.author = content.author;
                article.text = content.text;
                article.category_id = content.category_id;
            }
            if let Some(status) = update.status {
                article.status = status;
            }
        }

        if let Some(plan) = update.tags {
            if plan.replaces_existing() {
                store.articles[index].tags.clear();
            }
            store.attach(index, plan.names());
        }

        Ok(store.articles[index].clone())
    }
}

/* -------------------------------- ArticleReadRepository -------------------------------- */

#[async_trait]
impl ArticleReadRepository for InMemoryBlog {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let store = self.store.lock().unwrap();
        Ok(store.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let store = self.store.lock().unwrap();
        let total = store.articles.iter().filter(|a| filter.matches(a)).count();
        Ok(total as u64)
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<Article>> {
        let store = self.store.lock().unwrap();
        let mut matching: Vec<Article> = store
            .articles
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect();
        newest_first(&mut matching, |a| (a.created_at, a.id));
        Ok(apply_window(matching, window))
    }
}

/* -------------------------------- CommentRepository -------------------------------- */

#[async_trait]
impl CommentRepository for InMemoryBlog {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut store = self.store.lock().unwrap();
        if !store.articles.iter().any(|a| a.id == comment.article_id) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        store.next_comment_id += 1;
        let saved = Comment {
            id: CommentId(store.next_comment_id),
            article_id: comment.article_id,
            author: comment.author,
            text: comment.text,
            created_at: comment.created_at,
        };
        store.comments.push(saved.clone());
        Ok(saved)
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        let store = self.store.lock().unwrap();
        let total = store
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .count();
        Ok(total as u64)
    }

    async fn list_for_article(
        &self,
        article_id: ArticleId,
        window: PageWindow,
    ) -> DomainResult<Vec<Comment>> {
        let store = self.store.lock().unwrap();
        let mut matching: Vec<Comment> = store
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        newest_first(&mut matching, |c| (c.created_at, c.id.0));
        Ok(apply_window(matching, Some(window)))
    }
}

/* -------------------------------- CategoryRepository -------------------------------- */

#[async_trait]
impl CategoryRepository for InMemoryBlog {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        let store = self.store.lock().unwrap();
        let mut categories = store.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let store = self.store.lock().unwrap();
        Ok(store.categories.iter().find(|c| c.id == id).cloned())
    }
}
