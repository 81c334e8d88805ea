// src/domain/article/filter.rs
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleStatus, SearchTerm};

/// Listing criteria for articles.
///
/// A search matches a case-insensitive substring of the title or the author,
/// or an exact case-insensitive tag name. The tag filter only applies when
/// there is no search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    status: ArticleStatus,
    search: Option<SearchTerm>,
    tag: Option<String>,
}

impl ArticleFilter {
    pub fn listing(search: Option<SearchTerm>, tag: Option<&str>) -> Self {
        let tag = if search.is_some() {
            None
        } else {
            tag.map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };
        Self {
            status: ArticleStatus::Active,
            search,
            tag,
        }
    }

    pub fn archived() -> Self {
        Self {
            status: ArticleStatus::Archived,
            search: None,
            tag: None,
        }
    }

    pub fn status(&self) -> ArticleStatus {
        self.status
    }

    pub fn search(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn matches(&self, article: &Article) -> bool {
        if article.status != self.status {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.as_str().to_lowercase();
            return article.title.as_str().to_lowercase().contains(&needle)
                || article.author.as_str().to_lowercase().contains(&needle)
                || article.has_tag(search.as_str());
        }
        match &self.tag {
            Some(tag) => article.has_tag(tag),
            None => true,
        }
    }
}
