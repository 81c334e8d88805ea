use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleListDto, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, SearchTerm},
        pagination::Paginator,
    },
};

pub const ARTICLES_PER_PAGE: u32 = 5;
pub const ARTICLE_ORPHANS: u32 = 1;

pub struct ListArticlesQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
    pub page: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleListDto> {
        let search = SearchTerm::parse(query.search.as_deref());
        let filter = ArticleFilter::listing(search, query.tag.as_deref());

        let count = self.read_repo.count(&filter).await?;
        let paginator = Paginator::new(count, ARTICLES_PER_PAGE, ARTICLE_ORPHANS);
        let number = paginator.resolve_strict(query.page.as_deref())?;
        let window = paginator.window(number);

        let articles = self.read_repo.list(&filter, Some(window)).await?;
        let archived = self.read_repo.list(&ArticleFilter::archived(), None).await?;

        tracing::debug!(
            count,
            page = number,
            search = filter.search().map(SearchTerm::as_str),
            tag = filter.tag(),
            "listed articles"
        );

        let query_fragment = filter
            .search()
            .map(|term| serde_urlencoded::to_string(vec![("search", term.as_str())]))
            .transpose()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(ArticleListDto {
            articles: PageDto::new(
                articles.into_iter().map(ArticleDto::from).collect(),
                paginator.meta(number),
            ),
            archived_articles: archived.into_iter().map(ArticleDto::from).collect(),
            search: filter.search().map(|term| term.as_str().to_string()),
            query: query_fragment,
            tag: filter.tag().map(str::to_string),
        })
    }
}
