// tests/integration_postgres.rs
//
// Runs against a real database only when RUN_DB_INTEGRATION=1 and
// DATABASE_URL are set. Rows are keyed by a per-test marker and removed
// afterwards.
use std::sync::Arc;

use blog_core::application::commands::articles::UpdateArticleCommand;
use blog_core::application::error::ApplicationError;
use blog_core::application::ports::time::Clock;
use blog_core::application::queries::articles::ListArticlesQuery;
use blog_core::application::services::ApplicationServices;
use blog_core::domain::article::{
    ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository,
};
use blog_core::domain::category::CategoryRepository;
use blog_core::domain::comment::CommentRepository;
use blog_core::domain::errors::DomainError;
use blog_core::domain::tag::TagManager;
use blog_core::infrastructure::database::{init_pool, run_migrations};
use blog_core::infrastructure::repositories::{
    PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresCategoryRepository,
    PostgresCommentRepository,
};
use blog_core::infrastructure::time::SystemClock;
use sqlx::PgPool;

mod support;
use support::ArticleFormBuilder;

struct PgBlog {
    pool: PgPool,
    services: ApplicationServices,
    write_repo: Arc<dyn ArticleWriteRepository>,
    marker: String,
}

impl PgBlog {
    /// Remove every article and tag carrying this test's marker.
    async fn cleanup(&self) {
        let pattern = format!("%{}%", self.marker);
        sqlx::query("DELETE FROM articles WHERE author LIKE $1 OR title LIKE $1")
            .bind(&pattern)
            .execute(&self.pool)
            .await
            .expect("cleanup articles");
        sqlx::query("DELETE FROM tags WHERE lower(name) LIKE lower($1)")
            .bind(&pattern)
            .execute(&self.pool)
            .await
            .expect("cleanup tags");
    }

    fn tag(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.marker)
    }
}

async fn connect(prefix: &str) -> Option<PgBlog> {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return None;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = init_pool(&database_url, 4).await.expect("init pool");
    run_migrations(&pool).await.expect("run migrations");

    let write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = ApplicationServices::new(
        write_repo.clone(),
        read_repo,
        comment_repo,
        category_repo,
        clock,
    );

    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default()
        .rem_euclid(1_000_000_000_000);
    let blog = PgBlog {
        pool,
        services,
        write_repo,
        marker: format!("{prefix}{nanos}"),
    };
    blog.cleanup().await;
    Some(blog)
}

fn search(term: &str, page: Option<&str>) -> ListArticlesQuery {
    ListArticlesQuery {
        search: Some(term.to_string()),
        tag: None,
        page: page.map(str::to_string),
    }
}

#[tokio::test]
async fn integration_eleven_articles_fold_the_orphan_into_page_two() {
    let Some(blog) = connect("pgpage").await else {
        return;
    };

    for n in 1..=11 {
        ArticleFormBuilder::new()
            .title(format!("Post {n}"))
            .author(format!("Author {}", blog.marker))
            .create(&blog.services)
            .await;
    }

    let queries = &blog.services.article_queries;
    let first = queries
        .list_articles(search(&blog.marker, None))
        .await
        .expect("first page");
    assert_eq!(first.articles.page.count, 11);
    assert_eq!(first.articles.page.num_pages, 2);
    assert_eq!(first.articles.items.len(), 5);
    assert_eq!(first.articles.items[0].title, "Post 11");

    let last = queries
        .list_articles(search(&blog.marker, Some("last")))
        .await
        .expect("last page");
    assert_eq!(last.articles.page.number, 2);
    assert_eq!(last.articles.items.len(), 6);
    assert_eq!(last.articles.items[5].title, "Post 1");

    let missing = queries.list_articles(search(&blog.marker, Some("3"))).await;
    assert!(matches!(
        missing,
        Err(ApplicationError::Domain(DomainError::NotFound(_)))
            | Err(ApplicationError::NotFound(_))
    ));

    blog.cleanup().await;
}

#[tokio::test]
async fn integration_search_matches_author_and_exact_tag_once() {
    let Some(blog) = connect("pgsearch").await else {
        return;
    };
    let tag = blog.tag("t");

    // Title and tag both match: listed once.
    ArticleFormBuilder::new()
        .title(format!("About {tag}"))
        .author(format!("Someone {}", blog.marker))
        .tags(format!("{tag}, other{}", blog.marker))
        .create(&blog.services)
        .await;
    ArticleFormBuilder::new()
        .title(format!("Untagged {}", blog.marker))
        .author("Nobody")
        .create(&blog.services)
        .await;

    let queries = &blog.services.article_queries;

    let by_author = queries
        .list_articles(search(&format!("someone {}", blog.marker), None))
        .await
        .expect("author search");
    assert_eq!(by_author.articles.page.count, 1);

    let by_tag = queries
        .list_articles(search(&tag.to_uppercase(), None))
        .await
        .expect("tag search");
    assert_eq!(by_tag.articles.page.count, 1);
    assert_eq!(by_tag.articles.items.len(), 1);
    assert_eq!(by_tag.articles.items[0].title, format!("About {tag}"));

    let wildcard = queries
        .list_articles(search(&format!("{}%", blog.marker), None))
        .await
        .expect("escaped search");
    assert_eq!(wildcard.articles.page.count, 0);

    blog.cleanup().await;
}

#[tokio::test]
async fn integration_tags_are_reused_regardless_of_case() {
    let Some(blog) = connect("pgtags").await else {
        return;
    };
    let mixed = blog.tag("Mix");

    let first = ArticleFormBuilder::new()
        .author(format!("A {}", blog.marker))
        .tags(mixed.clone())
        .create(&blog.services)
        .await;
    let second = ArticleFormBuilder::new()
        .author(format!("B {}", blog.marker))
        .tags(mixed.to_lowercase())
        .create(&blog.services)
        .await;

    assert_eq!(first.tags, vec![mixed.clone()]);
    assert_eq!(second.tags, vec![mixed.clone()]);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags WHERE lower(name) = lower($1)")
        .bind(&mixed)
        .fetch_one(&blog.pool)
        .await
        .expect("count tags");
    assert_eq!(stored, 1);

    blog.cleanup().await;
}

#[tokio::test]
async fn integration_tag_replace_drops_associations_added_after_planning() {
    let Some(blog) = connect("pgreplace").await else {
        return;
    };

    let created = ArticleFormBuilder::new()
        .author(format!("Writer {}", blog.marker))
        .tags(blog.tag("x"))
        .create(&blog.services)
        .await;

    let pending = ArticleUpdate::new(ArticleId(created.id)).with_tags(TagManager::plan_for_update(
        TagManager::parse(&blog.tag("z")).expect("tag"),
    ));

    blog.services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            form: ArticleFormBuilder::new()
                .author(format!("Writer {}", blog.marker))
                .tags(blog.tag("y"))
                .build(),
        })
        .await
        .expect("concurrent update");

    let written = blog.write_repo.update(pending).await.expect("replace tags");
    let names: Vec<String> = written
        .tags
        .iter()
        .map(|tag| tag.name.as_str().to_string())
        .collect();
    assert_eq!(names, vec![blog.tag("z")]);

    blog.cleanup().await;
}
