// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::actor::ActorId;
use crate::domain::article::{
    Article, ArticleChangeSet, ArticleContent, ArticleFlags, ArticleId, ArticleListFilter,
    ArticleReadRepository, ArticleSlug, ArticleWriteRepository, Classification, DeletedFilter,
    Image, ImageId, Language, NewArticle, Placement,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageCursor;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, slug, language, title, summary, body, title_ur, summary_ur, \
     body_ur, category, region, country, article_type, tags, author_id, is_featured, \
     is_trending, is_breaking, is_top_story, show_in_section, section_priority, deleted_at, \
     created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    language: String,
    title: Option<String>,
    summary: Option<String>,
    body: Option<String>,
    title_ur: Option<String>,
    summary_ur: Option<String>,
    body_ur: Option<String>,
    category: Option<String>,
    region: Option<String>,
    country: Option<String>,
    article_type: Option<String>,
    tags: Vec<String>,
    author_id: i64,
    is_featured: bool,
    is_trending: bool,
    is_breaking: bool,
    is_top_story: bool,
    show_in_section: bool,
    section_priority: i32,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            author_id: ActorId::new(row.author_id)?,
            content: ArticleContent {
                language: Language::parse(&row.language)?,
                title: row.title,
                summary: row.summary,
                body: row.body,
                title_ur: row.title_ur,
                summary_ur: row.summary_ur,
                body_ur: row.body_ur,
            },
            classification: Classification {
                category: row.category,
                region: row.region,
                country: row.country,
                article_type: row.article_type,
                tags: row.tags,
            },
            flags: ArticleFlags {
                is_featured: row.is_featured,
                is_trending: row.is_trending,
                is_breaking: row.is_breaking,
                is_top_story: row.is_top_story,
            },
            placement: Placement {
                show_in_section: row.show_in_section,
                section_priority: row.section_priority,
            },
            images: vec![],
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ImageRow {
    pub id: i64,
    pub article_id: i64,
    pub path: String,
    pub original_name: String,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ImageRow> for Image {
    type Error = DomainError;

    fn try_from(row: ImageRow) -> Result<Self, Self::Error> {
        Ok(Image {
            id: ImageId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            path: row.path,
            original_name: row.original_name,
            mime_type: row.mime_type,
            created_at: row.created_at,
        })
    }
}

pub(super) async fn load_images(pool: &PgPool, article_id: i64) -> DomainResult<Vec<Image>> {
    let rows = sqlx::query_as::<_, ImageRow>(
        "SELECT id, article_id, path, original_name, mime_type, created_at
         FROM images WHERE article_id = $1 ORDER BY id",
    )
    .bind(article_id)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx)?;

    rows.into_iter().map(Image::try_from).collect()
}

async fn hydrate(pool: &PgPool, row: ArticleRow) -> DomainResult<Article> {
    let mut article = Article::try_from(row)?;
    article.images = load_images(pool, article.id.into()).await?;
    Ok(article)
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            author_id,
            content,
            classification,
            flags,
            placement,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (slug, language, title, summary, body, title_ur, summary_ur, \
             body_ur, category, region, country, article_type, tags, author_id, is_featured, \
             is_trending, is_breaking, is_top_story, show_in_section, section_priority, \
             created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
             $18, $19, $20, $21, $22)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(slug.as_str())
        .bind(content.language.as_str())
        .bind(&content.title)
        .bind(&content.summary)
        .bind(&content.body)
        .bind(&content.title_ur)
        .bind(&content.summary_ur)
        .bind(&content.body_ur)
        .bind(&classification.category)
        .bind(&classification.region)
        .bind(&classification.country)
        .bind(&classification.article_type)
        .bind(&classification.tags)
        .bind(i64::from(author_id))
        .bind(flags.is_featured)
        .bind(flags.is_trending)
        .bind(flags.is_breaking)
        .bind(flags.is_top_story)
        .bind(placement.show_in_section)
        .bind(placement.section_priority)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        hydrate(&self.pool, row).await
    }

    async fn update(&self, change: ArticleChangeSet) -> DomainResult<Article> {
        let ArticleChangeSet {
            id,
            content,
            classification,
            flags,
            placement,
            updated_at,
        } = change;

        let maybe_row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET language = $2, title = $3, summary = $4, body = $5, \
             title_ur = $6, summary_ur = $7, body_ur = $8, category = $9, region = $10, \
             country = $11, article_type = $12, tags = $13, is_featured = $14, \
             is_trending = $15, is_breaking = $16, is_top_story = $17, show_in_section = $18, \
             section_priority = $19, updated_at = $20
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(content.language.as_str())
        .bind(&content.title)
        .bind(&content.summary)
        .bind(&content.body)
        .bind(&content.title_ur)
        .bind(&content.summary_ur)
        .bind(&content.body_ur)
        .bind(&classification.category)
        .bind(&classification.region)
        .bind(&classification.country)
        .bind(&classification.article_type)
        .bind(&classification.tags)
        .bind(flags.is_featured)
        .bind(flags.is_trending)
        .bind(flags.is_breaking)
        .bind(flags.is_top_story)
        .bind(placement.show_in_section)
        .bind(placement.section_priority)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        hydrate(&self.pool, row).await
    }

    async fn soft_delete(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<Article> {
        let maybe_row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET deleted_at = $2, updated_at = $2
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::NotFound("article not found or already deleted".into()))?;
        hydrate(&self.pool, row).await
    }

    async fn restore(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<Article> {
        let maybe_row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET deleted_at = NULL, updated_at = $2
             WHERE id = $1 AND deleted_at IS NOT NULL
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row =
            maybe_row.ok_or_else(|| DomainError::NotFound("article is not deleted".into()))?;
        hydrate(&self.pool, row).await
    }

    async fn hard_delete(&self, id: ArticleId) -> DomainResult<Vec<Image>> {
        let images = load_images(&self.pool, id.into()).await?;

        // image rows go with the article via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(images)
    }
}

fn deleted_condition(filter: DeletedFilter) -> &'static str {
    match filter {
        DeletedFilter::Exclude => " AND deleted_at IS NULL",
        DeletedFilter::Include => "",
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(
        &self,
        id: ArticleId,
        deleted: DeletedFilter,
    ) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1{}",
            deleted_condition(deleted)
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(hydrate(&self.pool, row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
        deleted: DeletedFilter,
    ) -> DomainResult<Option<Article>> {
        // several soft-deleted rows can share a slug; prefer the live one
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1{}
             ORDER BY (deleted_at IS NULL) DESC, id DESC LIMIT 1",
            deleted_condition(deleted)
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(hydrate(&self.pool, row).await?)),
            None => Ok(None),
        }
    }

    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Article>, Option<PageCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE TRUE"));

        if filter.deleted == DeletedFilter::Exclude {
            builder.push(" AND deleted_at IS NULL");
        }
        if let Some(language) = filter.language {
            builder.push(" AND language = ");
            builder.push_bind(language.as_str());
        }
        if let Some(cursor) = cursor {
            builder.push(" AND (created_at, id) < (");
            builder.push_bind(cursor.ts);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut articles = Vec::with_capacity(rows.len());
        for row in rows {
            articles.push(hydrate(&self.pool, row).await?);
        }

        let mut next_cursor = None;
        if articles.len() > limit as usize {
            articles.pop();
            if let Some(last) = articles.last() {
                next_cursor = Some(PageCursor::new(last.created_at, last.id.into()));
            }
        }

        Ok((articles, next_cursor))
    }
}
