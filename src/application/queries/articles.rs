// src/application/queries/articles.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, CursorPage, LocalizedArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListFilter, ArticleReadRepository, DeletedFilter, Language},
        pagination::{PageCursor, normalize_limit},
    },
};

pub struct GetArticleQuery {
    /// Numeric id or slug.
    pub reference: String,
    pub include_deleted: bool,
}

pub struct GetLocalizedArticleQuery {
    pub reference: String,
    pub language: String,
}

pub struct ListArticlesQuery {
    pub language: Option<String>,
    pub include_deleted: bool,
    pub limit: u32,
    pub cursor: Option<String>,
}

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    fn deleted_filter(include_deleted: bool) -> DeletedFilter {
        if include_deleted {
            DeletedFilter::Include
        } else {
            DeletedFilter::Exclude
        }
    }

    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let article = self
            .read_repo
            .resolve(&query.reference, Self::deleted_filter(query.include_deleted))
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }

    pub async fn get_localized(
        &self,
        query: GetLocalizedArticleQuery,
    ) -> ApplicationResult<LocalizedArticleDto> {
        let requested = Language::parse(&query.language)?;
        let article = self
            .read_repo
            .resolve(&query.reference, DeletedFilter::Exclude)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(LocalizedArticleDto::of(&article, requested))
    }

    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let filter = ArticleListFilter {
            language: query.language.as_deref().map(Language::parse).transpose()?,
            deleted: Self::deleted_filter(query.include_deleted),
        };
        let cursor = query
            .cursor
            .as_deref()
            .map(PageCursor::decode)
            .transpose()?;

        let (articles, next) = self
            .read_repo
            .list_page(&filter, normalize_limit(query.limit), cursor)
            .await?;

        let items: Vec<ArticleDto> = articles.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(items, next.map(|c| c.encode())))
    }
}
