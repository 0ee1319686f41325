use crate::domain::article::entity::{Article, ArticleChangeSet, NewArticle};
use crate::domain::article::image::{Image, ImageId, NewImage};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, Language};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageCursor;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Soft-deleted rows are invisible by default; trash and moderation views
/// opt in explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletedFilter {
    #[default]
    Exclude,
    Include,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub language: Option<Language>,
    pub deleted: DeletedFilter,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Full-field replacement of a live article.
    async fn update(&self, change: ArticleChangeSet) -> DomainResult<Article>;
    async fn soft_delete(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<Article>;
    async fn restore(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<Article>;
    /// Irreversible removal; returns the cascaded images so the caller can
    /// drop their blobs.
    async fn hard_delete(&self, id: ArticleId) -> DomainResult<Vec<Image>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: ArticleId,
        deleted: DeletedFilter,
    ) -> DomainResult<Option<Article>>;

    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
        deleted: DeletedFilter,
    ) -> DomainResult<Option<Article>>;

    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Article>, Option<PageCursor>)>;

    /// Resolve a caller-supplied reference: numeric values are tried as an id
    /// first, anything else is a slug lookup.
    async fn resolve(
        &self,
        reference: &str,
        deleted: DeletedFilter,
    ) -> DomainResult<Option<Article>> {
        if let Ok(raw) = reference.parse::<i64>() {
            if let Ok(id) = ArticleId::new(raw) {
                return self.find_by_id(id, deleted).await;
            }
            return Ok(None);
        }
        let slug = ArticleSlug::new(reference)?;
        self.find_by_slug(&slug, deleted).await
    }
}

#[async_trait]
pub trait ImageRepository: Send + Sync {
    async fn insert(&self, image: NewImage) -> DomainResult<Image>;
    async fn find(&self, article_id: ArticleId, image_id: ImageId)
    -> DomainResult<Option<Image>>;
    async fn delete(&self, image_id: ImageId) -> DomainResult<Image>;
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Image>>;
}
