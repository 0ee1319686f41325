// tests/support/mocks/content.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use akhbar_core::domain::article::{
    Article, ArticleChangeSet, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSlug,
    ArticleWriteRepository, DeletedFilter, Image, ImageId, ImageRepository, NewArticle, NewImage,
};
use akhbar_core::domain::errors::{DomainError, DomainResult};
use akhbar_core::domain::pagination::PageCursor;

/// In-memory stand-in for the Postgres content store. Mirrors the semantics
/// the real repositories get from the schema: slug uniqueness among live
/// rows, full-field replace on update, soft-delete filtering.
#[derive(Default)]
pub struct InMemoryContentStore {
    articles: Mutex<HashMap<i64, Article>>,
    images: Mutex<HashMap<i64, Image>>,
    next_article_id: Mutex<i64>,
    next_image_id: Mutex<i64>,
    race_next_insert: AtomicBool,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a concurrent create racing past the read-side uniqueness
    /// check: the next insert stores a rival article under the attempted
    /// slug and reports a storage-level slug conflict.
    pub fn race_next_insert(&self) {
        self.race_next_insert.store(true, Ordering::SeqCst);
    }

    fn next_article_id(&self) -> i64 {
        let mut guard = self.next_article_id.lock().unwrap();
        *guard += 1;
        *guard
    }

    fn next_image_id(&self) -> i64 {
        let mut guard = self.next_image_id.lock().unwrap();
        *guard += 1;
        *guard
    }

    fn assemble(&self, mut article: Article) -> Article {
        let images = self.images.lock().unwrap();
        let mut owned: Vec<Image> = images
            .values()
            .filter(|img| img.article_id == article.id)
            .cloned()
            .collect();
        owned.sort_by_key(|img| i64::from(img.id));
        article.images = owned;
        article
    }

    fn live_slug_taken(&self, slug: &ArticleSlug, ignore: Option<ArticleId>) -> bool {
        let articles = self.articles.lock().unwrap();
        articles.values().any(|a| {
            a.deleted_at.is_none() && a.slug == *slug && Some(a.id) != ignore
        })
    }

    pub fn raw_article(&self, id: i64) -> Option<Article> {
        let articles = self.articles.lock().unwrap();
        articles.get(&id).cloned().map(|a| self.assemble(a))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryContentStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        if self.live_slug_taken(&article.slug, None) {
            return Err(DomainError::SlugConflict(
                "slug already in use by a live article".into(),
            ));
        }

        let racing = self.race_next_insert.swap(false, Ordering::SeqCst);

        let id = ArticleId::new(self.next_article_id())?;
        let stored = Article {
            id,
            slug: article.slug,
            author_id: article.author_id,
            content: article.content,
            classification: article.classification,
            flags: article.flags,
            placement: article.placement,
            images: vec![],
            deleted_at: None,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };

        self.articles
            .lock()
            .unwrap()
            .insert(id.into(), stored.clone());

        if racing {
            // the rival won the slug; this insert loses
            return Err(DomainError::SlugConflict(
                "slug already in use by a live article".into(),
            ));
        }
        Ok(stored)
    }

    async fn update(&self, change: ArticleChangeSet) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(change.id))
            .filter(|a| a.deleted_at.is_none())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        article.content = change.content;
        article.classification = change.classification;
        article.flags = change.flags;
        article.placement = change.placement;
        article.updated_at = change.updated_at;
        let updated = article.clone();
        drop(articles);
        Ok(self.assemble(updated))
    }

    async fn soft_delete(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(id))
            .filter(|a| a.deleted_at.is_none())
            .ok_or_else(|| {
                DomainError::NotFound("article not found or already deleted".into())
            })?;

        article.deleted_at = Some(now);
        article.updated_at = now;
        let deleted = article.clone();
        drop(articles);
        Ok(self.assemble(deleted))
    }

    async fn restore(&self, id: ArticleId, now: DateTime<Utc>) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(id))
            .filter(|a| a.deleted_at.is_some())
            .ok_or_else(|| DomainError::NotFound("article is not deleted".into()))?;

        article.deleted_at = None;
        article.updated_at = now;
        let restored = article.clone();
        drop(articles);
        Ok(self.assemble(restored))
    }

    async fn hard_delete(&self, id: ArticleId) -> DomainResult<Vec<Image>> {
        let mut articles = self.articles.lock().unwrap();
        articles
            .remove(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        drop(articles);

        let mut images = self.images.lock().unwrap();
        let removed: Vec<Image> = images
            .values()
            .filter(|img| img.article_id == id)
            .cloned()
            .collect();
        for image in &removed {
            images.remove(&i64::from(image.id));
        }
        Ok(removed)
    }
}

fn passes(article: &Article, filter: DeletedFilter) -> bool {
    filter == DeletedFilter::Include || article.deleted_at.is_none()
}

#[async_trait]
impl ArticleReadRepository for InMemoryContentStore {
    async fn find_by_id(
        &self,
        id: ArticleId,
        deleted: DeletedFilter,
    ) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        let found = articles
            .get(&i64::from(id))
            .filter(|a| passes(a, deleted))
            .cloned();
        drop(articles);
        Ok(found.map(|a| self.assemble(a)))
    }

    async fn find_by_slug(
        &self,
        slug: &ArticleSlug,
        deleted: DeletedFilter,
    ) -> DomainResult<Option<Article>> {
        let articles = self.articles.lock().unwrap();
        let mut candidates: Vec<Article> = articles
            .values()
            .filter(|a| a.slug == *slug && passes(a, deleted))
            .cloned()
            .collect();
        drop(articles);
        // prefer the live row when deleted rows share the slug
        candidates.sort_by_key(|a| (a.deleted_at.is_some(), -i64::from(a.id)));
        Ok(candidates.into_iter().next().map(|a| self.assemble(a)))
    }

    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Article>, Option<PageCursor>)> {
        let articles = self.articles.lock().unwrap();
        let mut matching: Vec<Article> = articles
            .values()
            .filter(|a| passes(a, filter.deleted))
            .filter(|a| {
                filter
                    .language
                    .is_none_or(|lang| a.content.language == lang)
            })
            .filter(|a| {
                cursor.is_none_or(|c| (a.created_at, i64::from(a.id)) < (c.ts, c.id))
            })
            .cloned()
            .collect();
        drop(articles);

        matching.sort_by_key(|a| (std::cmp::Reverse(a.created_at), std::cmp::Reverse(i64::from(a.id))));

        let limit = limit as usize;
        let mut next_cursor = None;
        if matching.len() > limit {
            matching.truncate(limit);
            if let Some(last) = matching.last() {
                next_cursor = Some(PageCursor::new(last.created_at, last.id.into()));
            }
        }

        let items = matching.into_iter().map(|a| self.assemble(a)).collect();
        Ok((items, next_cursor))
    }
}

#[async_trait]
impl ImageRepository for InMemoryContentStore {
    async fn insert(&self, image: NewImage) -> DomainResult<Image> {
        let id = ImageId::new(self.next_image_id())?;
        let stored = Image {
            id,
            article_id: image.article_id,
            path: image.path,
            original_name: image.original_name,
            mime_type: image.mime_type,
            created_at: image.created_at,
        };
        self.images.lock().unwrap().insert(id.into(), stored.clone());
        Ok(stored)
    }

    async fn find(
        &self,
        article_id: ArticleId,
        image_id: ImageId,
    ) -> DomainResult<Option<Image>> {
        let images = self.images.lock().unwrap();
        Ok(images
            .get(&i64::from(image_id))
            .filter(|img| img.article_id == article_id)
            .cloned())
    }

    async fn delete(&self, image_id: ImageId) -> DomainResult<Image> {
        let mut images = self.images.lock().unwrap();
        images
            .remove(&i64::from(image_id))
            .ok_or_else(|| DomainError::NotFound("image not found".into()))
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Image>> {
        let images = self.images.lock().unwrap();
        let mut owned: Vec<Image> = images
            .values()
            .filter(|img| img.article_id == article_id)
            .cloned()
            .collect();
        owned.sort_by_key(|img| i64::from(img.id));
        Ok(owned)
    }
}
