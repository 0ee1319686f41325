// src/domain/article/services.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::{ArticleReadRepository, DeletedFilter};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::{DomainError, DomainResult};

/// Upper bound on disambiguation candidates before giving up with a slug
/// conflict. Concurrent inserts are still caught by the storage-level unique
/// constraint; the workflow retries once on that path.
const MAX_SLUG_ATTEMPTS: u64 = 64;

/// Domain service responsible for producing slugs that are unique among
/// non-deleted articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn generate_unique_slug(
        &self,
        title: &str,
        now: DateTime<Utc>,
        ignore_id: Option<ArticleId>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title);
        // headlines without latin transliteration can slugify to nothing
        let base_slug = if base.is_empty() {
            format!("article-{}", now.timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate.clone())?;
            match self
                .read_repo
                .find_by_slug(&slug, DeletedFilter::Exclude)
                .await?
            {
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => {
                    return Ok(slug);
                }
                Some(_) if counter >= MAX_SLUG_ATTEMPTS => {
                    return Err(DomainError::SlugConflict(format!(
                        "could not disambiguate slug '{base_slug}' within {MAX_SLUG_ATTEMPTS} attempts"
                    )));
                }
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
