// src/domain/article/entity.rs
use crate::domain::actor::ActorId;
use crate::domain::article::image::Image;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, Language};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-language content fields. Each field is independently nullable; which
/// of them must be present is decided by `language` and enforced at write
/// time through [`ArticleContent::validated`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleContent {
    pub language: Language,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub title_ur: Option<String>,
    pub summary_ur: Option<String>,
    pub body_ur: Option<String>,
}

fn filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl ArticleContent {
    /// Enforce per-language completeness: `en` needs English title+body,
    /// `ur` needs Urdu title+body, `multi` needs both pairs.
    pub fn validated(self) -> DomainResult<Self> {
        let english_ok = filled(&self.title) && filled(&self.body);
        let urdu_ok = filled(&self.title_ur) && filled(&self.body_ur);

        match self.language {
            Language::En if !english_ok => Err(DomainError::Validation(
                "english articles require title and body".into(),
            )),
            Language::Ur if !urdu_ok => Err(DomainError::Validation(
                "urdu articles require title_ur and body_ur".into(),
            )),
            Language::Multi if !(english_ok && urdu_ok) => Err(DomainError::Validation(
                "multi-language articles require both english and urdu title and body".into(),
            )),
            _ => Ok(self),
        }
    }

    /// Read-time check: both language variants are complete.
    pub fn is_multi_language(&self) -> bool {
        filled(&self.title) && filled(&self.body) && filled(&self.title_ur) && filled(&self.body_ur)
    }

    /// Best title for slug derivation: English first, then Urdu.
    pub fn headline(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.title_ur.as_deref().filter(|s| !s.trim().is_empty()))
    }
}

/// Editorial classification metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    pub category: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub article_type: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ArticleFlags {
    pub is_featured: bool,
    pub is_trending: bool,
    pub is_breaking: bool,
    pub is_top_story: bool,
}

/// Where and how prominently the article appears on section pages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Placement {
    pub show_in_section: bool,
    pub section_priority: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub author_id: ActorId,
    pub content: ArticleContent,
    pub classification: Classification,
    pub flags: ArticleFlags,
    pub placement: Placement,
    pub images: Vec<Image>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn owned_by(&self, actor: ActorId) -> bool {
        self.author_id == actor
    }

    pub fn soft_delete(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if self.is_deleted() {
            return Err(DomainError::NotFound("article already deleted".into()));
        }
        self.deleted_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    pub fn restore(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if !self.is_deleted() {
            return Err(DomainError::NotFound("article is not deleted".into()));
        }
        self.deleted_at = None;
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub author_id: ActorId,
    pub content: ArticleContent,
    pub classification: Classification,
    pub flags: ArticleFlags,
    pub placement: Placement,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full-field replacement for an edit. Absent optional fields reset to
/// NULL/false — edits are not partial merges.
#[derive(Debug, Clone)]
pub struct ArticleChangeSet {
    pub id: ArticleId,
    pub content: ArticleContent,
    pub classification: Classification,
    pub flags: ArticleFlags,
    pub placement: Placement,
    pub updated_at: DateTime<Utc>,
}
