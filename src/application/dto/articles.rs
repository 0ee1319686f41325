use crate::domain::article::{Article, Image, Language, LocalizedView};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageDto {
    pub id: i64,
    pub article_id: i64,
    pub path: String,
    pub original_name: String,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<Image> for ImageDto {
    fn from(image: Image) -> Self {
        Self {
            id: image.id.into(),
            article_id: image.article_id.into(),
            path: image.path,
            original_name: image.original_name,
            mime_type: image.mime_type,
            created_at: image.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub slug: String,
    pub language: Language,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub title_ur: Option<String>,
    pub summary_ur: Option<String>,
    pub body_ur: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub article_type: Option<String>,
    pub tags: Vec<String>,
    pub author_id: i64,
    pub is_featured: bool,
    pub is_trending: bool,
    pub is_breaking: bool,
    pub is_top_story: bool,
    pub show_in_section: bool,
    pub section_priority: i32,
    pub images: Vec<ImageDto>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            slug: article.slug.into_inner(),
            language: article.content.language,
            title: article.content.title,
            summary: article.content.summary,
            body: article.content.body,
            title_ur: article.content.title_ur,
            summary_ur: article.content.summary_ur,
            body_ur: article.content.body_ur,
            category: article.classification.category,
            region: article.classification.region,
            country: article.classification.country,
            article_type: article.classification.article_type,
            tags: article.classification.tags,
            author_id: article.author_id.into(),
            is_featured: article.flags.is_featured,
            is_trending: article.flags.is_trending,
            is_breaking: article.flags.is_breaking,
            is_top_story: article.flags.is_top_story,
            show_in_section: article.placement.show_in_section,
            section_priority: article.placement.section_priority,
            images: article.images.into_iter().map(Into::into).collect(),
            deleted_at: article.deleted_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Presentation-ready view of one article in the requested language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedArticleDto {
    pub id: i64,
    pub slug: String,
    pub language: Language,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
}

impl LocalizedArticleDto {
    pub fn of(article: &Article, requested: Language) -> Self {
        let view = LocalizedView::of(&article.content, requested);
        Self {
            id: article.id.into(),
            slug: article.slug.as_str().to_owned(),
            language: requested,
            title: view.title,
            summary: view.summary,
            content: view.content,
        }
    }
}
