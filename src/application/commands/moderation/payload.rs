// src/application/commands/moderation/payload.rs
use crate::application::error::ApplicationResult;
use crate::domain::article::{ArticleContent, ArticleFlags, Classification, Language, Placement};

/// Raw field set for a create or edit. Edits use full-field replace
/// semantics, so both carry every field; anything left `None`/false here
/// ends up NULL/false on the stored row.
#[derive(Debug, Clone, Default)]
pub struct ArticlePayload {
    pub language: String,
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
    pub is_featured: bool,
    pub is_trending: bool,
    pub is_breaking: bool,
    pub is_top_story: bool,
    pub show_in_section: bool,
    pub section_priority: i32,
}

pub(super) struct ValidatedPayload {
    pub content: ArticleContent,
    pub classification: Classification,
    pub flags: ArticleFlags,
    pub placement: Placement,
}

impl ArticlePayload {
    pub(super) fn validated(self) -> ApplicationResult<ValidatedPayload> {
        let language = Language::parse(&self.language)?;
        let content = ArticleContent {
            language,
            title: self.title,
            summary: self.summary,
            body: self.body,
            title_ur: self.title_ur,
            summary_ur: self.summary_ur,
            body_ur: self.body_ur,
        }
        .validated()?;

        Ok(ValidatedPayload {
            content,
            classification: Classification {
                category: self.category,
                region: self.region,
                country: self.country,
                article_type: self.article_type,
                tags: self.tags,
            },
            flags: ArticleFlags {
                is_featured: self.is_featured,
                is_trending: self.is_trending,
                is_breaking: self.is_breaking,
                is_top_story: self.is_top_story,
            },
            placement: Placement {
                show_in_section: self.show_in_section,
                section_priority: self.section_priority,
            },
        })
    }
}
