// src/domain/article/localization.rs
use crate::domain::article::entity::ArticleContent;
use crate::domain::article::value_objects::Language;

/// The platform's sole bilingual-rendering rule, implemented once: when Urdu
/// is requested, each field falls back to its English counterpart if the
/// Urdu variant is empty; every other requested language gets the English
/// fields unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedView {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
}

fn pick(urdu: &Option<String>, base: &Option<String>) -> Option<String> {
    match urdu.as_deref() {
        Some(s) if !s.trim().is_empty() => urdu.clone(),
        _ => base.clone(),
    }
}

impl LocalizedView {
    pub fn of(content: &ArticleContent, requested: Language) -> Self {
        match requested {
            Language::Ur => Self {
                title: pick(&content.title_ur, &content.title),
                summary: pick(&content.summary_ur, &content.summary),
                content: pick(&content.body_ur, &content.body),
            },
            _ => Self {
                title: content.title.clone(),
                summary: content.summary.clone(),
                content: content.body.clone(),
            },
        }
    }
}
