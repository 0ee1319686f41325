// src/application/commands/moderation/create.rs
use super::{ModerationService, payload::ArticlePayload};
use crate::{
    application::{
        dto::{Actor, ArticleDto, RequestMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleSlug, NewArticle},
        errors::DomainError,
    },
};
use serde_json::json;

pub struct CreateArticleCommand {
    pub payload: ArticlePayload,
    /// Explicit slug; derived from the headline when absent.
    pub slug: Option<String>,
}

impl ModerationService {
    pub async fn create_article(
        &self,
        actor: &Actor,
        meta: &RequestMeta,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        // both admins and moderators may create articles
        let parts = command.payload.validated()?;
        let now = self.clock.now();

        let headline = parts
            .content
            .headline()
            .ok_or_else(|| ApplicationError::validation("article needs a title"))?
            .to_owned();

        let explicit_slug = command.slug.is_some();
        let slug = match command.slug {
            Some(slug) => ArticleSlug::new(slug)?,
            None => {
                self.slug_service
                    .generate_unique_slug(&headline, now, None)
                    .await?
            }
        };

        let new_article = NewArticle {
            slug,
            author_id: actor.id,
            content: parts.content,
            classification: parts.classification,
            flags: parts.flags,
            placement: parts.placement,
            created_at: now,
            updated_at: now,
        };

        // concurrent creates can race past the read-side check; on a
        // storage-level slug conflict a derived slug is disambiguated once
        // more and retried. An explicit slug is the caller's choice, so its
        // conflict surfaces instead of silently publishing elsewhere.
        let created = match self.write_repo.insert(new_article.clone()).await {
            Ok(article) => article,
            Err(DomainError::SlugConflict(_)) if !explicit_slug => {
                let slug = self
                    .slug_service
                    .generate_unique_slug(&headline, now, None)
                    .await?;
                let retry = NewArticle {
                    slug,
                    ..new_article
                };
                self.write_repo.insert(retry).await?
            }
            Err(err) => return Err(err.into()),
        };

        let language = created.content.language;
        self.audit
            .record(
                actor,
                meta,
                "create_article",
                "article",
                Some(created.id.into()),
                Some(json!({
                    "slug": created.slug.as_str(),
                    "language": language.as_str(),
                })),
            )
            .await;
        self.audit.note_article_created(actor, language).await;

        Ok(created.into())
    }
}
