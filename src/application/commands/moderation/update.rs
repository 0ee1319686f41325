// src/application/commands/moderation/update.rs
use super::{ModerationService, payload::ArticlePayload};
use crate::{
    application::{
        dto::{Actor, ArticleDto, RequestMeta},
        error::ApplicationResult,
    },
    domain::article::ArticleChangeSet,
};
use serde_json::json;

pub struct UpdateArticleCommand {
    pub id: i64,
    pub payload: ArticlePayload,
}

impl ModerationService {
    /// Full-field replacement: every stored field takes the command's value,
    /// so optionals the caller leaves out reset to NULL/false. The slug is
    /// stable across edits.
    pub async fn update_article(
        &self,
        actor: &Actor,
        meta: &RequestMeta,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load_live(command.id).await?;
        self.ensure_can_manage(actor, &article)?;

        let parts = command.payload.validated()?;
        let change = ArticleChangeSet {
            id: article.id,
            content: parts.content,
            classification: parts.classification,
            flags: parts.flags,
            placement: parts.placement,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(change).await?;

        self.audit
            .record(
                actor,
                meta,
                "update_article",
                "article",
                Some(updated.id.into()),
                Some(json!({ "slug": updated.slug.as_str() })),
            )
            .await;

        Ok(updated.into())
    }
}
