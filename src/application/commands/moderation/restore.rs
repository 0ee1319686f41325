// src/application/commands/moderation/restore.rs
use super::ModerationService;
use crate::{
    application::{
        dto::{Actor, ArticleDto, RequestMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, DeletedFilter},
};
use serde_json::json;

pub struct RestoreArticleCommand {
    pub id: i64,
}

impl ModerationService {
    /// Clears the deletion marker. The trash snapshot is kept as a
    /// historical record.
    pub async fn restore_article(
        &self,
        actor: &Actor,
        meta: &RequestMeta,
        command: RestoreArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id, DeletedFilter::Include)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        self.ensure_can_manage(actor, &article)?;

        let restored = self.write_repo.restore(id, self.clock.now()).await?;

        self.audit
            .record(
                actor,
                meta,
                "restore_article",
                "article",
                Some(restored.id.into()),
                Some(json!({ "slug": restored.slug.as_str() })),
            )
            .await;

        Ok(restored.into())
    }
}
