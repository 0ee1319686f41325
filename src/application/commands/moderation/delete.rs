// src/application/commands/moderation/delete.rs
use super::ModerationService;
use crate::{
    application::{
        dto::{Actor, ArticleDto, RequestMeta},
        error::ApplicationResult,
    },
    domain::trash::NewTrash,
};
use serde_json::json;

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ModerationService {
    /// Soft-deletes the article and snapshots it into the trash. If the
    /// snapshot fails after the soft delete committed, the article stays
    /// deleted and the archive error surfaces to the caller; the missing
    /// snapshot is left as a queryable state for reconciliation. The audit
    /// entry is attempted either way, since the deletion itself committed.
    pub async fn delete_article(
        &self,
        actor: &Actor,
        meta: &RequestMeta,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_live(command.id).await?;
        self.ensure_can_manage(actor, &article)?;

        let now = self.clock.now();
        let deleted = self.write_repo.soft_delete(article.id, now).await?;

        let payload = serde_json::to_value(ArticleDto::from(deleted.clone()))
            .unwrap_or_else(|_| json!({ "id": i64::from(deleted.id) }));
        let archived = self
            .trash_repo
            .archive(NewTrash {
                article_id: deleted.id,
                payload,
                deleted_by: actor.id,
                deleted_at: now,
            })
            .await;

        self.audit
            .record(
                actor,
                meta,
                "delete_article",
                "article",
                Some(deleted.id.into()),
                Some(json!({ "slug": deleted.slug.as_str() })),
            )
            .await;

        archived?;
        Ok(())
    }
}
