// src/application/commands/moderation/purge.rs
use super::ModerationService;
use crate::{
    application::{
        dto::{Actor, RequestMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, DeletedFilter},
        trash::TrashId,
    },
};
use serde_json::json;

pub struct PurgeArticleCommand {
    pub id: i64,
}

pub struct PurgeTrashCommand {
    pub trash_id: i64,
}

impl ModerationService {
    /// Irreversibly removes the article row, its image rows, and their
    /// blobs. Admin only.
    pub async fn purge_article(
        &self,
        actor: &Actor,
        meta: &RequestMeta,
        command: PurgeArticleCommand,
    ) -> ApplicationResult<()> {
        self.ensure_admin(actor, "purge_article")?;

        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id, DeletedFilter::Include)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let images = self.write_repo.hard_delete(article.id).await?;
        // the rows are gone; attempt every blob and the audit entry before
        // surfacing a blob failure
        let mut blob_failure = None;
        for image in &images {
            if let Err(err) = self.blob_store.delete(&image.path).await {
                blob_failure.get_or_insert(err);
            }
        }

        self.audit
            .record(
                actor,
                meta,
                "purge_article",
                "article",
                Some(article.id.into()),
                Some(json!({
                    "slug": article.slug.as_str(),
                    "images_removed": images.len(),
                })),
            )
            .await;

        match blob_failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Removes a trash snapshot; live articles are untouched. Admin only.
    pub async fn purge_trash(
        &self,
        actor: &Actor,
        meta: &RequestMeta,
        command: PurgeTrashCommand,
    ) -> ApplicationResult<()> {
        self.ensure_admin(actor, "purge_trash")?;

        let trash_id = TrashId::new(command.trash_id)?;
        self.trash_repo.purge(trash_id).await?;

        self.audit
            .record(
                actor,
                meta,
                "purge_trash",
                "trash",
                Some(trash_id.into()),
                None,
            )
            .await;

        Ok(())
    }
}
