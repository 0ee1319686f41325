// src/application/commands/moderation/remove_image.rs
use super::ModerationService;
use crate::{
    application::{
        dto::{Actor, RequestMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ImageId,
};
use serde_json::json;

pub struct RemoveImageCommand {
    pub article_id: i64,
    pub image_id: i64,
}

impl ModerationService {
    pub async fn remove_image(
        &self,
        actor: &Actor,
        meta: &RequestMeta,
        command: RemoveImageCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_live(command.article_id).await?;
        self.ensure_can_manage(actor, &article)?;

        let image_id = ImageId::new(command.image_id)?;
        self.image_repo
            .find(article.id, image_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("image not found"))?;

        let removed = self.image_repo.delete(image_id).await?;
        // the row is gone; audit the removal even if the blob delete fails
        let blob_result = self.blob_store.delete(&removed.path).await;

        self.audit
            .record(
                actor,
                meta,
                "remove_image",
                "image",
                Some(image_id.into()),
                Some(json!({
                    "article_id": i64::from(article.id),
                    "path": removed.path,
                })),
            )
            .await;

        blob_result
    }
}
