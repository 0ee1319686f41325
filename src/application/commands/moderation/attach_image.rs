// src/application/commands/moderation/attach_image.rs
use super::ModerationService;
use crate::{
    application::{
        dto::{Actor, ImageDto, RequestMeta},
        error::ApplicationResult,
    },
    domain::article::NewImage,
};
use serde_json::json;

pub struct AttachImageCommand {
    pub article_id: i64,
    pub bytes: Vec<u8>,
    pub original_name: String,
    pub mime_type: String,
}

impl ModerationService {
    pub async fn attach_image(
        &self,
        actor: &Actor,
        meta: &RequestMeta,
        command: AttachImageCommand,
    ) -> ApplicationResult<ImageDto> {
        let article = self.load_live(command.article_id).await?;
        self.ensure_can_manage(actor, &article)?;

        let path = self
            .blob_store
            .put(&command.bytes, &command.original_name)
            .await?;

        let image = self
            .image_repo
            .insert(NewImage {
                article_id: article.id,
                path,
                original_name: command.original_name,
                mime_type: command.mime_type,
                created_at: self.clock.now(),
            })
            .await?;

        self.audit
            .record(
                actor,
                meta,
                "attach_image",
                "image",
                Some(image.id.into()),
                Some(json!({ "article_id": i64::from(article.id) })),
            )
            .await;

        Ok(image.into())
    }
}
