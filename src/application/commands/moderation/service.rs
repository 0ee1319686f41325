// src/application/commands/moderation/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::moderation::audit::AuditRecorder,
        dto::Actor,
        error::{ApplicationError, ApplicationResult},
        ports::{blob::BlobStore, time::Clock},
    },
    domain::{
        article::{
            Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, DeletedFilter,
            ImageRepository, services::ArticleSlugService,
            specifications::CanManageArticleSpec,
        },
        trash::TrashRepository,
    },
};

/// Orchestrates every content mutation: permission check, store mutation,
/// trash snapshot where applicable, then a best-effort audit entry.
pub struct ModerationService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) image_repo: Arc<dyn ImageRepository>,
    pub(super) trash_repo: Arc<dyn TrashRepository>,
    pub(super) blob_store: Arc<dyn BlobStore>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) audit: AuditRecorder,
    pub(super) clock: Arc<dyn Clock>,
}

impl ModerationService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        image_repo: Arc<dyn ImageRepository>,
        trash_repo: Arc<dyn TrashRepository>,
        blob_store: Arc<dyn BlobStore>,
        slug_service: Arc<ArticleSlugService>,
        audit: AuditRecorder,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            image_repo,
            trash_repo,
            blob_store,
            slug_service,
            audit,
            clock,
        }
    }

    pub(super) async fn load_live(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id, DeletedFilter::Exclude)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub(super) fn ensure_can_manage(
        &self,
        actor: &Actor,
        article: &Article,
    ) -> ApplicationResult<()> {
        let spec = CanManageArticleSpec::new(actor.role, actor.id, article);
        if spec.is_satisfied() {
            Ok(())
        } else {
            Err(ApplicationError::forbidden(
                "moderators may only manage their own articles",
            ))
        }
    }

    pub(super) fn ensure_admin(&self, actor: &Actor, operation: &str) -> ApplicationResult<()> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(ApplicationError::forbidden(format!(
                "{operation} requires the admin role"
            )))
        }
    }
}
