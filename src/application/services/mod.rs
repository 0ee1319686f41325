// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            moderation::{AuditRecorder, ModerationService},
            traffic::TrafficLogService,
        },
        ports::{blob::BlobStore, time::Clock, util::SlugGenerator},
        queries::{ArticleQueryService, AuditQueryService, TrashQueryService},
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, ImageRepository,
            services::ArticleSlugService,
        },
        audit::AuditLogRepository,
        traffic::TrafficLogRepository,
        trash::TrashRepository,
    },
};

/// Wires the repositories and ports into the service objects an embedding
/// server hands to its handlers.
pub struct ApplicationServices {
    pub moderation: Arc<ModerationService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub trash_queries: Arc<TrashQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
    pub traffic: Arc<TrafficLogService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        image_repo: Arc<dyn ImageRepository>,
        trash_repo: Arc<dyn TrashRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        traffic_repo: Arc<dyn TrafficLogRepository>,
        blob_store: Arc<dyn BlobStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        let moderation = Arc::new(ModerationService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&image_repo),
            Arc::clone(&trash_repo),
            Arc::clone(&blob_store),
            slug_service,
            AuditRecorder::new(Arc::clone(&audit_repo)),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let trash_queries = Arc::new(TrashQueryService::new(Arc::clone(&trash_repo)));
        let audit_queries = Arc::new(AuditQueryService::new(Arc::clone(&audit_repo)));
        let traffic = Arc::new(TrafficLogService::new(Arc::clone(&traffic_repo)));

        Self {
            moderation,
            article_queries,
            trash_queries,
            audit_queries,
            traffic,
        }
    }
}
