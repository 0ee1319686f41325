// tests/support/mod.rs
#![allow(dead_code)]

pub mod mocks;

use std::sync::Arc;

use akhbar_core::application::commands::moderation::ArticlePayload;
use akhbar_core::application::dto::{Actor, RequestMeta};
use akhbar_core::application::ports::{blob::BlobStore, time::Clock};
use akhbar_core::application::services::ApplicationServices;
use akhbar_core::domain::actor::{ActorId, ActorRole};
use akhbar_core::domain::article::{ArticleReadRepository, ArticleWriteRepository, ImageRepository};
use akhbar_core::domain::audit::AuditLogRepository;
use akhbar_core::domain::traffic::TrafficLogRepository;
use akhbar_core::domain::trash::TrashRepository;
use akhbar_core::infrastructure::util::DefaultSlugGenerator;

use mocks::{
    FixedClock, InMemoryAuditRepo, InMemoryBlobStore, InMemoryContentStore, InMemoryTrafficRepo,
    InMemoryTrashRepo,
};

/// Full application wiring over in-memory stores. Mirrors what an embedding
/// server does at startup, with the Postgres repositories swapped out.
pub struct Harness {
    pub services: ApplicationServices,
    pub content: Arc<InMemoryContentStore>,
    pub trash: Arc<InMemoryTrashRepo>,
    pub audit: Arc<InMemoryAuditRepo>,
    pub blob: Arc<InMemoryBlobStore>,
    pub traffic: Arc<InMemoryTrafficRepo>,
    pub clock: Arc<FixedClock>,
}

impl Harness {
    pub fn new() -> Self {
        let content = Arc::new(InMemoryContentStore::new());
        let trash = Arc::new(InMemoryTrashRepo::new());
        let audit = Arc::new(InMemoryAuditRepo::new());
        let blob = Arc::new(InMemoryBlobStore::new());
        let traffic = Arc::new(InMemoryTrafficRepo::new());
        let clock = Arc::new(FixedClock::new());

        let write_repo: Arc<dyn ArticleWriteRepository> = content.clone();
        let read_repo: Arc<dyn ArticleReadRepository> = content.clone();
        let image_repo: Arc<dyn ImageRepository> = content.clone();
        let trash_repo: Arc<dyn TrashRepository> = trash.clone();
        let audit_repo: Arc<dyn AuditLogRepository> = audit.clone();
        let traffic_repo: Arc<dyn TrafficLogRepository> = traffic.clone();
        let blob_store: Arc<dyn BlobStore> = blob.clone();
        let clock_port: Arc<dyn Clock> = clock.clone();

        let services = ApplicationServices::new(
            write_repo,
            read_repo,
            image_repo,
            trash_repo,
            audit_repo,
            traffic_repo,
            blob_store,
            clock_port,
            Arc::new(DefaultSlugGenerator),
        );

        Self {
            services,
            content,
            trash,
            audit,
            blob,
            traffic,
            clock,
        }
    }
}

pub fn admin(id: i64) -> Actor {
    Actor::new(ActorId::new(id).unwrap(), ActorRole::Admin)
}

pub fn moderator(id: i64) -> Actor {
    Actor::new(ActorId::new(id).unwrap(), ActorRole::Moderator)
}

pub fn meta() -> RequestMeta {
    RequestMeta {
        ip_address: Some("203.0.113.9".into()),
        user_agent: Some("integration-test".into()),
    }
}

pub fn english_payload(title: &str) -> ArticlePayload {
    ArticlePayload {
        language: "en".into(),
        title: Some(title.into()),
        summary: Some("Short summary.".into()),
        body: Some("Full story text.".into()),
        category: Some("national".into()),
        tags: vec!["lahore".into()],
        ..ArticlePayload::default()
    }
}

pub fn urdu_payload(title_ur: &str) -> ArticlePayload {
    ArticlePayload {
        language: "ur".into(),
        title_ur: Some(title_ur.into()),
        summary_ur: Some("مختصر خلاصہ".into()),
        body_ur: Some("مکمل خبر کا متن".into()),
        ..ArticlePayload::default()
    }
}

pub fn multi_payload(title: &str, title_ur: &str) -> ArticlePayload {
    ArticlePayload {
        language: "multi".into(),
        title: Some(title.into()),
        body: Some("Full story text.".into()),
        title_ur: Some(title_ur.into()),
        body_ur: Some("مکمل خبر کا متن".into()),
        ..ArticlePayload::default()
    }
}
