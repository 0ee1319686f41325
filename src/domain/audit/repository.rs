use crate::domain::actor::ActorId;
use crate::domain::article::Language;
use crate::domain::audit::entity::{AuditLog, CreatedCounters, NewAuditLog};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageCursor;
use async_trait::async_trait;

#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn insert(&self, entry: NewAuditLog) -> DomainResult<()>;

    /// Atomic read-increment-write on the moderator's aggregate row.
    async fn bump_created_counter(&self, moderator: ActorId, language: Language)
    -> DomainResult<()>;

    async fn created_counters(&self, moderator: ActorId) -> DomainResult<CreatedCounters>;

    async fn list_by_actor(
        &self,
        actor: ActorId,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<PageCursor>)>;

    async fn list_by_target(
        &self,
        target_type: &str,
        target_id: i64,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<PageCursor>)>;
}
