// src/application/commands/moderation/audit.rs
use std::sync::Arc;

use tracing::warn;

use crate::application::dto::{Actor, RequestMeta};
use crate::domain::actor::ActorRole;
use crate::domain::article::Language;
use crate::domain::audit::{AuditLogRepository, NewAuditLog};

/// Best-effort audit writer. Entries are attempted synchronously after the
/// content mutation commits; a failed write is reported through tracing and
/// never rolls back or fails the enclosing operation.
pub struct AuditRecorder {
    repo: Arc<dyn AuditLogRepository>,
}

impl AuditRecorder {
    pub fn new(repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { repo }
    }

    pub async fn record(
        &self,
        actor: &Actor,
        meta: &RequestMeta,
        action: &str,
        target_type: &str,
        target_id: Option<i64>,
        details: Option<serde_json::Value>,
    ) {
        let entry = NewAuditLog {
            actor_id: actor.id,
            role: actor.role,
            action: action.to_owned(),
            target_type: target_type.to_owned(),
            target_id,
            details,
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
        };

        if let Err(err) = self.repo.insert(entry).await {
            warn!(error = %err, action, target_type, "audit log write failed");
        }
    }

    /// Bump the moderator's per-language creation tally. Admin creations are
    /// not tallied.
    pub async fn note_article_created(&self, actor: &Actor, language: Language) {
        if actor.role != ActorRole::Moderator {
            return;
        }
        if let Err(err) = self.repo.bump_created_counter(actor.id, language).await {
            warn!(error = %err, moderator = %actor.id, "creation counter bump failed");
        }
    }
}
