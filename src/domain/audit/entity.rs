// src/domain/audit/entity.rs
use crate::domain::actor::{ActorId, ActorRole};
use crate::domain::article::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One appended audit record. The admin/moderator partition is a tagged
/// variant (the `role` field); entries are never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: i64,
    pub actor_id: ActorId,
    pub role: ActorRole,
    pub action: String,
    pub target_type: String,
    pub target_id: Option<i64>,
    pub details: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAuditLog {
    pub actor_id: ActorId,
    pub role: ActorRole,
    pub action: String,
    pub target_type: String,
    pub target_id: Option<i64>,
    pub details: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Running per-moderator tally of created articles, bucketed by language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedCounters {
    pub created_articles_en: i64,
    pub created_articles_ur: i64,
    pub created_articles_multi: i64,
}

impl CreatedCounters {
    pub fn bucket(&self, language: Language) -> i64 {
        match language {
            Language::En => self.created_articles_en,
            Language::Ur => self.created_articles_ur,
            Language::Multi => self.created_articles_multi,
        }
    }
}
