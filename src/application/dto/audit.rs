use crate::domain::actor::ActorRole;
use crate::domain::audit::AuditLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogDto {
    pub id: i64,
    pub actor_id: i64,
    pub role: ActorRole,
    pub action: String,
    pub target_type: String,
    pub target_id: Option<i64>,
    pub details: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<AuditLog> for AuditLogDto {
    fn from(entry: AuditLog) -> Self {
        Self {
            id: entry.id,
            actor_id: entry.actor_id.into(),
            role: entry.role,
            action: entry.action,
            target_type: entry.target_type,
            target_id: entry.target_id,
            details: entry.details,
            ip_address: entry.ip_address,
            user_agent: entry.user_agent,
            created_at: entry.created_at,
        }
    }
}
