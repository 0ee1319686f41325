// src/domain/traffic/entity.rs
use crate::domain::actor::ActorId;
use crate::domain::article::ArticleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A page-view record. Read-side collaborator only; the moderation core
/// never consults it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficLog {
    pub id: i64,
    pub article_id: Option<i64>,
    pub viewer_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub user_id: Option<ActorId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewTrafficLog {
    pub article_id: Option<ArticleId>,
    pub viewer_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub user_id: Option<ActorId>,
}
