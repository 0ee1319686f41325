// src/application/commands/traffic.rs
use std::sync::Arc;

use tracing::warn;

use crate::domain::article::ArticleId;
use crate::domain::traffic::{NewTrafficLog, TrafficLogRepository};

pub struct RecordViewCommand {
    pub article_id: Option<i64>,
    pub viewer_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub user_id: Option<i64>,
}

/// Passive visit logging. Like audit writes, a failed insert must never
/// break the page view it describes.
pub struct TrafficLogService {
    repo: Arc<dyn TrafficLogRepository>,
}

impl TrafficLogService {
    pub fn new(repo: Arc<dyn TrafficLogRepository>) -> Self {
        Self { repo }
    }

    pub async fn record_view(&self, command: RecordViewCommand) {
        let view = NewTrafficLog {
            article_id: command
                .article_id
                .and_then(|id| ArticleId::new(id).ok()),
            viewer_ip: command.viewer_ip,
            user_agent: command.user_agent,
            referer: command.referer,
            user_id: command
                .user_id
                .and_then(|id| crate::domain::actor::ActorId::new(id).ok()),
        };

        if let Err(err) = self.repo.insert(view).await {
            warn!(error = %err, "traffic log write failed");
        }
    }
}
