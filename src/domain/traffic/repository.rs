use crate::domain::errors::DomainResult;
use crate::domain::traffic::entity::NewTrafficLog;
use async_trait::async_trait;

#[async_trait]
pub trait TrafficLogRepository: Send + Sync {
    async fn insert(&self, view: NewTrafficLog) -> DomainResult<()>;
}
