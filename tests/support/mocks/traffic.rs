// tests/support/mocks/traffic.rs
use std::sync::Mutex;

use async_trait::async_trait;

use akhbar_core::domain::errors::DomainResult;
use akhbar_core::domain::traffic::{NewTrafficLog, TrafficLogRepository};

#[derive(Default)]
pub struct InMemoryTrafficRepo {
    views: Mutex<Vec<NewTrafficLog>>,
}

impl InMemoryTrafficRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<NewTrafficLog> {
        self.views.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrafficLogRepository for InMemoryTrafficRepo {
    async fn insert(&self, view: NewTrafficLog) -> DomainResult<()> {
        self.views.lock().unwrap().push(view);
        Ok(())
    }
}
