// tests/support/mocks/audit.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use akhbar_core::domain::actor::ActorId;
use akhbar_core::domain::article::Language;
use akhbar_core::domain::audit::{AuditLog, AuditLogRepository, CreatedCounters, NewAuditLog};
use akhbar_core::domain::errors::{DomainError, DomainResult};
use akhbar_core::domain::pagination::PageCursor;

#[derive(Default)]
pub struct InMemoryAuditRepo {
    entries: Mutex<Vec<AuditLog>>,
    counters: Mutex<HashMap<i64, CreatedCounters>>,
    fail_writes: AtomicBool,
}

impl InMemoryAuditRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, to prove audit failures never
    /// surface to workflow callers.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn entries(&self) -> Vec<AuditLog> {
        self.entries.lock().unwrap().clone()
    }

    pub fn entries_for_action(&self, action: &str) -> Vec<AuditLog> {
        self.entries()
            .into_iter()
            .filter(|e| e.action == action)
            .collect()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditRepo {
    async fn insert(&self, entry: NewAuditLog) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("audit insert failed".into()));
        }

        let mut entries = self.entries.lock().unwrap();
        let id = entries.len() as i64 + 1;
        entries.push(AuditLog {
            id,
            actor_id: entry.actor_id,
            role: entry.role,
            action: entry.action,
            target_type: entry.target_type,
            target_id: entry.target_id,
            details: entry.details,
            ip_address: entry.ip_address,
            user_agent: entry.user_agent,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn bump_created_counter(
        &self,
        moderator: ActorId,
        language: Language,
    ) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("counter bump failed".into()));
        }

        let mut counters = self.counters.lock().unwrap();
        let entry = counters.entry(moderator.into()).or_default();
        match language {
            Language::En => entry.created_articles_en += 1,
            Language::Ur => entry.created_articles_ur += 1,
            Language::Multi => entry.created_articles_multi += 1,
        }
        Ok(())
    }

    async fn created_counters(&self, moderator: ActorId) -> DomainResult<CreatedCounters> {
        let counters = self.counters.lock().unwrap();
        Ok(counters.get(&i64::from(moderator)).copied().unwrap_or_default())
    }

    async fn list_by_actor(
        &self,
        actor: ActorId,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<PageCursor>)> {
        let entries = self.entries.lock().unwrap();
        let matching = entries.iter().filter(|e| e.actor_id == actor).cloned().collect();
        drop(entries);
        Ok(paginate(matching, limit, cursor))
    }

    async fn list_by_target(
        &self,
        target_type: &str,
        target_id: i64,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<PageCursor>)> {
        let entries = self.entries.lock().unwrap();
        let matching = entries
            .iter()
            .filter(|e| e.target_type == target_type && e.target_id == Some(target_id))
            .cloned()
            .collect();
        drop(entries);
        Ok(paginate(matching, limit, cursor))
    }
}

fn paginate(
    mut matching: Vec<AuditLog>,
    limit: u32,
    cursor: Option<PageCursor>,
) -> (Vec<AuditLog>, Option<PageCursor>) {
    matching.retain(|e| cursor.is_none_or(|c| (e.created_at, e.id) < (c.ts, c.id)));
    matching.sort_by_key(|e| (std::cmp::Reverse(e.created_at), std::cmp::Reverse(e.id)));

    let limit = limit as usize;
    let mut next_cursor = None;
    if matching.len() > limit {
        matching.truncate(limit);
        if let Some(last) = matching.last() {
            next_cursor = Some(PageCursor::new(last.created_at, last.id));
        }
    }
    (matching, next_cursor)
}
