// tests/support/mocks/trash.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use akhbar_core::domain::actor::ActorId;
use akhbar_core::domain::article::ArticleId;
use akhbar_core::domain::errors::{DomainError, DomainResult};
use akhbar_core::domain::pagination::PageCursor;
use akhbar_core::domain::trash::{NewTrash, Trash, TrashId, TrashRepository};

#[derive(Default)]
pub struct InMemoryTrashRepo {
    items: Mutex<Vec<Trash>>,
    next_id: Mutex<i64>,
    fail_next_archive: AtomicBool,
}

impl InMemoryTrashRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_archive(&self) {
        self.fail_next_archive.store(true, Ordering::SeqCst);
    }

    pub fn snapshots(&self) -> Vec<Trash> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrashRepository for InMemoryTrashRepo {
    async fn archive(&self, snapshot: NewTrash) -> DomainResult<Trash> {
        if self.fail_next_archive.swap(false, Ordering::SeqCst) {
            return Err(DomainError::Persistence("trash insert failed".into()));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let stored = Trash {
            id: TrashId::new(*next_id)?,
            article_id: snapshot.article_id.into(),
            payload: snapshot.payload,
            deleted_by: snapshot.deleted_by,
            deleted_at: snapshot.deleted_at,
        };
        drop(next_id);

        self.items.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn purge(&self, id: TrashId) -> DomainResult<()> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|t| t.id != id);
        if items.len() == before {
            return Err(DomainError::NotFound("trash record not found".into()));
        }
        Ok(())
    }

    async fn list_by_deleter(
        &self,
        actor: ActorId,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Trash>, Option<PageCursor>)> {
        let items = self.items.lock().unwrap();
        let mut matching: Vec<Trash> = items
            .iter()
            .filter(|t| t.deleted_by == actor)
            .filter(|t| cursor.is_none_or(|c| (t.deleted_at, t.id.0) < (c.ts, c.id)))
            .cloned()
            .collect();
        drop(items);

        matching.sort_by_key(|t| (std::cmp::Reverse(t.deleted_at), std::cmp::Reverse(t.id.0)));

        let limit = limit as usize;
        let mut next_cursor = None;
        if matching.len() > limit {
            matching.truncate(limit);
            if let Some(last) = matching.last() {
                next_cursor = Some(PageCursor::new(last.deleted_at, last.id.into()));
            }
        }

        Ok((matching, next_cursor))
    }

    async fn find_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Trash>> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|t| t.article_id == i64::from(article_id))
            .cloned()
            .collect())
    }
}
