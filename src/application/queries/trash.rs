// src/application/queries/trash.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{Actor, CursorPage, TrashDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::ActorId,
        pagination::{PageCursor, normalize_limit},
        trash::TrashRepository,
    },
};

pub struct ListTrashByDeleterQuery {
    pub deleter_id: i64,
    pub limit: u32,
    pub cursor: Option<String>,
}

pub struct TrashQueryService {
    repo: Arc<dyn TrashRepository>,
}

impl TrashQueryService {
    pub fn new(repo: Arc<dyn TrashRepository>) -> Self {
        Self { repo }
    }

    /// Admins may inspect anyone's trash; moderators only their own.
    pub async fn list_by_deleter(
        &self,
        actor: &Actor,
        query: ListTrashByDeleterQuery,
    ) -> ApplicationResult<CursorPage<TrashDto>> {
        let deleter = ActorId::new(query.deleter_id)?;
        if !actor.is_admin() && actor.id != deleter {
            return Err(ApplicationError::forbidden(
                "moderators may only view their own trash",
            ));
        }

        let cursor = query
            .cursor
            .as_deref()
            .map(PageCursor::decode)
            .transpose()?;
        let (items, next) = self
            .repo
            .list_by_deleter(deleter, normalize_limit(query.limit), cursor)
            .await?;

        let dtos: Vec<TrashDto> = items.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(dtos, next.map(|c| c.encode())))
    }
}
