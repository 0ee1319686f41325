// src/application/queries/audit.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{Actor, AuditLogDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        actor::ActorId,
        audit::{AuditLogRepository, CreatedCounters},
        pagination::{PageCursor, normalize_limit},
    },
};

pub struct ListAuditByActorQuery {
    pub actor_id: i64,
    pub limit: u32,
    pub cursor: Option<String>,
}

pub struct ListAuditByTargetQuery {
    pub target_type: String,
    pub target_id: i64,
    pub limit: u32,
    pub cursor: Option<String>,
}

pub struct AuditQueryService {
    repo: Arc<dyn AuditLogRepository>,
}

impl AuditQueryService {
    pub fn new(repo: Arc<dyn AuditLogRepository>) -> Self {
        Self { repo }
    }

    fn decode_cursor(cursor: Option<&str>) -> ApplicationResult<Option<PageCursor>> {
        cursor
            .map(PageCursor::decode)
            .transpose()
            .map_err(Into::into)
    }

    /// Admins may read any actor's trail; moderators only their own.
    pub async fn list_by_actor(
        &self,
        actor: &Actor,
        query: ListAuditByActorQuery,
    ) -> ApplicationResult<CursorPage<AuditLogDto>> {
        let subject = ActorId::new(query.actor_id)?;
        if !actor.is_admin() && actor.id != subject {
            return Err(ApplicationError::forbidden(
                "moderators may only view their own audit trail",
            ));
        }

        let cursor = Self::decode_cursor(query.cursor.as_deref())?;
        let (items, next) = self
            .repo
            .list_by_actor(subject, normalize_limit(query.limit), cursor)
            .await?;
        let dtos: Vec<AuditLogDto> = items.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(dtos, next.map(|c| c.encode())))
    }

    /// Cross-actor view, admin only.
    pub async fn list_by_target(
        &self,
        actor: &Actor,
        query: ListAuditByTargetQuery,
    ) -> ApplicationResult<CursorPage<AuditLogDto>> {
        if !actor.is_admin() {
            return Err(ApplicationError::forbidden(
                "target audit history requires the admin role",
            ));
        }

        let cursor = Self::decode_cursor(query.cursor.as_deref())?;
        let (items, next) = self
            .repo
            .list_by_target(
                &query.target_type,
                query.target_id,
                normalize_limit(query.limit),
                cursor,
            )
            .await?;
        let dtos: Vec<AuditLogDto> = items.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(dtos, next.map(|c| c.encode())))
    }

    pub async fn created_counters(
        &self,
        actor: &Actor,
        moderator_id: i64,
    ) -> ApplicationResult<CreatedCounters> {
        let moderator = ActorId::new(moderator_id)?;
        if !actor.is_admin() && actor.id != moderator {
            return Err(ApplicationError::forbidden(
                "moderators may only view their own counters",
            ));
        }
        Ok(self.repo.created_counters(moderator).await?)
    }
}
