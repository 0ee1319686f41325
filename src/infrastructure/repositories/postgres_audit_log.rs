// src/infrastructure/repositories/postgres_audit_log.rs
use super::map_sqlx;
use crate::domain::actor::{ActorId, ActorRole};
use crate::domain::article::Language;
use crate::domain::audit::{AuditLog, AuditLogRepository, CreatedCounters, NewAuditLog};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageCursor;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const AUDIT_COLUMNS: &str =
    "id, actor_id, role, action, target_type, target_id, details, ip_address, user_agent, \
     created_at";

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: i64,
    actor_id: i64,
    role: String,
    action: String,
    target_type: String,
    target_id: Option<i64>,
    details: Option<serde_json::Value>,
    ip_address: Option<String>,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditLogRow> for AuditLog {
    type Error = DomainError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: row.id,
            actor_id: ActorId::new(row.actor_id)?,
            role: ActorRole::parse(&row.role)?,
            action: row.action,
            target_type: row.target_type,
            target_id: row.target_id,
            details: row.details,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            created_at: row.created_at,
        })
    }
}

fn page(
    rows: Vec<AuditLogRow>,
    limit: u32,
) -> DomainResult<(Vec<AuditLog>, Option<PageCursor>)> {
    let mut items = rows
        .into_iter()
        .map(AuditLog::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let mut next_cursor = None;
    if items.len() > limit as usize {
        items.pop();
        if let Some(last) = items.last() {
            next_cursor = Some(PageCursor::new(last.created_at, last.id));
        }
    }
    Ok((items, next_cursor))
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn insert(&self, entry: NewAuditLog) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO audit_logs (actor_id, role, action, target_type, target_id, details, \
             ip_address, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(i64::from(entry.actor_id))
        .bind(entry.role.as_str())
        .bind(&entry.action)
        .bind(&entry.target_type)
        .bind(entry.target_id)
        .bind(&entry.details)
        .bind(&entry.ip_address)
        .bind(&entry.user_agent)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn bump_created_counter(
        &self,
        moderator: ActorId,
        language: Language,
    ) -> DomainResult<()> {
        let sql = match language {
            Language::En => {
                "INSERT INTO moderator_stats (moderator_id, created_articles_en) VALUES ($1, 1)
                 ON CONFLICT (moderator_id)
                 DO UPDATE SET created_articles_en = moderator_stats.created_articles_en + 1"
            }
            Language::Ur => {
                "INSERT INTO moderator_stats (moderator_id, created_articles_ur) VALUES ($1, 1)
                 ON CONFLICT (moderator_id)
                 DO UPDATE SET created_articles_ur = moderator_stats.created_articles_ur + 1"
            }
            Language::Multi => {
                "INSERT INTO moderator_stats (moderator_id, created_articles_multi) VALUES ($1, 1)
                 ON CONFLICT (moderator_id)
                 DO UPDATE SET created_articles_multi = moderator_stats.created_articles_multi + 1"
            }
        };

        sqlx::query(sql)
            .bind(i64::from(moderator))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(())
    }

    async fn created_counters(&self, moderator: ActorId) -> DomainResult<CreatedCounters> {
        let row = sqlx::query_as::<_, (i64, i64, i64)>(
            "SELECT created_articles_en, created_articles_ur, created_articles_multi
             FROM moderator_stats WHERE moderator_id = $1",
        )
        .bind(i64::from(moderator))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row
            .map(|(en, ur, multi)| CreatedCounters {
                created_articles_en: en,
                created_articles_ur: ur,
                created_articles_multi: multi,
            })
            .unwrap_or_default())
    }

    async fn list_by_actor(
        &self,
        actor: ActorId,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<PageCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let rows = match cursor {
            Some(cursor) => {
                sqlx::query_as::<_, AuditLogRow>(&format!(
                    "SELECT {AUDIT_COLUMNS} FROM audit_logs
                     WHERE actor_id = $1 AND (created_at, id) < ($2, $3)
                     ORDER BY created_at DESC, id DESC LIMIT $4"
                ))
                .bind(i64::from(actor))
                .bind(cursor.ts)
                .bind(cursor.id)
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, AuditLogRow>(&format!(
                    "SELECT {AUDIT_COLUMNS} FROM audit_logs
                     WHERE actor_id = $1
                     ORDER BY created_at DESC, id DESC LIMIT $2"
                ))
                .bind(i64::from(actor))
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        page(rows, limit)
    }

    async fn list_by_target(
        &self,
        target_type: &str,
        target_id: i64,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<PageCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let rows = match cursor {
            Some(cursor) => {
                sqlx::query_as::<_, AuditLogRow>(&format!(
                    "SELECT {AUDIT_COLUMNS} FROM audit_logs
                     WHERE target_type = $1 AND target_id = $2 AND (created_at, id) < ($3, $4)
                     ORDER BY created_at DESC, id DESC LIMIT $5"
                ))
                .bind(target_type)
                .bind(target_id)
                .bind(cursor.ts)
                .bind(cursor.id)
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, AuditLogRow>(&format!(
                    "SELECT {AUDIT_COLUMNS} FROM audit_logs
                     WHERE target_type = $1 AND target_id = $2
                     ORDER BY created_at DESC, id DESC LIMIT $3"
                ))
                .bind(target_type)
                .bind(target_id)
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        page(rows, limit)
    }
}
