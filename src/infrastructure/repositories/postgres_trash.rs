// src/infrastructure/repositories/postgres_trash.rs
use super::map_sqlx;
use crate::domain::actor::ActorId;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageCursor;
use crate::domain::trash::{NewTrash, Trash, TrashId, TrashRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresTrashRepository {
    pool: PgPool,
}

impl PostgresTrashRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TrashRow {
    id: i64,
    article_id: i64,
    payload: serde_json::Value,
    deleted_by: i64,
    deleted_at: DateTime<Utc>,
}

impl TryFrom<TrashRow> for Trash {
    type Error = DomainError;

    fn try_from(row: TrashRow) -> Result<Self, Self::Error> {
        Ok(Trash {
            id: TrashId::new(row.id)?,
            article_id: row.article_id,
            payload: row.payload,
            deleted_by: ActorId::new(row.deleted_by)?,
            deleted_at: row.deleted_at,
        })
    }
}

#[async_trait]
impl TrashRepository for PostgresTrashRepository {
    async fn archive(&self, snapshot: NewTrash) -> DomainResult<Trash> {
        let row = sqlx::query_as::<_, TrashRow>(
            "INSERT INTO trash (article_id, payload, deleted_by, deleted_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, article_id, payload, deleted_by, deleted_at",
        )
        .bind(i64::from(snapshot.article_id))
        .bind(&snapshot.payload)
        .bind(i64::from(snapshot.deleted_by))
        .bind(snapshot.deleted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Trash::try_from(row)
    }

    async fn purge(&self, id: TrashId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM trash WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
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
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let rows = match cursor {
            Some(cursor) => {
                sqlx::query_as::<_, TrashRow>(
                    "SELECT id, article_id, payload, deleted_by, deleted_at FROM trash
                     WHERE deleted_by = $1 AND (deleted_at, id) < ($2, $3)
                     ORDER BY deleted_at DESC, id DESC LIMIT $4",
                )
                .bind(i64::from(actor))
                .bind(cursor.ts)
                .bind(cursor.id)
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, TrashRow>(
                    "SELECT id, article_id, payload, deleted_by, deleted_at FROM trash
                     WHERE deleted_by = $1
                     ORDER BY deleted_at DESC, id DESC LIMIT $2",
                )
                .bind(i64::from(actor))
                .bind(fetch_limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        let mut items = rows
            .into_iter()
            .map(Trash::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if items.len() > limit as usize {
            items.pop();
            if let Some(last) = items.last() {
                next_cursor = Some(PageCursor::new(last.deleted_at, last.id.into()));
            }
        }

        Ok((items, next_cursor))
    }

    async fn find_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Trash>> {
        let rows = sqlx::query_as::<_, TrashRow>(
            "SELECT id, article_id, payload, deleted_by, deleted_at FROM trash
             WHERE article_id = $1 ORDER BY deleted_at DESC, id DESC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Trash::try_from).collect()
    }
}
