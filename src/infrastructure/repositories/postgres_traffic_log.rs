// src/infrastructure/repositories/postgres_traffic_log.rs
use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::traffic::{NewTrafficLog, TrafficLogRepository};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresTrafficLogRepository {
    pool: PgPool,
}

impl PostgresTrafficLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrafficLogRepository for PostgresTrafficLogRepository {
    async fn insert(&self, view: NewTrafficLog) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO traffic_logs (article_id, viewer_ip, user_agent, referer, user_id)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(view.article_id.map(i64::from))
        .bind(&view.viewer_ip)
        .bind(&view.user_agent)
        .bind(&view.referer)
        .bind(view.user_id.map(i64::from))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }
}
