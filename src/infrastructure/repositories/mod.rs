// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_audit_log;
mod postgres_image;
mod postgres_traffic_log;
mod postgres_trash;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_audit_log::PostgresAuditLogRepository;
pub use postgres_image::PostgresImageRepository;
pub use postgres_traffic_log::PostgresTrafficLogRepository;
pub use postgres_trash::PostgresTrashRepository;
