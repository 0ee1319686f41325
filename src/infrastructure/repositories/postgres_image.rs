// src/infrastructure/repositories/postgres_image.rs
use super::map_sqlx;
use super::postgres_article::ImageRow;
use crate::domain::article::{ArticleId, Image, ImageId, ImageRepository, NewImage};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostgresImageRepository {
    pool: PgPool,
}

impl PostgresImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PostgresImageRepository {
    async fn insert(&self, image: NewImage) -> DomainResult<Image> {
        let row = sqlx::query_as::<_, ImageRow>(
            "INSERT INTO images (article_id, path, original_name, mime_type, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, article_id, path, original_name, mime_type, created_at",
        )
        .bind(i64::from(image.article_id))
        .bind(&image.path)
        .bind(&image.original_name)
        .bind(&image.mime_type)
        .bind(image.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Image::try_from(row)
    }

    async fn find(
        &self,
        article_id: ArticleId,
        image_id: ImageId,
    ) -> DomainResult<Option<Image>> {
        let row = sqlx::query_as::<_, ImageRow>(
            "SELECT id, article_id, path, original_name, mime_type, created_at
             FROM images WHERE id = $1 AND article_id = $2",
        )
        .bind(i64::from(image_id))
        .bind(i64::from(article_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Image::try_from).transpose()
    }

    async fn delete(&self, image_id: ImageId) -> DomainResult<Image> {
        let row = sqlx::query_as::<_, ImageRow>(
            "DELETE FROM images WHERE id = $1
             RETURNING id, article_id, path, original_name, mime_type, created_at",
        )
        .bind(i64::from(image_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("image not found".into()))?;
        Image::try_from(row)
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Image>> {
        super::postgres_article::load_images(&self.pool, article_id.into()).await
    }
}
