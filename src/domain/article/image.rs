// src/domain/article/image.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub i64);

impl ImageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("image id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ImageId> for i64 {
    fn from(value: ImageId) -> Self {
        value.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An uploaded image owned by exactly one article. `path` is the blob-store
/// key; the file bytes themselves live behind the `BlobStore` port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    pub article_id: ArticleId,
    pub path: String,
    pub original_name: String,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewImage {
    pub article_id: ArticleId,
    pub path: String,
    pub original_name: String,
    pub mime_type: String,
    pub created_at: DateTime<Utc>,
}
