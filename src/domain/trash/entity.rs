// src/domain/trash/entity.rs
use crate::domain::actor::ActorId;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrashId(pub i64);

impl TrashId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("trash id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TrashId> for i64 {
    fn from(value: TrashId) -> Self {
        value.0
    }
}

impl fmt::Display for TrashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable snapshot of an article taken at the moment of deletion.
/// Never mutated; removed only by an explicit purge. The snapshot keeps the
/// live article's id as a weak reference so a reconciliation pass can detect
/// soft-deleted articles that are missing their snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trash {
    pub id: TrashId,
    pub article_id: i64,
    pub payload: serde_json::Value,
    pub deleted_by: ActorId,
    pub deleted_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTrash {
    pub article_id: ArticleId,
    pub payload: serde_json::Value,
    pub deleted_by: ActorId,
    pub deleted_at: DateTime<Utc>,
}
