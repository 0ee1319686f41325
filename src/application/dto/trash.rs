use crate::domain::trash::Trash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashDto {
    pub id: i64,
    pub article_id: i64,
    pub payload: serde_json::Value,
    pub deleted_by: i64,
    pub deleted_at: DateTime<Utc>,
}

impl From<Trash> for TrashDto {
    fn from(trash: Trash) -> Self {
        Self {
            id: trash.id.into(),
            article_id: trash.article_id,
            payload: trash.payload,
            deleted_by: trash.deleted_by.into(),
            deleted_at: trash.deleted_at,
        }
    }
}
