// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Keyset cursor for listings ordered by `(timestamp, id)` descending.
/// Encodes to an opaque URL-safe token so pages stay restartable across
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub ts: DateTime<Utc>,
    pub id: i64,
}

impl PageCursor {
    pub fn new(ts: DateTime<Utc>, id: i64) -> Self {
        Self { ts, id }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.ts.to_rfc3339(), self.id);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (ts_s, id_s) = raw.split_once('|').ok_or_else(invalid)?;
        let ts = DateTime::parse_from_rfc3339(ts_s)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id_s.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(ts, id))
    }
}

/// Clamp a caller-supplied page size to a sane window.
pub fn normalize_limit(limit: u32) -> u32 {
    limit.clamp(1, 100)
}
