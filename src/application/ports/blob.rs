// src/application/ports/blob.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// External binary storage for uploaded image files, addressed by path key.
/// The core only ever holds the returned path.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, bytes: &[u8], filename: &str) -> ApplicationResult<String>;
    async fn delete(&self, path: &str) -> ApplicationResult<()>;
}
