// tests/support/mocks/blob.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use akhbar_core::application::ApplicationResult;
use akhbar_core::application::error::ApplicationError;
use akhbar_core::application::ports::blob::BlobStore;
use akhbar_core::domain::errors::DomainError;

/// Records puts and deletes instead of touching disk.
#[derive(Default)]
pub struct InMemoryBlobStore {
    puts: Mutex<Vec<String>>,
    deletes: Mutex<Vec<String>>,
    fail_deletes: AtomicBool,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_deletes(&self) {
        self.fail_deletes.store(true, Ordering::SeqCst);
    }

    pub fn stored_paths(&self) -> Vec<String> {
        self.puts.lock().unwrap().clone()
    }

    pub fn deleted_paths(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(&self, _bytes: &[u8], filename: &str) -> ApplicationResult<String> {
        let mut puts = self.puts.lock().unwrap();
        let path = format!("uploads/{}-{}", puts.len() + 1, filename);
        puts.push(path.clone());
        Ok(path)
    }

    async fn delete(&self, path: &str) -> ApplicationResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(ApplicationError::Domain(DomainError::Persistence(
                "blob delete failed".into(),
            )));
        }
        self.deletes.lock().unwrap().push(path.to_owned());
        Ok(())
    }
}
