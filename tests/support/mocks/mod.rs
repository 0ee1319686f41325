pub mod audit;
pub mod blob;
pub mod content;
pub mod time;
pub mod traffic;
pub mod trash;

pub use audit::InMemoryAuditRepo;
pub use blob::InMemoryBlobStore;
pub use content::InMemoryContentStore;
pub use time::FixedClock;
pub use traffic::InMemoryTrafficRepo;
pub use trash::InMemoryTrashRepo;
