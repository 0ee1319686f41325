pub mod entity;
pub mod repository;

pub use entity::{AuditLog, CreatedCounters, NewAuditLog};
pub use repository::AuditLogRepository;
