pub mod entity;
pub mod repository;

pub use entity::{NewTrafficLog, TrafficLog};
pub use repository::TrafficLogRepository;
