pub mod entity;
pub mod repository;

pub use entity::{NewTrash, Trash, TrashId};
pub use repository::TrashRepository;
