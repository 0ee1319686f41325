pub mod attach_image;
pub mod audit;
pub mod create;
pub mod delete;
pub mod payload;
pub mod purge;
pub mod remove_image;
pub mod restore;
pub mod service;
pub mod update;

pub use attach_image::AttachImageCommand;
pub use audit::AuditRecorder;
pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use payload::ArticlePayload;
pub use purge::{PurgeArticleCommand, PurgeTrashCommand};
pub use remove_image::RemoveImageCommand;
pub use restore::RestoreArticleCommand;
pub use service::ModerationService;
pub use update::UpdateArticleCommand;
