pub mod articles;
pub mod audit;
pub mod trash;

pub use articles::ArticleQueryService;
pub use audit::AuditQueryService;
pub use trash::TrashQueryService;
