pub mod actor;
pub mod articles;
pub mod audit;
pub mod pagination;
pub mod trash;

pub use actor::{Actor, RequestMeta};
pub use articles::{ArticleDto, ImageDto, LocalizedArticleDto};
pub use audit::AuditLogDto;
pub use pagination::CursorPage;
pub use trash::TrashDto;
