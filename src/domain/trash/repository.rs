use crate::domain::actor::ActorId;
use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageCursor;
use crate::domain::trash::entity::{NewTrash, Trash, TrashId};
use async_trait::async_trait;

#[async_trait]
pub trait TrashRepository: Send + Sync {
    /// Every delete produces a fresh snapshot, even if one already exists
    /// for the same article.
    async fn archive(&self, snapshot: NewTrash) -> DomainResult<Trash>;

    /// Permanently removes a snapshot without touching any live article.
    async fn purge(&self, id: TrashId) -> DomainResult<()>;

    /// Snapshots taken by one actor, newest deletion first.
    async fn list_by_deleter(
        &self,
        actor: ActorId,
        limit: u32,
        cursor: Option<PageCursor>,
    ) -> DomainResult<(Vec<Trash>, Option<PageCursor>)>;

    /// All snapshots for an article. An empty result for a soft-deleted
    /// article is the queryable partial state a reconciliation pass repairs.
    async fn find_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Trash>>;
}
