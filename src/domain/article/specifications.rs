use crate::domain::actor::{ActorId, ActorRole};
use crate::domain::article::entity::Article;

/// Moderators may only manage their own articles; admins may manage any.
/// Used by edit, delete, restore, and image operations alike.
pub struct CanManageArticleSpec<'a> {
    role: ActorRole,
    actor_id: ActorId,
    article: &'a Article,
}

impl<'a> CanManageArticleSpec<'a> {
    pub fn new(role: ActorRole, actor_id: ActorId, article: &'a Article) -> Self {
        Self {
            role,
            actor_id,
            article,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        match self.role {
            ActorRole::Admin => true,
            ActorRole::Moderator => self.article.owned_by(self.actor_id),
        }
    }
}
