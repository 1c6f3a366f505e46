// src/application/commands/revisions/restore.rs
use tracing::info;

use super::RevisionCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{entity::Entity, post::Post, revision::RevisionId, user::UserId},
};

pub struct RestoreRevisionCommand {
    pub revision_id: RevisionId,
    pub actor_id: UserId,
}

impl RevisionCommandService {
    /// Makes a past revision the live content again.
    ///
    /// The content being replaced is snapshotted first, so restoring that
    /// snapshot afterwards undoes the restore.
    pub async fn restore(&self, command: RestoreRevisionCommand) -> ApplicationResult<Post> {
        let target = self.revisions.get_by_id(command.revision_id).await?;
        let mut post = self.posts.get_by_id(target.post_id()).await?;
        if post.is_deleted() {
            return Err(ApplicationError::invalid_operation(format!(
                "cannot restore revision {} of deleted post {}",
                target.id(),
                post.id()
            )));
        }

        let snapshot = self
            .record(post.id(), command.actor_id, post.content().clone())
            .await?;

        post.restore_revision(&target, command.actor_id, self.clock.now())?;
        self.posts.update(&post).await?;
        self.dispatcher.publish_pending(&mut post).await;

        info!(
            post_id = %post.id(),
            restored = %target.revision_number(),
            snapshot = %snapshot.revision_number(),
            "revision restored"
        );
        Ok(post)
    }
}
