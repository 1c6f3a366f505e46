// src/application/commands/revisions/create.rs
use tracing::info;

use super::RevisionCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        entity::Entity,
        post::{PostContent, PostId},
        revision::{Revision, RevisionNumber, specifications::latest_of},
        user::UserId,
    },
};

pub struct CreateRevisionCommand {
    pub post_id: PostId,
    pub editor_id: UserId,
    pub content: String,
}

impl RevisionCommandService {
    /// Snapshots `content` as the next revision of the post.
    ///
    /// Two writers racing for the same number both compute `latest + 1`; the
    /// store's uniqueness on `(post_id, revision_number)` turns the loser's
    /// insert into a conflict, which is returned unchanged.
    pub async fn create_revision(
        &self,
        command: CreateRevisionCommand,
    ) -> ApplicationResult<Revision> {
        let content = PostContent::new(command.content)?;
        let post = self.posts.get_by_id(command.post_id).await?;
        if post.is_deleted() {
            return Err(ApplicationError::invalid_operation(format!(
                "post {} is deleted",
                post.id()
            )));
        }
        self.record(post.id(), command.editor_id, content).await
    }

    pub(crate) async fn record(
        &self,
        post_id: PostId,
        editor_id: UserId,
        content: PostContent,
    ) -> ApplicationResult<Revision> {
        let number = self.next_number(post_id).await?;
        let revision = Revision::record(post_id, editor_id, content, number, self.clock.now());

        let mut revision = self.revisions.add(revision).await?;
        self.dispatcher.publish_pending(&mut revision).await;

        info!(
            post_id = %post_id,
            revision_id = %revision.id(),
            revision_number = %number,
            "revision recorded"
        );
        Ok(revision)
    }

    async fn next_number(&self, post_id: PostId) -> ApplicationResult<RevisionNumber> {
        let latest = self.revisions.list(&latest_of(post_id)).await?;
        match latest.first() {
            Some(revision) => Ok(revision.revision_number().next()?),
            None => Ok(RevisionNumber::FIRST),
        }
    }
}
