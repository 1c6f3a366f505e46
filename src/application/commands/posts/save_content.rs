// src/application/commands/posts/save_content.rs
use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        entity::Entity,
        post::{Post, PostContent, PostId},
        revision::Revision,
        user::UserId,
    },
};

pub struct SavePostContentCommand {
    pub post_id: PostId,
    pub editor_id: UserId,
    pub content: String,
    /// ETag the editor last saw; a mismatch means someone saved in between.
    pub if_match: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SaveContentOutcome {
    pub post: Post,
    /// `None` when the submitted content equals the live content.
    pub revision: Option<Revision>,
}

impl PostCommandService {
    pub async fn save_content(
        &self,
        command: SavePostContentCommand,
    ) -> ApplicationResult<SaveContentOutcome> {
        let content = PostContent::new(command.content)?;
        let mut post = self.load(command.post_id).await?;

        let stale = command
            .if_match
            .as_deref()
            .filter(|expected| !post.etag().matches(expected));
        if let Some(expected) = stale {
            return Err(ApplicationError::conflict(format!(
                "post {} changed since {expected}",
                post.id()
            )));
        }

        let changed = post.edit_content(content.clone(), command.editor_id, self.clock.now())?;
        if !changed {
            return Ok(SaveContentOutcome {
                post,
                revision: None,
            });
        }

        let post = self.commit(post).await?;
        let revision = self
            .revision_commands
            .record(post.id(), command.editor_id, content)
            .await?;
        Ok(SaveContentOutcome {
            post,
            revision: Some(revision),
        })
    }
}
