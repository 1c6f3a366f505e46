// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{post::PostId, user::UserId},
};

pub struct DeletePostCommand {
    pub post_id: PostId,
    pub actor_id: UserId,
}

impl PostCommandService {
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let mut post = self.load(command.post_id).await?;
        post.soft_delete(command.actor_id, self.clock.now())?;
        self.commit(post).await?;
        Ok(())
    }
}
