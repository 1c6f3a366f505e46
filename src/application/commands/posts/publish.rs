// src/application/commands/posts/publish.rs
use super::PostCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        post::{Post, PostId},
        user::UserId,
    },
};

pub struct SetPublishStateCommand {
    pub post_id: PostId,
    pub actor_id: UserId,
    pub publish: bool,
}

impl PostCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<Post> {
        let mut post = self.load(command.post_id).await?;
        let now = self.clock.now();
        let changed = if command.publish {
            post.publish(command.actor_id, now)?
        } else {
            post.unpublish(command.actor_id, now)?
        };

        if changed {
            self.commit(post).await
        } else {
            Ok(post)
        }
    }
}
