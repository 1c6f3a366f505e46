// src/application/commands/posts/retitle.rs
use super::PostCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        entity::Entity,
        post::{Post, PostId, PostTitle},
        user::UserId,
    },
};

pub struct RetitlePostCommand {
    pub post_id: PostId,
    pub editor_id: UserId,
    pub title: String,
}

impl PostCommandService {
    /// Changes the title and regenerates the slug, keeping it unique among
    /// other posts.
    pub async fn retitle_post(&self, command: RetitlePostCommand) -> ApplicationResult<Post> {
        let title = PostTitle::new(command.title)?;
        let mut post = self.load(command.post_id).await?;
        let slug = self
            .slug_service
            .generate_unique_slug(&title, Some(post.id()))
            .await?;
        post.retitle(title, slug, command.editor_id, self.clock.now())?;
        self.commit(post).await
    }
}
