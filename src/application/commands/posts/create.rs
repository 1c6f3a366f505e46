// src/application/commands/posts/create.rs
use tracing::info;

use super::PostCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        entity::Entity,
        post::{Post, PostContent, PostTitle},
        user::UserId,
    },
};

pub struct CreatePostCommand {
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub publish: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    author_id: Option<UserId>,
    title: Option<String>,
    content: Option<String>,
    publish: bool,
}

impl CreatePostCommandBuilder {
    pub fn author(mut self, author_id: UserId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            author_id: self.author_id.ok_or("author is required")?,
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            publish: self.publish,
        })
    }
}

impl PostCommandService {
    /// Creates a post with a unique slug and records its first revision.
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<Post> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let now = self.clock.now();

        let slug = self.slug_service.generate_unique_slug(&title, None).await?;
        let mut post = Post::create(command.author_id, title, slug, content.clone(), now);
        if command.publish {
            post.publish(command.author_id, now)?;
        }

        let mut post = self.posts.add(post).await?;
        self.dispatcher.publish_pending(&mut post).await;
        self.revision_commands
            .record(post.id(), command.author_id, content)
            .await?;

        info!(post_id = %post.id(), slug = %post.slug(), "post created");
        Ok(post)
    }
}
