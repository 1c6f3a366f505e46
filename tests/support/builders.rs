// tests/support/builders.rs
use folio_core::application::commands::posts::CreatePostCommand;
use folio_core::domain::post::{Post, PostContent, PostSlug, PostTitle};
use folio_core::domain::user::UserId;

use super::mocks::fixed_now;

/// Post built directly in the domain, bypassing the services.
pub struct PostBuilder {
    author_id: UserId,
    title: String,
    slug: String,
    content: String,
    published: bool,
}

impl PostBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            author_id: UserId::generate(),
            title: format!("Post {slug}"),
            slug,
            content: "Hello world".into(),
            published: false,
        }
    }

    pub fn author(mut self, author_id: UserId) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> Post {
        let now = fixed_now();
        let mut post = Post::create(
            self.author_id,
            PostTitle::new(self.title).unwrap(),
            PostSlug::new(self.slug).unwrap(),
            PostContent::new(self.content).unwrap(),
            now,
        );
        if self.published {
            post.publish(self.author_id, now).unwrap();
        }
        post
    }
}

pub fn create_command(author_id: UserId, title: &str, content: &str) -> CreatePostCommand {
    CreatePostCommand::builder()
        .author(author_id)
        .title(title)
        .content(content)
        .build()
        .unwrap()
}
