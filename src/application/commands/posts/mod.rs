// src/application/commands/posts/mod.rs
mod create;
mod delete;
mod publish;
mod retitle;
mod save_content;
mod service;

pub use create::{CreatePostCommand, CreatePostCommandBuilder};
pub use delete::DeletePostCommand;
pub use publish::SetPublishStateCommand;
pub use retitle::RetitlePostCommand;
pub use save_content::{SaveContentOutcome, SavePostContentCommand};
pub use service::PostCommandService;
