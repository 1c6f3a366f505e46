// src/domain/post/mod.rs
pub mod entity;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::Post;
pub use specifications::{PostField, PostRelation};
pub use value_objects::{ETag, PostContent, PostId, PostSlug, PostStatus, PostTitle};
