// src/application/queries/posts/mod.rs
mod get;
mod list;
mod service;

pub use get::{GetPostBySlugQuery, GetPostQuery};
pub use list::ListPostsQuery;
pub use service::PostQueryService;
