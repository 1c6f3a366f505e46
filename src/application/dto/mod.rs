// src/application/dto/mod.rs
pub mod pagination;
pub mod posts;

pub use pagination::{PageLimits, Paginated};
pub use posts::{ComparedSide, RevisionComparison};
