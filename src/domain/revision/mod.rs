// src/domain/revision/mod.rs
pub mod entity;
pub mod specifications;
pub mod value_objects;

pub use entity::Revision;
pub use specifications::RevisionField;
pub use value_objects::{RevisionId, RevisionNumber};
