// src/domain/mod.rs
pub mod diff;
pub mod entity;
pub mod errors;
pub mod events;
pub mod post;
pub mod repository;
pub mod revision;
pub mod specification;
pub mod user;
