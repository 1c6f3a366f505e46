// src/application/queries/mod.rs
pub mod posts;
pub mod revisions;
