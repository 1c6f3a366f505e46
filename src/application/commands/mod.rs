// src/application/commands/mod.rs
pub mod posts;
pub mod revisions;
