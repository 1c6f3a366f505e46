// src/application/commands/revisions/mod.rs
mod create;
mod restore;
mod service;

pub use create::CreateRevisionCommand;
pub use restore::RestoreRevisionCommand;
pub use service::RevisionCommandService;
