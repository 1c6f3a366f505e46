// src/application/queries/revisions/mod.rs
mod compare;
mod list;
mod service;

pub use compare::{CompareRevisionsQuery, CompareWithLiveQuery};
pub use list::ListRevisionsQuery;
pub use service::RevisionQueryService;
