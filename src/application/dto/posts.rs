// src/application/dto/posts.rs
use crate::domain::diff::TextDiff;
use crate::domain::entity::Entity;
use crate::domain::post::PostId;
use crate::domain::revision::{Revision, RevisionId};
use serde::Serialize;

/// One side of a comparison. The live content of a post is shown as
/// revision number 0 and has no revision id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparedSide {
    pub revision_id: Option<RevisionId>,
    pub revision_number: u32,
}

impl ComparedSide {
    pub const LIVE: ComparedSide = ComparedSide {
        revision_id: None,
        revision_number: 0,
    };

    pub fn of(revision: &Revision) -> Self {
        Self {
            revision_id: Some(revision.id()),
            revision_number: revision.revision_number().value(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.revision_id.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RevisionComparison {
    pub post_id: PostId,
    pub source: ComparedSide,
    pub target: ComparedSide,
    pub diff: TextDiff,
}
