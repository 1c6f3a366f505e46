// src/domain/revision/specifications.rs
use crate::domain::entity::Entity;
use crate::domain::post::PostId;
use crate::domain::revision::entity::Revision;
use crate::domain::specification::{Criteria, FieldRef, NoRelation, Queryable, Specification, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionField {
    Id,
    PostId,
    AuthorId,
    RevisionNumber,
    CreatedAt,
}

impl FieldRef for RevisionField {
    fn column(&self) -> &'static str {
        match self {
            RevisionField::Id => "id",
            RevisionField::PostId => "post_id",
            RevisionField::AuthorId => "author_id",
            RevisionField::RevisionNumber => "revision_number",
            RevisionField::CreatedAt => "created_at",
        }
    }
}

impl Queryable for Revision {
    type Field = RevisionField;
    type Relation = NoRelation;
    const ID_FIELD: RevisionField = RevisionField::Id;

    fn field_value(&self, field: RevisionField) -> Value {
        match field {
            RevisionField::Id => self.base().id().into(),
            RevisionField::PostId => self.post_id().into(),
            RevisionField::AuthorId => self.author_id().into(),
            RevisionField::RevisionNumber => self.revision_number().into(),
            RevisionField::CreatedAt => self.base().created_at().into(),
        }
    }
}

/// History of one post, oldest first.
pub fn history_of(post_id: PostId) -> Specification<Revision> {
    Specification::matching(Criteria::eq(RevisionField::PostId, post_id))
        .order_by(RevisionField::RevisionNumber)
}

/// The highest-numbered revision of a post.
pub fn latest_of(post_id: PostId) -> Specification<Revision> {
    Specification::matching(Criteria::eq(RevisionField::PostId, post_id))
        .order_by_desc(RevisionField::RevisionNumber)
        .page(0, 1)
}
