// src/domain/post/specifications.rs
use crate::domain::entity::Entity;
use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::{PostSlug, PostStatus};
use crate::domain::specification::{Criteria, FieldRef, Queryable, Specification, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Id,
    AuthorId,
    Title,
    Slug,
    Content,
    Status,
    PublishedAt,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

impl FieldRef for PostField {
    fn column(&self) -> &'static str {
        match self {
            PostField::Id => "id",
            PostField::AuthorId => "author_id",
            PostField::Title => "title",
            PostField::Slug => "slug",
            PostField::Content => "content",
            PostField::Status => "status",
            PostField::PublishedAt => "published_at",
            PostField::DeletedAt => "deleted_at",
            PostField::CreatedAt => "created_at",
            PostField::UpdatedAt => "updated_at",
        }
    }
}

/// Related data a post specification may ask the store to attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostRelation {
    Revisions,
    Author,
}

impl Queryable for Post {
    type Field = PostField;
    type Relation = PostRelation;
    const ID_FIELD: PostField = PostField::Id;

    fn field_value(&self, field: PostField) -> Value {
        match field {
            PostField::Id => self.id().into(),
            PostField::AuthorId => self.author_id().into(),
            PostField::Title => self.title().as_str().into(),
            PostField::Slug => self.slug().as_str().into(),
            PostField::Content => self.content().as_str().into(),
            PostField::Status => self.status().as_str().into(),
            PostField::PublishedAt => self.published_at().into(),
            PostField::DeletedAt => self.deleted_at().into(),
            PostField::CreatedAt => self.created_at().into(),
            PostField::UpdatedAt => self.updated_at().into(),
        }
    }
}

pub fn not_deleted() -> Criteria<PostField> {
    Criteria::is_null(PostField::DeletedAt)
}

/// Any post, deleted or not, holding the slug.
pub fn with_slug(slug: &PostSlug) -> Specification<Post> {
    Specification::matching(Criteria::eq(PostField::Slug, slug.as_str()))
}

/// Listing used by feeds and admin screens: live posts, newest first, with
/// drafts only on request and an optional title/content search.
pub fn listing(include_drafts: bool, search: Option<&str>) -> Specification<Post> {
    let mut spec = Specification::matching(not_deleted());
    if !include_drafts {
        spec = spec.filter(Criteria::eq(PostField::Status, PostStatus::Published.as_str()));
    }
    if let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) {
        spec = spec.filter(
            Criteria::contains(PostField::Title, term)
                .or(Criteria::contains(PostField::Content, term)),
        );
    }
    spec.order_by_desc(PostField::CreatedAt)
}
