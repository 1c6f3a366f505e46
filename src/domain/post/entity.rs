// src/domain/post/entity.rs
use crate::domain::entity::{Entity, EntityBase};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::events::{DomainEvent, EntityRef, EventPayload};
use crate::domain::post::value_objects::{
    ETag, PostContent, PostId, PostSlug, PostStatus, PostTitle,
};
use crate::domain::revision::Revision;
use crate::domain::user::{UserId, UserSummary};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    base: EntityBase<PostId>,
    author_id: UserId,
    title: PostTitle,
    slug: PostSlug,
    content: PostContent,
    etag: ETag,
    status: PostStatus,
    published_at: Option<DateTime<Utc>>,
    deleted_at: Option<DateTime<Utc>>,
    revisions: Option<Vec<Revision>>,
    author: Option<UserSummary>,
}

impl Post {
    pub fn create(
        author_id: UserId,
        title: PostTitle,
        slug: PostSlug,
        content: PostContent,
        now: DateTime<Utc>,
    ) -> Self {
        let etag = ETag::of(&content);
        let mut post = Self {
            base: EntityBase::new(PostId::generate(), now),
            author_id,
            title,
            slug,
            content,
            etag,
            status: PostStatus::Draft,
            published_at: None,
            deleted_at: None,
            revisions: None,
            author: None,
        };
        let payload = EventPayload::PostCreated {
            title: post.title.to_string(),
            slug: post.slug.to_string(),
            etag: post.etag.to_string(),
        };
        post.raise(Some(author_id), payload, now);
        post
    }

    #[allow(clippy::too_many_arguments)]
    pub fn rehydrate(
        id: PostId,
        author_id: UserId,
        title: PostTitle,
        slug: PostSlug,
        content: PostContent,
        status: PostStatus,
        published_at: Option<DateTime<Utc>>,
        deleted_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let etag = ETag::of(&content);
        Self {
            base: EntityBase::rehydrate(id, created_at, updated_at),
            author_id,
            title,
            slug,
            content,
            etag,
            status,
            published_at,
            deleted_at,
            revisions: None,
            author: None,
        }
    }

    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    pub fn title(&self) -> &PostTitle {
        &self.title
    }

    pub fn slug(&self) -> &PostSlug {
        &self.slug
    }

    pub fn content(&self) -> &PostContent {
        &self.content
    }

    pub fn etag(&self) -> &ETag {
        &self.etag
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Revisions attached by an eager-load hint, ordered by revision number.
    pub fn revisions(&self) -> Option<&[Revision]> {
        self.revisions.as_deref()
    }

    /// Author attached by an eager-load hint.
    pub fn author(&self) -> Option<&UserSummary> {
        self.author.as_ref()
    }

    /// Replaces the live content. Returns `false` and records nothing when the
    /// content is unchanged.
    pub fn edit_content(
        &mut self,
        content: PostContent,
        editor: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<bool> {
        self.ensure_live("edit")?;
        if content == self.content {
            return Ok(false);
        }

        let old_content = std::mem::replace(&mut self.content, content);
        let old_etag = std::mem::replace(&mut self.etag, ETag::of(&self.content));
        self.base.touch(now);
        let payload = EventPayload::PostContentChanged {
            old_content: old_content.into(),
            new_content: self.content.to_string(),
            old_etag: old_etag.to_string(),
            new_etag: self.etag.to_string(),
        };
        self.raise(Some(editor), payload, now);
        Ok(true)
    }

    pub fn retitle(
        &mut self,
        title: PostTitle,
        slug: PostSlug,
        editor: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_live("retitle")?;
        let old_title = std::mem::replace(&mut self.title, title);
        let old_slug = std::mem::replace(&mut self.slug, slug);
        self.base.touch(now);
        let payload = EventPayload::PostRetitled {
            old_title: old_title.into(),
            new_title: self.title.to_string(),
            old_slug: old_slug.into(),
            new_slug: self.slug.to_string(),
        };
        self.raise(Some(editor), payload, now);
        Ok(())
    }

    /// Returns `false` when the post was already published.
    pub fn publish(&mut self, actor: UserId, now: DateTime<Utc>) -> DomainResult<bool> {
        self.ensure_live("publish")?;
        if self.is_published() {
            return Ok(false);
        }
        self.status = PostStatus::Published;
        self.published_at = Some(now);
        self.base.touch(now);
        self.raise(Some(actor), EventPayload::PostPublished { published_at: now }, now);
        Ok(true)
    }

    /// Returns `false` when the post was already a draft.
    pub fn unpublish(&mut self, actor: UserId, now: DateTime<Utc>) -> DomainResult<bool> {
        self.ensure_live("unpublish")?;
        if !self.is_published() {
            return Ok(false);
        }
        self.status = PostStatus::Draft;
        self.published_at = None;
        self.base.touch(now);
        self.raise(Some(actor), EventPayload::PostUnpublished, now);
        Ok(true)
    }

    pub fn soft_delete(&mut self, actor: UserId, now: DateTime<Utc>) -> DomainResult<()> {
        self.ensure_live("delete")?;
        self.deleted_at = Some(now);
        self.base.touch(now);
        self.raise(Some(actor), EventPayload::PostDeleted { deleted_at: now }, now);
        Ok(())
    }

    /// Overwrites the live content with a revision's snapshot. Restoring the
    /// content the post already has is allowed and still recorded.
    pub fn restore_revision(
        &mut self,
        revision: &Revision,
        actor: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.ensure_live("restore")?;
        if revision.post_id() != self.id() {
            return Err(DomainError::InvalidOperation(format!(
                "revision {} belongs to post {}, not {}",
                revision.id(),
                revision.post_id(),
                self.id()
            )));
        }

        let old_content = std::mem::replace(&mut self.content, revision.content().clone());
        self.etag = ETag::of(&self.content);
        self.base.touch(now);
        let payload = EventPayload::PostRestored {
            revision_id: revision.id(),
            revision_number: revision.revision_number(),
            old_content: old_content.into(),
            restored_content: self.content.to_string(),
        };
        self.raise(Some(actor), payload, now);
        Ok(())
    }

    pub(crate) fn attach_revisions(&mut self, mut revisions: Vec<Revision>) {
        revisions.sort_by_key(Revision::revision_number);
        self.revisions = Some(revisions);
    }

    pub(crate) fn attach_author(&mut self, author: Option<UserSummary>) {
        self.author = author;
    }

    /// Strips loaded relations; stores keep posts without them.
    pub(crate) fn detach_relations(&mut self) {
        self.revisions = None;
        self.author = None;
    }

    fn ensure_live(&self, action: &str) -> DomainResult<()> {
        if self.is_deleted() {
            Err(DomainError::InvalidOperation(format!(
                "cannot {action} deleted post {}",
                self.id()
            )))
        } else {
            Ok(())
        }
    }

    fn raise(&mut self, actor: Option<UserId>, payload: EventPayload, now: DateTime<Utc>) {
        let entity = EntityRef::new(Self::ENTITY_NAME, self.id());
        self.base.record(DomainEvent::new(entity, actor, payload, now));
    }
}

impl Entity for Post {
    type Id = PostId;
    const ENTITY_NAME: &'static str = "post";

    fn base(&self) -> &EntityBase<PostId> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase<PostId> {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::EventKind;
    use crate::domain::revision::RevisionNumber;

    fn sample_post() -> Post {
        Post::create(
            UserId::generate(),
            PostTitle::new("Hello").unwrap(),
            PostSlug::new("hello").unwrap(),
            PostContent::new("Hello world").unwrap(),
            Utc::now(),
        )
    }

    fn kinds(post: &Post) -> Vec<EventKind> {
        post.pending_events().iter().map(DomainEvent::kind).collect()
    }

    #[test]
    fn create_starts_as_draft_with_one_event() {
        let post = sample_post();
        assert_eq!(post.status(), PostStatus::Draft);
        assert_eq!(kinds(&post), vec![EventKind::PostCreated]);
        assert_eq!(post.etag(), &ETag::of(post.content()));
    }

    #[test]
    fn domain_methods_append_events_in_call_order() {
        let mut post = sample_post();
        let editor = UserId::generate();
        let now = Utc::now();
        post.edit_content(PostContent::new("Hello brave world").unwrap(), editor, now)
            .unwrap();
        post.publish(editor, now).unwrap();
        assert_eq!(
            kinds(&post),
            vec![
                EventKind::PostCreated,
                EventKind::PostContentChanged,
                EventKind::PostPublished
            ]
        );
    }

    #[test]
    fn edit_recomputes_etag_and_skips_noop() {
        let mut post = sample_post();
        let before = post.etag().clone();
        let editor = UserId::generate();
        let changed = post
            .edit_content(PostContent::new("Hello world").unwrap(), editor, Utc::now())
            .unwrap();
        assert!(!changed);
        assert_eq!(post.pending_events().len(), 1);

        post.edit_content(PostContent::new("Goodbye").unwrap(), editor, Utc::now())
            .unwrap();
        assert_ne!(post.etag(), &before);
    }

    #[test]
    fn deleted_posts_reject_mutations() {
        let mut post = sample_post();
        let actor = UserId::generate();
        post.soft_delete(actor, Utc::now()).unwrap();
        assert!(post.is_deleted());
        assert!(matches!(
            post.soft_delete(actor, Utc::now()),
            Err(DomainError::InvalidOperation(_))
        ));
        assert!(post.publish(actor, Utc::now()).is_err());
    }

    #[test]
    fn restore_rejects_foreign_revision() {
        let mut post = sample_post();
        let foreign = Revision::record(
            PostId::generate(),
            UserId::generate(),
            PostContent::new("other").unwrap(),
            RevisionNumber::FIRST,
            Utc::now(),
        );
        let err = post
            .restore_revision(&foreign, UserId::generate(), Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidOperation(_)));
    }

    #[test]
    fn restore_to_same_content_is_still_recorded() {
        let mut post = sample_post();
        let own = Revision::record(
            post.id(),
            post.author_id(),
            post.content().clone(),
            RevisionNumber::FIRST,
            Utc::now(),
        );
        post.restore_revision(&own, UserId::generate(), Utc::now())
            .unwrap();
        assert_eq!(kinds(&post).last(), Some(&EventKind::PostRestored));
    }
}
