// src/application/queries/revisions/compare.rs
use super::RevisionQueryService;
use crate::{
    application::{
        dto::{ComparedSide, RevisionComparison},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        diff::TextDiff,
        entity::Entity,
        post::PostId,
        revision::RevisionId,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct CompareRevisionsQuery {
    pub source: RevisionId,
    pub target: RevisionId,
}

#[derive(Debug, Clone, Copy)]
pub struct CompareWithLiveQuery {
    pub post_id: PostId,
    pub revision_id: RevisionId,
}

impl RevisionQueryService {
    /// Diff from `source` to `target`; both must belong to the same post.
    pub async fn compare(
        &self,
        query: CompareRevisionsQuery,
    ) -> ApplicationResult<RevisionComparison> {
        let source = self.revisions.get_by_id(query.source).await?;
        let target = self.revisions.get_by_id(query.target).await?;
        if source.post_id() != target.post_id() {
            return Err(ApplicationError::invalid_operation(format!(
                "revisions {} and {} belong to different posts",
                source.id(),
                target.id()
            )));
        }

        Ok(RevisionComparison {
            post_id: source.post_id(),
            source: ComparedSide::of(&source),
            target: ComparedSide::of(&target),
            diff: TextDiff::compute(source.content().as_str(), target.content().as_str()),
        })
    }

    /// Diff from a stored revision to the post's current content.
    pub async fn compare_with_live(
        &self,
        query: CompareWithLiveQuery,
    ) -> ApplicationResult<RevisionComparison> {
        let post = self.posts.get_by_id(query.post_id).await?;
        let revision = self.revisions.get_by_id(query.revision_id).await?;
        if revision.post_id() != post.id() {
            return Err(ApplicationError::invalid_operation(format!(
                "revision {} does not belong to post {}",
                revision.id(),
                post.id()
            )));
        }

        Ok(RevisionComparison {
            post_id: post.id(),
            source: ComparedSide::of(&revision),
            target: ComparedSide::LIVE,
            diff: TextDiff::compute(revision.content().as_str(), post.content().as_str()),
        })
    }
}
