use std::sync::Arc;

mod support;

use support::*;

use folio_core::application::ApplicationError;
use folio_core::application::commands::posts::{DeletePostCommand, SavePostContentCommand};
use folio_core::application::commands::revisions::{
    CreateRevisionCommand, RestoreRevisionCommand,
};
use folio_core::application::queries::revisions::{
    CompareRevisionsQuery, CompareWithLiveQuery, ListRevisionsQuery,
};
use folio_core::domain::diff::ChangeTag;
use folio_core::domain::entity::Entity;
use folio_core::domain::errors::DomainError;
use folio_core::domain::post::{Post, PostId};
use folio_core::domain::revision::Revision;
use folio_core::domain::user::UserId;
use folio_core::infrastructure::Repositories;

async fn create(h: &TestHarness, author: UserId, content: &str) -> Post {
    h.services
        .post_commands
        .create_post(create_command(author, "Engine test", content))
        .await
        .unwrap()
}

async fn save(h: &TestHarness, post_id: PostId, editor: UserId, content: &str) -> Revision {
    h.services
        .post_commands
        .save_content(SavePostContentCommand {
            post_id,
            editor_id: editor,
            content: content.into(),
            if_match: None,
        })
        .await
        .unwrap()
        .revision
        .expect("content changed")
}

async fn history(h: &TestHarness, post_id: PostId) -> Vec<Revision> {
    h.services
        .revision_queries
        .list_revisions(ListRevisionsQuery { post_id })
        .await
        .unwrap()
}

#[tokio::test]
async fn inserted_word_is_reported_as_a_single_span() {
    let h = harness();
    let author = UserId::generate();
    let post = create(&h, author, "Hello world").await;
    let first = history(&h, post.id()).await.remove(0);
    let second = save(&h, post.id(), author, "Hello brave world").await;

    let comparison = h
        .services
        .revision_queries
        .compare(CompareRevisionsQuery {
            source: first.id(),
            target: second.id(),
        })
        .await
        .unwrap();

    assert_eq!(comparison.source.revision_number, 1);
    assert_eq!(comparison.target.revision_number, 2);
    let diff = comparison.diff;
    assert_eq!(diff.stats.lines_added, 0);
    assert_eq!(diff.stats.lines_removed, 0);
    assert!(
        diff.segments
            .iter()
            .all(|segment| segment.tag != ChangeTag::Deleted)
    );

    let spans: Vec<_> = diff
        .segments
        .iter()
        .flat_map(|segment| segment.spans.iter())
        .filter(|span| span.tag != ChangeTag::Unchanged)
        .collect();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].tag, ChangeTag::Inserted);
    assert_eq!(spans[0].text, "brave ");
    assert_eq!(spans[0].new_offset, "Hello ".len());
}

#[tokio::test]
async fn swapped_comparison_mirrors_positions_and_counts() {
    let h = harness();
    let author = UserId::generate();
    let post = create(&h, author, "intro\nkeep me\nold tail\nshared end").await;
    let a = history(&h, post.id()).await.remove(0);
    let b = save(&h, post.id(), author, "intro\nkeep this\nshared end\nnew line").await;

    let forward = h
        .services
        .revision_queries
        .compare(CompareRevisionsQuery {
            source: a.id(),
            target: b.id(),
        })
        .await
        .unwrap()
        .diff;
    let backward = h
        .services
        .revision_queries
        .compare(CompareRevisionsQuery {
            source: b.id(),
            target: a.id(),
        })
        .await
        .unwrap()
        .diff;

    assert_eq!(forward.stats.lines_changed, backward.stats.lines_changed);
    assert_eq!(forward.stats.lines_added, backward.stats.lines_removed);
    assert_eq!(forward.stats.lines_removed, backward.stats.lines_added);

    let mut forward_positions: Vec<_> = forward
        .segments
        .iter()
        .map(|s| (s.tag, s.old_line, s.new_line))
        .collect();
    let mut mirrored: Vec<_> = backward
        .segments
        .iter()
        .map(|s| (s.tag.mirrored(), s.new_line, s.old_line))
        .collect();
    forward_positions.sort_by_key(|(_, old, new)| (*old, *new));
    mirrored.sort_by_key(|(_, old, new)| (*old, *new));
    assert_eq!(forward_positions, mirrored);
}

#[tokio::test]
async fn comparing_revisions_of_different_posts_is_invalid() {
    let h = harness();
    let author = UserId::generate();
    let one = create(&h, author, "first post").await;
    let two = create(&h, author, "second post").await;
    let a = history(&h, one.id()).await.remove(0);
    let b = history(&h, two.id()).await.remove(0);

    let err = h
        .services
        .revision_queries
        .compare(CompareRevisionsQuery {
            source: a.id(),
            target: b.id(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidOperation(_)));
}

#[tokio::test]
async fn live_content_is_compared_as_revision_zero() {
    let h = harness();
    let author = UserId::generate();
    let post = create(&h, author, "Hello world").await;
    let first = history(&h, post.id()).await.remove(0);
    save(&h, post.id(), author, "Hello world\nP.S.").await;

    let comparison = h
        .services
        .revision_queries
        .compare_with_live(CompareWithLiveQuery {
            post_id: post.id(),
            revision_id: first.id(),
        })
        .await
        .unwrap();

    assert!(comparison.target.is_live());
    assert_eq!(comparison.target.revision_number, 0);
    assert_eq!(comparison.diff.stats.lines_added, 1);
}

#[tokio::test]
async fn revision_numbers_increase_without_gaps() {
    let h = harness();
    let author = UserId::generate();
    let post = create(&h, author, "v1").await;
    for n in 2..=5 {
        h.services
            .revision_commands
            .create_revision(CreateRevisionCommand {
                post_id: post.id(),
                editor_id: author,
                content: format!("v{n}"),
            })
            .await
            .unwrap();
    }

    let numbers: Vec<u32> = history(&h, post.id())
        .await
        .iter()
        .map(|r| r.revision_number().value())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn racing_writer_gets_a_conflict() {
    let mut racing = None;
    let h = harness_with(|repositories| {
        let wrapped = Arc::new(RacingRevisionRepository::new(repositories.revisions));
        racing = Some(Arc::clone(&wrapped));
        Repositories {
            posts: repositories.posts,
            revisions: wrapped,
        }
    });
    let racing = racing.unwrap();

    let author = UserId::generate();
    let post = create(&h, author, "base").await;
    racing.arm();

    let err = h
        .services
        .revision_commands
        .create_revision(CreateRevisionCommand {
            post_id: post.id(),
            editor_id: author,
            content: "mine".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    let numbers: Vec<u32> = history(&h, post.id())
        .await
        .iter()
        .map(|r| r.revision_number().value())
        .collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn restore_is_undoable() {
    let h = harness();
    let author = UserId::generate();
    let editor = UserId::generate();
    let post = create(&h, author, "version one").await;
    let r1 = history(&h, post.id()).await.remove(0);
    save(&h, post.id(), author, "version two").await;
    save(&h, post.id(), author, "version three").await;

    let restored = h
        .services
        .revision_commands
        .restore(RestoreRevisionCommand {
            revision_id: r1.id(),
            actor_id: editor,
        })
        .await
        .unwrap();
    assert_eq!(restored.content().as_str(), "version one");

    let revisions = history(&h, post.id()).await;
    let snapshot = revisions.last().unwrap();
    assert_eq!(snapshot.revision_number().value(), 4);
    assert_eq!(snapshot.content().as_str(), "version three");
    assert_eq!(snapshot.author_id(), editor);

    let undone = h
        .services
        .revision_commands
        .restore(RestoreRevisionCommand {
            revision_id: snapshot.id(),
            actor_id: editor,
        })
        .await
        .unwrap();
    assert_eq!(undone.content().as_str(), "version three");
    assert_eq!(history(&h, post.id()).await.len(), 5);
}

#[tokio::test]
async fn restoring_current_content_still_records_history() {
    let h = harness();
    let author = UserId::generate();
    let post = create(&h, author, "same").await;
    let r1 = history(&h, post.id()).await.remove(0);
    h.recorder.clear();

    let restored = h
        .services
        .revision_commands
        .restore(RestoreRevisionCommand {
            revision_id: r1.id(),
            actor_id: author,
        })
        .await
        .unwrap();

    assert_eq!(restored.content().as_str(), "same");
    assert_eq!(restored.etag(), post.etag());
    assert_eq!(history(&h, post.id()).await.len(), 2);
    assert_eq!(
        h.recorder.kinds(),
        vec![
            folio_core::domain::events::EventKind::RevisionCreated,
            folio_core::domain::events::EventKind::PostRestored,
        ]
    );
}

#[tokio::test]
async fn restore_on_deleted_post_is_rejected() {
    let h = harness();
    let author = UserId::generate();
    let post = create(&h, author, "doomed").await;
    let r1 = history(&h, post.id()).await.remove(0);
    h.services
        .post_commands
        .delete_post(DeletePostCommand {
            post_id: post.id(),
            actor_id: author,
        })
        .await
        .unwrap();

    let err = h
        .services
        .revision_commands
        .restore(RestoreRevisionCommand {
            revision_id: r1.id(),
            actor_id: author,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidOperation(_)));
    assert_eq!(h.store.revision_count().await, 1);
}

#[tokio::test]
async fn unknown_revision_is_not_found() {
    let h = harness();
    let err = h
        .services
        .revision_commands
        .restore(RestoreRevisionCommand {
            revision_id: folio_core::domain::revision::RevisionId::generate(),
            actor_id: UserId::generate(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));
}

#[tokio::test]
async fn history_survives_post_deletion_and_rejects_rewrites() {
    let h = harness();
    let author = UserId::generate();
    let post = create(&h, author, "kept").await;
    save(&h, post.id(), author, "kept forever").await;
    h.services
        .post_commands
        .delete_post(DeletePostCommand {
            post_id: post.id(),
            actor_id: author,
        })
        .await
        .unwrap();

    let recorded = history(&h, post.id()).await;
    assert_eq!(recorded.len(), 2);
    for revision in &recorded {
        let update = h.repositories.revisions.update(revision).await;
        assert!(matches!(update, Err(DomainError::InvalidOperation(_))));
        let delete = h.repositories.revisions.delete(revision).await;
        assert!(matches!(delete, Err(DomainError::InvalidOperation(_))));
    }
    assert_eq!(h.store.revision_count().await, 2);
}
