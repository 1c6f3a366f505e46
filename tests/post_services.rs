mod support;

use support::*;

use folio_core::application::ApplicationError;
use folio_core::application::commands::posts::{
    DeletePostCommand, RetitlePostCommand, SavePostContentCommand, SetPublishStateCommand,
};
use folio_core::application::queries::posts::{GetPostBySlugQuery, GetPostQuery, ListPostsQuery};
use folio_core::domain::entity::Entity;
use folio_core::domain::errors::{DomainError, ErrorClass};
use folio_core::domain::post::{ETag, PostStatus};
use folio_core::domain::user::UserId;

#[tokio::test]
async fn create_post_assigns_unique_slugs_and_first_revision() {
    let h = harness();
    let author = UserId::generate();
    let first = h
        .services
        .post_commands
        .create_post(create_command(author, "Hello World", "one"))
        .await
        .unwrap();
    let second = h
        .services
        .post_commands
        .create_post(create_command(author, "Hello World", "two"))
        .await
        .unwrap();

    assert_eq!(first.slug().as_str(), "hello-world");
    assert_eq!(second.slug().as_str(), "hello-world-1");
    assert_eq!(first.status(), PostStatus::Draft);
    assert_eq!(h.store.revision_count().await, 2);
}

#[tokio::test]
async fn unsluggable_title_falls_back_to_clock_stamp() {
    let h = harness();
    let author = UserId::generate();
    let first = h
        .services
        .post_commands
        .create_post(create_command(author, "!!!", "punctuation only"))
        .await
        .unwrap();
    let second = h
        .services
        .post_commands
        .create_post(create_command(author, "???", "more punctuation"))
        .await
        .unwrap();

    let stamp = fixed_now().timestamp();
    assert_eq!(first.slug().as_str(), format!("post-{stamp}"));
    assert_eq!(second.slug().as_str(), format!("post-{stamp}-1"));
}

#[tokio::test]
async fn create_rejects_blank_content() {
    let h = harness();
    let err = h
        .services
        .post_commands
        .create_post(create_command(UserId::generate(), "Title", "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
    assert_eq!(err.class(), ErrorClass::BadRequest);
    assert_eq!(h.store.post_count().await, 0);
}

#[tokio::test]
async fn save_content_updates_etag_and_skips_unchanged() {
    let h = harness();
    let author = UserId::generate();
    let post = h
        .services
        .post_commands
        .create_post(create_command(author, "Etag", "before"))
        .await
        .unwrap();

    let saved = h
        .services
        .post_commands
        .save_content(SavePostContentCommand {
            post_id: post.id(),
            editor_id: author,
            content: "after".into(),
            if_match: Some(post.etag().to_string()),
        })
        .await
        .unwrap();
    assert_eq!(saved.post.etag(), &ETag::of(saved.post.content()));
    assert_ne!(saved.post.etag(), post.etag());
    assert_eq!(saved.revision.unwrap().revision_number().value(), 2);

    let unchanged = h
        .services
        .post_commands
        .save_content(SavePostContentCommand {
            post_id: post.id(),
            editor_id: author,
            content: "after".into(),
            if_match: None,
        })
        .await
        .unwrap();
    assert!(unchanged.revision.is_none());
    assert_eq!(h.store.revision_count().await, 2);
}

#[tokio::test]
async fn retitle_regenerates_slug() {
    let h = harness();
    let author = UserId::generate();
    let post = h
        .services
        .post_commands
        .create_post(create_command(author, "Old Name", "body"))
        .await
        .unwrap();

    let renamed = h
        .services
        .post_commands
        .retitle_post(RetitlePostCommand {
            post_id: post.id(),
            editor_id: author,
            title: "New Name".into(),
        })
        .await
        .unwrap();
    assert_eq!(renamed.slug().as_str(), "new-name");

    let found = h
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery {
            slug: "new-name".into(),
            include_revisions: false,
        })
        .await
        .unwrap();
    assert_eq!(found.id(), post.id());
}

#[tokio::test]
async fn list_posts_hides_drafts_and_reports_totals() {
    let h = harness();
    let author = UserId::generate();
    for i in 0..7 {
        let post = h
            .services
            .post_commands
            .create_post(create_command(author, &format!("Entry {i}"), "text"))
            .await
            .unwrap();
        if i < 5 {
            h.services
                .post_commands
                .set_publish_state(SetPublishStateCommand {
                    post_id: post.id(),
                    actor_id: author,
                    publish: true,
                })
                .await
                .unwrap();
        }
    }

    let page = h
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            page: 2,
            per_page: 2,
            ..ListPostsQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_pages, 3);
    assert!(page.items.iter().all(|post| post.is_published()));

    let everything = h
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            include_drafts: true,
            per_page: 1000,
            ..ListPostsQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(everything.total, 7);
    assert_eq!(everything.per_page, 100);
    assert_eq!(everything.page, 1);
}

#[tokio::test]
async fn get_post_loads_history_and_hides_deleted() {
    let h = harness();
    let author = UserId::generate();
    let post = h
        .services
        .post_commands
        .create_post(create_command(author, "History", "v1"))
        .await
        .unwrap();
    h.services
        .post_commands
        .save_content(SavePostContentCommand {
            post_id: post.id(),
            editor_id: author,
            content: "v2".into(),
            if_match: None,
        })
        .await
        .unwrap();

    let loaded = h
        .services
        .post_queries
        .get_post(GetPostQuery {
            id: post.id(),
            include_revisions: true,
            include_author: false,
        })
        .await
        .unwrap();
    let contents: Vec<&str> = loaded
        .revisions()
        .unwrap()
        .iter()
        .map(|r| r.content().as_str())
        .collect();
    assert_eq!(contents, vec!["v1", "v2"]);

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
        .post_queries
        .get_post(GetPostQuery::by_id(post.id()))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.class(), ErrorClass::NotFound);

    let twice = h
        .services
        .post_commands
        .delete_post(DeletePostCommand {
            post_id: post.id(),
            actor_id: author,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        twice,
        ApplicationError::Domain(DomainError::InvalidOperation(_))
    ));
}

#[tokio::test]
async fn store_outage_maps_to_unavailable() {
    let h = harness();
    h.store.set_available(false);
    let err = h
        .services
        .post_queries
        .list_posts(ListPostsQuery::default())
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Unavailable);
}
