use folio_core::application::commands::posts::CreatePostCommand;
use folio_core::application::queries::posts::ListPostsQuery;
use folio_core::domain::user::UserId;
use folio_core::{AppConfig, bootstrap};

#[tokio::test]
async fn default_config_boots_on_the_memory_store() {
    let config = AppConfig::from_lookup(|_| None).unwrap();
    let services = bootstrap(&config).await.unwrap();

    let command = CreatePostCommand::builder()
        .author(UserId::generate())
        .title("Booted")
        .content("it works")
        .publish(true)
        .build()
        .unwrap();
    services.post_commands.create_post(command).await.unwrap();

    let listed = services
        .post_queries
        .list_posts(ListPostsQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.total, 1);
    assert_eq!(listed.per_page, 20);
}
