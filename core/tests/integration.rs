//! End-to-end run against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client through
//! `UreqTransport` over real HTTP. Checks that URL building, headers,
//! pagination headers and status mapping agree with an actual server.

use std::time::Duration;

use mock_server::{SEEDED_ITEM, TEST_TOKEN, TEST_USER};
use qiita_core::{ApiError, ClientConfig, CommentDraft, ItemDraft, ItemTag, QiitaClient, TagSort};

/// Bind a random port and serve the mock from a background thread.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api/v2")
}

fn config(base_url: &str) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5))
}

#[test]
fn api_lifecycle() {
    let base_url = start_server();
    let client = QiitaClient::new(config(&base_url).with_access_token(TEST_TOKEN)).unwrap();
    let anonymous = QiitaClient::new(config(&base_url)).unwrap();

    // Users.
    let me = client.get_authenticated_user().unwrap();
    assert_eq!(me.id, TEST_USER);
    assert_eq!(client.get_user("mizchi").unwrap().id, "mizchi");
    assert!(matches!(
        client.get_user("nobody").unwrap_err(),
        ApiError::NotFound { resource: "user", .. }
    ));
    assert!(matches!(
        anonymous.get_authenticated_user().unwrap_err(),
        ApiError::Unauthorized
    ));

    // Pagination read from Link and Total-Count.
    let followees = client.get_user_followees(TEST_USER, 2, 5).unwrap();
    assert_eq!(followees.len(), 5);
    assert_eq!(followees.pagination.last_page, 3);
    assert_eq!(followees.pagination.total_count, 12);
    assert_eq!(followees.pagination.next_page(), Some(3));

    let last = client.get_user_followees(TEST_USER, 3, 5).unwrap();
    assert_eq!(last.len(), 2);
    assert!(!last.pagination.has_next());

    let followers = client.get_user_followers(TEST_USER, 1, 20).unwrap();
    assert_eq!(followers.items[0].id, "yaotti");

    let err = client.get_user_followees(TEST_USER, 0, 20).unwrap_err();
    assert!(err.is_validation());

    // Follow round-trip.
    assert!(!client.is_following_user("yaotti").unwrap());
    client.follow_user("yaotti").unwrap();
    assert!(client.is_following_user("yaotti").unwrap());
    assert!(matches!(
        client.follow_user("yaotti").unwrap_err(),
        ApiError::Forbidden { .. }
    ));
    client.unfollow_user("yaotti").unwrap();
    assert!(!client.is_following_user("yaotti").unwrap());
    assert!(matches!(
        anonymous.follow_user("yaotti").unwrap_err(),
        ApiError::Unauthorized
    ));

    // Search before anything new is created.
    let rust = client.search_items("tag:rust", 1, 20).unwrap();
    assert_eq!(rust.pagination.total_count, 1);

    // Item lifecycle.
    let draft = ItemDraft::new(
        "Integration test",
        "# Hello",
        vec![ItemTag::new("Go").with_versions(["1.22"])],
    );
    let created = client.create_item(&draft).unwrap();
    assert_eq!(created.title, "Integration test");
    assert_eq!(created.user.id, TEST_USER);
    assert_eq!(created.tags[0].versions, vec!["1.22".to_string()]);

    let fetched = client.get_item(&created.id).unwrap();
    assert_eq!(fetched.id, created.id);

    let renamed = ItemDraft::new("Renamed", "# Hello", vec![ItemTag::new("Go")]);
    let updated = client.update_item(&created.id, &renamed).unwrap();
    assert_eq!(updated.title, "Renamed");

    let mine = client.get_authenticated_user_items(1, 20).unwrap();
    assert_eq!(mine.items[0].id, created.id);
    assert_eq!(mine.pagination.total_count, 3);

    // Comments on the new item.
    assert!(client.get_item_comments(&created.id).unwrap().is_empty());
    let comment = client
        .create_comment(&created.id, &CommentDraft::new("first"))
        .unwrap();
    assert_eq!(comment.body, "first");
    let edited = client
        .update_comment(&comment.id, &CommentDraft::new("edited"))
        .unwrap();
    assert_eq!(edited.body, "edited");
    assert_eq!(client.get_comment(&comment.id).unwrap().body, "edited");
    client.delete_comment(&comment.id).unwrap();
    assert!(matches!(
        client.get_comment(&comment.id).unwrap_err(),
        ApiError::NotFound { resource: "comment", .. }
    ));

    client.delete_item(&created.id).unwrap();
    assert!(matches!(
        client.get_item(&created.id).unwrap_err(),
        ApiError::NotFound { resource: "item", .. }
    ));
    assert!(matches!(
        client.get_item_comments(&created.id).unwrap_err(),
        ApiError::NotFound { resource: "item", .. }
    ));

    // Stocks.
    assert!(client.is_stocked_item(SEEDED_ITEM).unwrap());
    let stockers = client.get_item_stockers(SEEDED_ITEM, 1, 20).unwrap();
    assert_eq!(stockers.pagination.total_count, 2);
    client.unstock_item(SEEDED_ITEM).unwrap();
    assert!(!client.is_stocked_item(SEEDED_ITEM).unwrap());
    client.stock_item(SEEDED_ITEM).unwrap();
    let stocks = client.get_user_stocks(TEST_USER, 1, 20).unwrap();
    assert_eq!(stocks.items[0].id, SEEDED_ITEM);

    // Thanks on a seeded comment.
    let seeded_comments = client.get_item_comments(SEEDED_ITEM).unwrap();
    let theirs = &seeded_comments[0];
    client.thank_comment(&theirs.id).unwrap();
    assert!(client.thank_comment(&theirs.id).is_err());
    client.unthank_comment(&theirs.id).unwrap();

    // Tags.
    let by_name = client.get_tags(1, 2, TagSort::Name).unwrap();
    assert_eq!(by_name.items[0].id, "Go");
    assert_eq!(by_name.pagination.last_page, 2);
    assert_eq!(client.get_tag("rust").unwrap().id, "Rust");
    let following = client.get_user_following_tags(TEST_USER, 1, 20).unwrap();
    assert_eq!(following.items[0].id, "Rust");

    let items = client.get_user_items(TEST_USER, 1, 20).unwrap();
    assert_eq!(items.pagination.total_count, 2);
}
