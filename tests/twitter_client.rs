// tests/twitter_client.rs
use std::sync::Arc;

use news_collector::ingest::providers::twitter::{self, TwitterClient};
use news_collector::ingest::social::{collect_social, SocialCapability, SocialClient, SocialUser};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_user(server: &MockServer, handle: &str, id: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/2/users/by/username/{handle}")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": id, "name": handle, "username": handle}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn resolves_user_and_reads_timeline() {
    let server = MockServer::start().await;
    mount_user(&server, "karpathy", "33836629").await;
    Mock::given(method("GET"))
        .and(path("/2/users/33836629/tweets"))
        .and(query_param("max_results", "10"))
        .and(query_param("tweet.fields", "created_at"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "1846000000000000001", "text": "new tokenizer &amp; notes", "created_at": "2026-10-15T10:00:00.000Z"},
                {"id": "1846000000000000000", "text": "older post"}
            ],
            "meta": {"result_count": 2}
        })))
        .mount(&server)
        .await;

    let client = TwitterClient::with_base_url("test-token".into(), &server.uri());
    let user = client.resolve_user("karpathy").await.unwrap().unwrap();
    assert_eq!(user.id, "33836629");

    let posts = client.recent_posts(&user).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].created_at.as_deref(), Some("2026-10-15T10:00:00.000Z"));
    assert!(posts[1].created_at.is_none());

    let cap = SocialCapability::Available(Arc::new(client));
    let items = collect_social(&cap, &["karpathy".to_string()]).await.items();
    assert_eq!(
        items[0].url,
        "https://twitter.com/karpathy/status/1846000000000000001"
    );
    assert_eq!(items[0].text, "new tokenizer & notes");
}

#[tokio::test]
async fn unknown_user_resolves_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/users/by/username/nobody_here"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"title": "Not Found Error", "detail": "Could not find user with username: [nobody_here]."}]
        })))
        .mount(&server)
        .await;

    let client = TwitterClient::with_base_url("test-token".into(), &server.uri());
    assert!(client.resolve_user("nobody_here").await.unwrap().is_none());
}

#[tokio::test]
async fn empty_timeline_has_no_data_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2/users/42/tweets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"meta": {"result_count": 0}})),
        )
        .mount(&server)
        .await;

    let client = TwitterClient::with_base_url("test-token".into(), &server.uri());
    let user = SocialUser {
        id: "42".into(),
        handle: "quiet".into(),
    };
    assert!(client.recent_posts(&user).await.unwrap().is_empty());
}

#[tokio::test]
async fn http_errors_surface_as_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = TwitterClient::with_base_url("bad-token".into(), &server.uri());
    assert!(client.resolve_user("karpathy").await.is_err());
}

#[serial_test::serial]
#[test]
fn capability_follows_bearer_token_env() {
    std::env::remove_var(twitter::ENV_BEARER_TOKEN);
    assert!(matches!(
        twitter::capability_from_env(),
        SocialCapability::Unavailable { .. }
    ));

    std::env::set_var(twitter::ENV_BEARER_TOKEN, "tok");
    assert!(matches!(
        twitter::capability_from_env(),
        SocialCapability::Available(_)
    ));
    std::env::remove_var(twitter::ENV_BEARER_TOKEN);
}
