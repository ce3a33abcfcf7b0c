//! How failures at each stage of a request surface to the caller.

#![cfg(feature = "async")]

mod common;

use std::time::Duration;

use common::{anonymous_client, client, mock_get};
use ferrotrakt::{error::InvalidRequest, prelude::*, Error};
use wiremock::{matchers::any, Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn unauthorized_response() {
    let server = MockServer::start().await;
    mock_get(&server, "/sync/last_activities", ResponseTemplate::new(401)).await;

    let result = client(&server).last_activities().send_async().await;

    match result {
        Err(Error::Server { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, Some("App not authorized. Please sign in again."));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn cloudflare_errors() {
    for status in [520, 521, 522] {
        let server = MockServer::start().await;
        mock_get(&server, "/shows/x", ResponseTemplate::new(status)).await;

        let result = client(&server).show_summary("x").send_async().await;

        assert!(
            matches!(
                result,
                Err(Error::Server { status: s, message: Some("CloudFlare error. Please try again later.") }) if s == status
            ),
            "status {status}"
        );
    }
}

#[tokio::test]
async fn not_found_response() {
    let server = MockServer::start().await;
    mock_get(&server, "/comments/1", ResponseTemplate::new(404)).await;

    let result = client(&server).comment(1).send_async().await;
    assert!(matches!(result, Err(Error::Server { status: 404, message: Some("API not found") })));
}

#[tokio::test]
async fn decoding_error_names_the_field() {
    let server = MockServer::start().await;
    mock_get(
        &server,
        "/shows/x/seasons/1/episodes/1",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "season": 1,
            "number": 1,
            "title": "Winter Is Coming",
            "ids": {"trakt": "not-a-number"}
        })),
    )
    .await;

    let result = client(&server).episode_summary("x", 1, 1).send_async().await;

    match result {
        Err(Error::Decoding { field_path, .. }) => assert_eq!(field_path, "ids.trakt"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn empty_body_where_content_is_expected() {
    let server = MockServer::start().await;
    mock_get(&server, "/movies/x/stats", ResponseTemplate::new(204)).await;

    let result = client(&server).movie_stats("x").send_async().await;
    assert!(matches!(result, Err(Error::EmptyResponse)));
}

#[tokio::test]
async fn missing_credentials_send_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = anonymous_client(&server).account_settings().send_async().await;

    assert!(matches!(
        result,
        Err(Error::InvalidRequest(InvalidRequest::MissingCredentials))
    ));
}

#[tokio::test]
async fn unsafe_path_segment_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for show in ["../x", "a/b", ""] {
        let result = client(&server).seasons(show).send_async().await;

        assert!(
            matches!(result, Err(Error::InvalidRequest(InvalidRequest::UnsafePathSegment(_)))),
            "{show:?}"
        );
    }
}

#[tokio::test]
async fn network_failure() {
    // nothing listens on port 1
    let client = TraktClientBuilder::new(common::CLIENT_ID)
        .base_url("http://127.0.0.1:1")
        .build_async()
        .unwrap();

    let result = client.show_summary("x").send_async().await;
    assert!(matches!(result, Err(Error::Network(_))));
}

#[tokio::test]
async fn cancelled_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let result = client(&server)
        .show_summary("x")
        .send_async_or_cancel(tokio::time::sleep(Duration::from_millis(50)))
        .await;

    assert!(matches!(result, Err(Error::Cancelled)));
}
