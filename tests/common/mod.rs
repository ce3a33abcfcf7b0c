//! Shared setup for the tests that run the client against a mock Trakt server.

#[cfg(feature = "async")]
use ferrotrakt::client::{AsyncHttpClient, TraktClient, TraktClientBuilder};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const CLIENT_ID: &str = "test-client-id";
#[allow(dead_code)]
pub const ACCESS_TOKEN: &str = "test-access-token";

/// A client pointed at the mock server, with an access token.
#[cfg(feature = "async")]
#[allow(dead_code)]
pub fn client(server: &MockServer) -> TraktClient<AsyncHttpClient> {
    TraktClientBuilder::new(CLIENT_ID)
        .base_url(server.uri())
        .access_token(ACCESS_TOKEN)
        .build_async()
        .expect("failed to build client")
}

/// A client pointed at the mock server, without any credentials.
#[cfg(feature = "async")]
#[allow(dead_code)]
pub fn anonymous_client(server: &MockServer) -> TraktClient<AsyncHttpClient> {
    TraktClientBuilder::new(CLIENT_ID)
        .base_url(server.uri())
        .build_async()
        .expect("failed to build client")
}

/// Mount a mock answering GET requests to the given path that carry the API headers.
pub async fn mock_get(server: &MockServer, request_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(request_path))
        .and(header("trakt-api-key", CLIENT_ID))
        .and(header("trakt-api-version", "2"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[allow(dead_code)] // not every test file uses this
pub fn user_json(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "private": false,
        "name": null,
        "vip": false,
        "vip_ep": false,
        "ids": {"slug": username}
    })
}

#[allow(dead_code)]
pub fn comment_json(id: u64, text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "parent_id": 0,
        "created_at": "2011-03-25T22:35:17.000Z",
        "updated_at": "2011-03-25T22:35:17.000Z",
        "comment": text,
        "spoiler": false,
        "review": false,
        "replies": 1,
        "likes": 0,
        "user_rating": 8,
        "user": user_json("sean")
    })
}
