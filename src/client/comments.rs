use reqwest::Method;

use super::comment_path;
use crate::{
    client::request_builder::{BaseRequestBuilderContainer, PaginatedRequestBuilder, RequestBuilder},
    model::{comment::Comment, page::Page},
};

/// Endpoints for comments. All Trakt clients implement this trait.
pub trait CommentsClient
where
    Self: Clone + Sized,
{
    /// Get a single comment or reply.
    fn comment(&self, comment: u64) -> RequestBuilder<Self, Comment> {
        RequestBuilder::new(Method::GET, comment_path(comment), self.clone())
    }

    /// Get the replies to a comment, oldest first.
    fn comment_replies(&self, comment: u64) -> PaginatedRequestBuilder<Self, Vec<Comment>, Page<Comment>> {
        PaginatedRequestBuilder::new(Method::GET, comment_path(comment).fixed("replies"), self.clone())
    }

    /// Like a comment as the authorized user. Trakt answers with 204 No Content.
    ///
    /// This endpoint requires authorization.
    fn like_comment(&self, comment: u64) -> RequestBuilder<Self, ()> {
        RequestBuilder::new(Method::POST, comment_path(comment).fixed("like"), self.clone()).authorized()
    }

    /// Remove the authorized user's like from a comment. Trakt answers with 204 No Content.
    ///
    /// This endpoint requires authorization.
    fn unlike_comment(&self, comment: u64) -> RequestBuilder<Self, ()> {
        RequestBuilder::new(Method::DELETE, comment_path(comment).fixed("like"), self.clone()).authorized()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header;

    use super::*;
    use crate::client::request_builder::{
        tests::{client, FakeTransport},
        BaseRequestBuilder, WithPagination,
    };

    #[test]
    fn comment_and_replies() {
        let client = client(FakeTransport::new(200, "{}"));

        let comment = client.comment(8).to_http_request().unwrap();
        assert_eq!(comment.url.path(), "/comments/8");
        assert!(!comment.headers.contains_key(header::AUTHORIZATION));

        let replies = client.comment_replies(8).limit(5).to_http_request().unwrap();
        assert_eq!(replies.url.as_str(), "https://api.trakt.tv/comments/8/replies?limit=5");
    }

    #[test]
    fn like_and_unlike() {
        let client = client(FakeTransport::new(204, ""));

        let like = client.like_comment(8).to_http_request().unwrap();
        assert_eq!(like.method, Method::POST);
        assert_eq!(like.url.path(), "/comments/8/like");
        assert_eq!(like.headers[header::CONTENT_LENGTH], "0");
        assert_eq!(like.headers[header::AUTHORIZATION], "Bearer token");

        let unlike = client.unlike_comment(8).to_http_request().unwrap();
        assert_eq!(unlike.method, Method::DELETE);
        assert_eq!(unlike.url.path(), "/comments/8/like");
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn like_with_no_content() {
        use crate::client::request_builder::AsyncRequestBuilder;

        let transport = FakeTransport::new(204, "");
        client(transport.clone()).like_comment(8).send_async().await.unwrap();

        assert_eq!(transport.sent().len(), 1);
    }
}
