use crate::client::{
    object,
    request_builder::{wrap_request_builder, BaseRequestBuilderContainer, RequestBuilder},
};

/// A builder type for a show's watched progress. Hidden seasons and specials are excluded by default; specials are
/// counted into the totals by default.
pub struct ProgressRequestBuilder<TClient, TResponse, TReturn = TResponse>(RequestBuilder<TClient, TResponse, TReturn>);

wrap_request_builder!(ProgressRequestBuilder, |builder| builder
    .set_query(object::PROGRESS_HIDDEN_QUERY, "false")
    .set_query(object::PROGRESS_SPECIALS_QUERY, "false")
    .set_query(object::PROGRESS_COUNT_SPECIALS_QUERY, "true"));

impl<TClient, TResponse, TReturn> ProgressRequestBuilder<TClient, TResponse, TReturn> {
    /// Include seasons the user has hidden.
    pub fn hidden(self, hidden: bool) -> Self {
        self.set_query(object::PROGRESS_HIDDEN_QUERY, bool_str(hidden))
    }

    /// Include specials as season 0.
    pub fn specials(self, specials: bool) -> Self {
        self.set_query(object::PROGRESS_SPECIALS_QUERY, bool_str(specials))
    }

    /// Count specials into the overall `aired` and `completed` totals. Only applies if specials are included.
    pub fn count_specials(self, count_specials: bool) -> Self {
        self.set_query(object::PROGRESS_COUNT_SPECIALS_QUERY, bool_str(count_specials))
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;
    use crate::{
        client::{
            path::RequestPath,
            request_builder::{
                tests::{client, FakeTransport},
                BaseRequestBuilder,
            },
        },
        model::progress::ShowWatchedProgress,
    };

    #[test]
    fn flags_have_defaults_and_can_be_overridden() {
        let path = RequestPath::new("shows").segment("1").fixed("progress/watched");
        let builder = ProgressRequestBuilder::<_, ShowWatchedProgress>::new(
            Method::GET,
            path,
            client(FakeTransport::new(200, "{}")),
        );

        let default_query = builder.to_http_request().unwrap().url.query().map(str::to_owned);
        assert_eq!(default_query.as_deref(), Some("hidden=false&specials=false&count_specials=true"));

        let builder = builder.specials(true).count_specials(false).hidden(true);
        let request = builder.to_http_request().unwrap();

        assert_eq!(request.url.path(), "/shows/1/progress/watched");
        assert_eq!(request.url.query(), Some("hidden=true&specials=true&count_specials=false"));
    }
}
