use std::borrow::Cow;

use reqwest::Url;

use crate::error::{InvalidRequest, Result};

/// The path of a request, relative to the API base URL. Fixed parts come from the endpoint constants and may contain
/// slashes; dynamic parts come from the caller and must each be a single safe path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestPath {
    parts: Vec<PathPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathPart {
    Fixed(&'static str),
    Segment(Cow<'static, str>),
}

impl RequestPath {
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            parts: vec![PathPart::Fixed(endpoint)],
        }
    }

    /// Append a fixed part of the endpoint path.
    pub fn fixed(mut self, part: &'static str) -> Self {
        self.push_fixed(part);
        self
    }

    /// Append a caller-supplied segment. It is validated when the URL is built.
    pub fn segment<S>(mut self, segment: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.parts.push(PathPart::Segment(segment.into()));
        self
    }

    pub fn push_fixed(&mut self, part: &'static str) {
        self.parts.push(PathPart::Fixed(part));
    }

    /// Append this path to the given base URL.
    pub fn apply_to(&self, url: &mut Url) -> Result<()> {
        let mut segments = Vec::new();
        for part in &self.parts {
            match part {
                PathPart::Fixed(fixed) => segments.extend(fixed.split('/').filter(|s| !s.is_empty())),
                PathPart::Segment(segment) => segments.push(validate_segment(segment)?),
            }
        }

        let base = url.to_string();
        url.path_segments_mut()
            .map_err(|_| InvalidRequest::InvalidBaseUrl(base))?
            .pop_if_empty()
            .extend(segments);

        Ok(())
    }
}

/// Ensure a caller-supplied value is exactly one path segment that won't be reinterpreted by the server.
pub(crate) fn validate_segment(segment: &str) -> Result<&str> {
    let unsafe_segment = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '%' | '\\') || c.is_whitespace() || c.is_control());

    if unsafe_segment {
        Err(InvalidRequest::UnsafePathSegment(segment.to_owned()).into())
    } else {
        Ok(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn build(path: RequestPath) -> Result<String> {
        let mut url = Url::parse("https://api.trakt.tv").unwrap();
        path.apply_to(&mut url)?;
        Ok(url.to_string())
    }

    fn assert_unsafe(segment: &str) {
        let result = build(RequestPath::new("shows").segment(segment.to_owned()));

        assert!(
            matches!(result, Err(Error::InvalidRequest(InvalidRequest::UnsafePathSegment(ref s))) if s == segment),
            "{segment:?} was accepted"
        );
    }

    #[test]
    fn fixed_parts_may_contain_slashes() {
        let path = RequestPath::new("sync/watched").fixed("shows");
        assert_eq!(build(path).unwrap(), "https://api.trakt.tv/sync/watched/shows");
    }

    #[test]
    fn segments_are_interleaved_with_fixed_parts() {
        let path = RequestPath::new("shows")
            .segment("game-of-thrones")
            .fixed("seasons")
            .segment("1")
            .fixed("comments");

        assert_eq!(
            build(path).unwrap(),
            "https://api.trakt.tv/shows/game-of-thrones/seasons/1/comments"
        );
    }

    #[test]
    fn base_url_path_is_kept() {
        let mut url = Url::parse("http://localhost:8080/proxy/").unwrap();
        RequestPath::new("shows").segment("1").apply_to(&mut url).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/proxy/shows/1");
    }

    #[test]
    fn non_ascii_segments_are_percent_encoded() {
        let path = RequestPath::new("shows").segment("pokémon");
        assert_eq!(build(path).unwrap(), "https://api.trakt.tv/shows/pok%C3%A9mon");
    }

    #[test]
    fn unsafe_segments_are_rejected() {
        for segment in ["", ".", "..", "../x", "a/b", "a?b", "a#b", "100%", "a b", "a\nb", "a\\b"] {
            assert_unsafe(segment);
        }
    }

    #[test]
    fn base_url_without_path_is_rejected() {
        let mut url = Url::parse("mailto:someone@example.com").unwrap();
        let result = RequestPath::new("shows").apply_to(&mut url);

        assert!(matches!(
            result,
            Err(Error::InvalidRequest(InvalidRequest::InvalidBaseUrl(_)))
        ));
    }
}
