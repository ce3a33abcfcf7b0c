//! Paginated responses.
//!
//! Trakt returns a page of items as a plain JSON array and describes the page in the `X-Pagination-*` response headers.
//! [Page] combines the two. Fetching the following page is up to the caller: pass [Page::next_pagination] to the
//! request builder's `pagination`-function.

use reqwest::header::HeaderMap;

use super::Pagination;

pub(crate) const PAGE_HEADER: &str = "x-pagination-page";
pub(crate) const LIMIT_HEADER: &str = "x-pagination-limit";
pub(crate) const PAGE_COUNT_HEADER: &str = "x-pagination-page-count";
pub(crate) const ITEM_COUNT_HEADER: &str = "x-pagination-item-count";

/// A page of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The number of this page, starting from 1. `None` if Trakt didn't send pagination headers.
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub page_count: Option<u32>,
    pub item_count: Option<u64>,
}

impl<T> Page<T> {
    /// Create a page from decoded items and the response headers they came with. Missing or malformed pagination
    /// headers are ignored.
    pub fn from_headers(items: Vec<T>, headers: &HeaderMap) -> Self {
        Self {
            items,
            page: parse_header(headers, PAGE_HEADER),
            limit: parse_header(headers, LIMIT_HEADER),
            page_count: parse_header(headers, PAGE_COUNT_HEADER),
            item_count: parse_header(headers, ITEM_COUNT_HEADER),
        }
    }

    /// Returns the items in this page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the items in this page while consuming the page.
    pub fn take_items(self) -> Vec<T> {
        self.items
    }

    /// Whether there are pages after this one.
    pub fn has_next(&self) -> bool {
        matches!((self.page, self.page_count), (Some(page), Some(count)) if page < count)
    }

    /// Returns the pagination for the page after this one, if there is one.
    pub fn next_pagination(&self) -> Option<Pagination> {
        if !self.has_next() {
            return None;
        }

        let page = self.page? + 1;
        let limit = self.limit.unwrap_or(self.items.len() as u32);
        Some(Pagination::new(page, limit))
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn parse_header<N>(headers: &HeaderMap, name: &str) -> Option<N>
where
    N: std::str::FromStr,
{
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn headers(page: &'static str, page_count: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(PAGE_HEADER, HeaderValue::from_static(page));
        headers.insert(LIMIT_HEADER, HeaderValue::from_static("10"));
        headers.insert(PAGE_COUNT_HEADER, HeaderValue::from_static(page_count));
        headers.insert(ITEM_COUNT_HEADER, HeaderValue::from_static("25"));
        headers
    }

    #[test]
    fn reads_pagination_headers() {
        let page = Page::from_headers(vec![1, 2, 3], &headers("2", "3"));

        assert_eq!(page.page, Some(2));
        assert_eq!(page.limit, Some(10));
        assert_eq!(page.page_count, Some(3));
        assert_eq!(page.item_count, Some(25));
        assert_eq!(page.next_pagination(), Some(Pagination::new(3, 10)));
    }

    #[test]
    fn last_page_has_no_next() {
        let page = Page::from_headers(vec![1], &headers("3", "3"));

        assert!(!page.has_next());
        assert_eq!(page.next_pagination(), None);
    }

    #[test]
    fn missing_headers_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(PAGE_HEADER, HeaderValue::from_static("not a number"));

        let page = Page::from_headers(vec!["a"], &headers);

        assert_eq!(page.page, None);
        assert_eq!(page.next_pagination(), None);
        assert_eq!(page.take_items(), vec!["a"]);
    }
}
