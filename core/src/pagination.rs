//! Pagination parameters and `Link` / `Total-Count` header extraction.
//!
//! List endpoints answer with a JSON array and describe the collection in
//! headers:
//!
//! ```text
//! Link: <https://qiita.com/api/v2/users?page=1&per_page=20>; rel="first",
//!       <https://qiita.com/api/v2/users?page=2&per_page=20>; rel="next",
//!       <https://qiita.com/api/v2/users?page=100&per_page=20>; rel="last"
//! Total-Count: 329145
//! ```
//!
//! The server never serves more than [`MAX_PAGE`] pages of any collection, so
//! the page advertised by `rel="last"` is clamped to that ceiling.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ApiError, ApiResult};

pub const MIN_PAGE: u32 = 1;
pub const MAX_PAGE: u32 = 100;
pub const MIN_PER_PAGE: u32 = 1;
pub const MAX_PER_PAGE: u32 = 100;

/// Position of a list response within the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    /// Always 1.
    pub first_page: u32,
    pub last_page: u32,
    pub total_count: u64,
}

impl Pagination {
    pub fn has_next(&self) -> bool {
        self.page < self.last_page
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }
}

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Range-check `page` and `per_page` before a request is built.
pub fn validate_pagination(page: u32, per_page: u32) -> ApiResult<()> {
    if !(MIN_PAGE..=MAX_PAGE).contains(&page) {
        return Err(ApiError::Validation(format!(
            "page parameter should be between {MIN_PAGE} and {MAX_PAGE}. got {page}"
        )));
    }
    if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&per_page) {
        return Err(ApiError::Validation(format!(
            "perPage parameter should be between {MIN_PER_PAGE} and {MAX_PER_PAGE}. got {per_page}"
        )));
    }
    Ok(())
}

fn link_entry_regex() -> &'static Regex {
    static LINK_ENTRY: OnceLock<Regex> = OnceLock::new();
    LINK_ENTRY.get_or_init(|| {
        Regex::new(r#"<([^>]*)>.*rel="([^"]*)""#).expect("link entry pattern is valid")
    })
}

/// Parse an RFC 5988 style `Link` header into a relation -> URL map.
///
/// Entries are separated by `", "`. Any entry that does not look like
/// `<url>; rel="name"` makes the whole header invalid.
pub fn parse_link_header(header: &str) -> ApiResult<HashMap<String, Url>> {
    let mut links = HashMap::new();
    for entry in header.split(", ") {
        let caps = link_entry_regex().captures(entry).ok_or_else(|| {
            ApiError::Pagination(format!("unrecognized link entry '{entry}'"))
        })?;
        let url = Url::parse(&caps[1]).map_err(|e| {
            ApiError::Pagination(format!("invalid url in link entry '{entry}': {e}"))
        })?;
        links.insert(caps[2].to_string(), url);
    }
    Ok(links)
}

/// Parse a decimal page number and cap it at [`MAX_PAGE`]. Digit strings too
/// large for any integer type are capped as well.
fn clamp_page(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let page = value.parse::<u64>().unwrap_or(u64::MAX);
    Some(page.min(u64::from(MAX_PAGE)) as u32)
}

/// Build the pagination summary for a list response from its headers.
///
/// `lookup` resolves a header name case-insensitively.
pub fn extract_pagination<'a, F>(lookup: F, page: u32, per_page: u32) -> ApiResult<Pagination>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let link = lookup("link").ok_or_else(|| ApiError::Pagination("missing link header".into()))?;
    let links = parse_link_header(link)?;

    let last = links
        .get("last")
        .ok_or_else(|| ApiError::Pagination("link header has no rel=\"last\"".into()))?;
    let last_page = last
        .query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| clamp_page(&value))
        .ok_or_else(|| {
            ApiError::Pagination(format!("no numeric page parameter in last link '{last}'"))
        })?;

    let total_count = lookup("total-count")
        .ok_or_else(|| ApiError::Pagination("missing total-count header".into()))?
        .trim()
        .parse::<u64>()
        .map_err(|e| ApiError::Pagination(format!("invalid total-count header: {e}")))?;

    Ok(Pagination {
        page,
        per_page,
        first_page: MIN_PAGE,
        last_page,
        total_count,
    })
}
