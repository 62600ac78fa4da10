//! `/tags` endpoints.

use crate::client::{QiitaClient, Subject};
use crate::error::ApiResult;
use crate::http::Transport;
use crate::pagination::Page;
use crate::request::ApiRequest;
use crate::types::{Tag, TagSort};

impl<T: Transport> QiitaClient<T> {
    /// `GET /tags/:tag_id`. Tag ids are case-insensitive on the server.
    pub fn get_tag(&self, tag_id: &str) -> ApiResult<Tag> {
        self.fetch_one(
            ApiRequest::get(&["tags", tag_id]),
            Subject::new("tag", tag_id),
        )
    }

    /// `GET /tags?sort=count|name`
    pub fn get_tags(&self, page: u32, per_page: u32, sort: TagSort) -> ApiResult<Page<Tag>> {
        self.fetch_page(
            ApiRequest::get(&["tags"]).query("sort", sort.as_str()),
            page,
            per_page,
            None,
        )
    }
}
