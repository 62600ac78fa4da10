//! `/items` endpoints.

use serde::de::IgnoredAny;

use crate::client::{QiitaClient, Subject};
use crate::error::ApiResult;
use crate::http::Transport;
use crate::pagination::Page;
use crate::request::ApiRequest;
use crate::types::{Item, ItemDraft, User};

impl<T: Transport> QiitaClient<T> {
    /// `GET /items/:item_id`
    pub fn get_item(&self, item_id: &str) -> ApiResult<Item> {
        self.fetch_one(
            ApiRequest::get(&["items", item_id]),
            Subject::new("item", item_id),
        )
    }

    /// `GET /items`, newest first.
    pub fn get_items(&self, page: u32, per_page: u32) -> ApiResult<Page<Item>> {
        self.fetch_page(ApiRequest::get(&["items"]), page, per_page, None)
    }

    /// `GET /items?query=...`, using Qiita's search syntax (`tag:rust`,
    /// `user:muiscript`, ...).
    pub fn search_items(&self, query: &str, page: u32, per_page: u32) -> ApiResult<Page<Item>> {
        self.fetch_page(
            ApiRequest::get(&["items"]).query("query", query),
            page,
            per_page,
            None,
        )
    }

    /// `POST /items`. Requires a token.
    pub fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        self.mutate_returning(
            ApiRequest::post(&["items"]).json(draft)?,
            None,
            "title, body or tags may be empty or invalid",
        )
    }

    /// `PATCH /items/:item_id`. Requires a token.
    pub fn update_item(&self, item_id: &str, draft: &ItemDraft) -> ApiResult<Item> {
        self.mutate_returning(
            ApiRequest::patch(&["items", item_id]).json(draft)?,
            Some(Subject::new("item", item_id)),
            "you may not be allowed to edit this item, or a required field is empty",
        )
    }

    /// `DELETE /items/:item_id`. Requires a token.
    pub fn delete_item(&self, item_id: &str) -> ApiResult<()> {
        self.mutate::<IgnoredAny>(
            ApiRequest::delete(&["items", item_id]),
            Some(Subject::new("item", item_id)),
            "you may not be allowed to delete this item",
        )?;
        Ok(())
    }

    /// `GET /items/:item_id/stockers`
    pub fn get_item_stockers(
        &self,
        item_id: &str,
        page: u32,
        per_page: u32,
    ) -> ApiResult<Page<User>> {
        self.fetch_page(
            ApiRequest::get(&["items", item_id, "stockers"]),
            page,
            per_page,
            Some(Subject::new("item", item_id)),
        )
    }

    /// `GET /items/:item_id/stock`. Requires a token.
    ///
    /// `Ok(false)` is also returned when `item_id` does not exist.
    pub fn is_stocked_item(&self, item_id: &str) -> ApiResult<bool> {
        self.check(ApiRequest::get(&["items", item_id, "stock"]))
    }

    /// `PUT /items/:item_id/stock`. Requires a token.
    pub fn stock_item(&self, item_id: &str) -> ApiResult<()> {
        self.mutate::<IgnoredAny>(
            ApiRequest::put(&["items", item_id, "stock"]),
            Some(Subject::new("item", item_id)),
            "the item may already be stocked",
        )?;
        Ok(())
    }

    /// `DELETE /items/:item_id/stock`. Requires a token.
    pub fn unstock_item(&self, item_id: &str) -> ApiResult<()> {
        self.mutate::<IgnoredAny>(
            ApiRequest::delete(&["items", item_id, "stock"]),
            Some(Subject::new("item", item_id)),
            "the item may not be stocked yet",
        )?;
        Ok(())
    }
}
