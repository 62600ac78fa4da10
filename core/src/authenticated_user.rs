//! `/authenticated_user` endpoints. Both require a token.

use crate::client::QiitaClient;
use crate::error::{ApiError, ApiResult};
use crate::http::Transport;
use crate::pagination::Page;
use crate::request::ApiRequest;
use crate::status::StatusOutcome;
use crate::types::{Item, User};

impl<T: Transport> QiitaClient<T> {
    /// `GET /authenticated_user`: the owner of the configured token.
    pub fn get_authenticated_user(&self) -> ApiResult<User> {
        let request = self.build_request(ApiRequest::get(&["authenticated_user"]))?;
        let reply = self.execute::<User>(request)?;
        match reply.outcome {
            StatusOutcome::Success(_) => reply.into_value(),
            StatusOutcome::Unauthorized => Err(ApiError::Unauthorized),
            _ => Err(reply.unexpected()),
        }
    }

    /// `GET /authenticated_user/items`, private items included.
    pub fn get_authenticated_user_items(&self, page: u32, per_page: u32) -> ApiResult<Page<Item>> {
        self.fetch_page(
            ApiRequest::get(&["authenticated_user", "items"]),
            page,
            per_page,
            None,
        )
    }
}
