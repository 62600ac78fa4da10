//! `/users` endpoints.

use serde::de::IgnoredAny;

use crate::client::{QiitaClient, Subject};
use crate::error::ApiResult;
use crate::http::Transport;
use crate::pagination::Page;
use crate::request::ApiRequest;
use crate::types::{Item, Tag, User};

impl<T: Transport> QiitaClient<T> {
    /// `GET /users/:user_id`
    pub fn get_user(&self, user_id: &str) -> ApiResult<User> {
        self.fetch_one(
            ApiRequest::get(&["users", user_id]),
            Subject::new("user", user_id),
        )
    }

    /// `GET /users`, newest first.
    pub fn get_users(&self, page: u32, per_page: u32) -> ApiResult<Page<User>> {
        self.fetch_page(ApiRequest::get(&["users"]), page, per_page, None)
    }

    /// `GET /users/:user_id/followees`: users that `user_id` follows.
    pub fn get_user_followees(
        &self,
        user_id: &str,
        page: u32,
        per_page: u32,
    ) -> ApiResult<Page<User>> {
        self.fetch_page(
            ApiRequest::get(&["users", user_id, "followees"]),
            page,
            per_page,
            Some(Subject::new("user", user_id)),
        )
    }

    /// `GET /users/:user_id/followers`
    pub fn get_user_followers(
        &self,
        user_id: &str,
        page: u32,
        per_page: u32,
    ) -> ApiResult<Page<User>> {
        self.fetch_page(
            ApiRequest::get(&["users", user_id, "followers"]),
            page,
            per_page,
            Some(Subject::new("user", user_id)),
        )
    }

    /// `GET /users/:user_id/items`
    pub fn get_user_items(
        &self,
        user_id: &str,
        page: u32,
        per_page: u32,
    ) -> ApiResult<Page<Item>> {
        self.fetch_page(
            ApiRequest::get(&["users", user_id, "items"]),
            page,
            per_page,
            Some(Subject::new("user", user_id)),
        )
    }

    /// `GET /users/:user_id/stocks`: items the user has stocked.
    pub fn get_user_stocks(
        &self,
        user_id: &str,
        page: u32,
        per_page: u32,
    ) -> ApiResult<Page<Item>> {
        self.fetch_page(
            ApiRequest::get(&["users", user_id, "stocks"]),
            page,
            per_page,
            Some(Subject::new("user", user_id)),
        )
    }

    /// `GET /users/:user_id/following_tags`
    pub fn get_user_following_tags(
        &self,
        user_id: &str,
        page: u32,
        per_page: u32,
    ) -> ApiResult<Page<Tag>> {
        self.fetch_page(
            ApiRequest::get(&["users", user_id, "following_tags"]),
            page,
            per_page,
            Some(Subject::new("user", user_id)),
        )
    }

    /// `GET /users/:user_id/following`. Requires a token.
    ///
    /// `Ok(false)` is also returned when `user_id` does not exist.
    pub fn is_following_user(&self, user_id: &str) -> ApiResult<bool> {
        self.check(ApiRequest::get(&["users", user_id, "following"]))
    }

    /// `PUT /users/:user_id/following`. Requires a token.
    pub fn follow_user(&self, user_id: &str) -> ApiResult<()> {
        self.mutate::<IgnoredAny>(
            ApiRequest::put(&["users", user_id, "following"]),
            Some(Subject::new("user", user_id)),
            "the user may already be followed, or may be yourself",
        )?;
        Ok(())
    }

    /// `DELETE /users/:user_id/following`. Requires a token.
    pub fn unfollow_user(&self, user_id: &str) -> ApiResult<()> {
        self.mutate::<IgnoredAny>(
            ApiRequest::delete(&["users", user_id, "following"]),
            Some(Subject::new("user", user_id)),
            "the user may not be followed yet",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::*;
    use crate::error::ApiError;
    use crate::http::stub::StubTransport;
    use crate::http::HttpMethod;

    const USERS: &str = r#"[
        {"id": "mizchi", "permanent_id": 1, "name": "mizchi", "followers_count": 9000},
        {"id": "yaotti", "permanent_id": 2, "name": "Hiroshige Umino"}
    ]"#;

    #[test]
    fn get_user_success() {
        let stub = StubTransport::new().respond(
            200,
            &[],
            r#"{"id":"muiscript","permanent_id":159260,"name":"","items_count":12}"#,
        );
        let user = client(&stub).get_user("muiscript").unwrap();
        assert_eq!(user.id, "muiscript");
        assert_eq!(user.permanent_id, 159260);
        assert_eq!(stub.last_request().url, format!("{BASE}/users/muiscript"));
    }

    #[test]
    fn get_user_with_null_profile_image() {
        let stub = StubTransport::new().respond(
            200,
            &[],
            r#"{"id":"x","permanent_id":1,"profile_image_url":null,"team_only":false}"#,
        );
        let user = client(&stub).get_user("x").unwrap();
        assert_eq!(user.profile_image_url, "");
    }

    #[test]
    fn get_user_without_id_is_a_decode_error() {
        let stub = StubTransport::new().respond(200, &[], "{}");
        let err = client(&stub).get_user("x").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn get_user_not_found() {
        let stub = StubTransport::new().respond(404, &[], r#"{"message":"Not found","type":"not_found"}"#);
        let err = client(&stub).get_user("nonexistent").unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource: "user", .. }));
        assert!(err.to_string().contains("'nonexistent' not found"));
    }

    #[test]
    fn get_user_unknown_status() {
        let stub = StubTransport::new().respond(500, &[], "boom");
        let err = client(&stub).get_user("muiscript").unwrap_err();
        assert!(matches!(err, ApiError::Unknown { status: 500, .. }));
    }

    #[test]
    fn get_users_reads_pagination() {
        let stub =
            StubTransport::new().respond_with_headers(200, link_headers("users", 7, 2, 11), USERS);
        let page = client(&stub).get_users(3, 2).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.items[0].id, "mizchi");
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.pagination.per_page, 2);
        assert_eq!(page.pagination.first_page, 1);
        assert_eq!(page.pagination.last_page, 7);
        assert_eq!(page.pagination.total_count, 11);
        assert_eq!(
            stub.last_request().url,
            format!("{BASE}/users?page=3&per_page=2")
        );
    }

    #[test]
    fn get_users_rejects_out_of_range_without_sending() {
        let stub = StubTransport::new();
        let client = client(&stub);
        for (page, per_page) in [(0, 20), (101, 20), (1, 0), (1, 101)] {
            let err = client.get_users(page, per_page).unwrap_err();
            assert!(err.is_validation(), "({page}, {per_page})");
        }
        assert!(stub.requests().is_empty());
    }

    #[test]
    fn followees_page_past_last_is_empty_with_true_bounds() {
        let stub = StubTransport::new().respond_with_headers(
            200,
            link_headers("users/muiscript/followees", 6, 2, 11),
            "[]",
        );
        let page = client(&stub).get_user_followees("muiscript", 10, 2).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.pagination.page, 10);
        assert_eq!(page.pagination.last_page, 6);
        assert_eq!(page.pagination.total_count, 11);
        assert_eq!(
            stub.last_request().url,
            format!("{BASE}/users/muiscript/followees?page=10&per_page=2")
        );
    }

    #[test]
    fn followers_of_missing_user() {
        let stub = StubTransport::new().respond(404, &[], "");
        let err = client(&stub).get_user_followers("ghost", 1, 20).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn following_tags_and_stocks_hit_nested_paths() {
        let stub = StubTransport::new()
            .respond_with_headers(
                200,
                link_headers("users/muiscript/following_tags", 1, 20, 1),
                r#"[{"id":"Rust","icon_url":null,"items_count":10,"followers_count":3}]"#,
            )
            .respond_with_headers(200, link_headers("users/muiscript/stocks", 1, 20, 0), "[]");
        let client = client(&stub);

        let tags = client.get_user_following_tags("muiscript", 1, 20).unwrap();
        assert_eq!(tags.items[0].id, "Rust");
        let stocks = client.get_user_stocks("muiscript", 1, 20).unwrap();
        assert!(stocks.is_empty());

        let requests = stub.requests();
        assert!(requests[0].url.contains("/users/muiscript/following_tags?"));
        assert!(requests[1].url.contains("/users/muiscript/stocks?"));
    }

    #[test]
    fn user_items_of_missing_user() {
        let stub = StubTransport::new()
            .respond_with_headers(200, link_headers("users/muiscript/items", 2, 1, 2), "[]")
            .respond(404, &[], "");
        let client = client(&stub);

        let page = client.get_user_items("muiscript", 1, 1).unwrap();
        assert_eq!(page.pagination.next_page(), Some(2));
        assert_eq!(
            stub.last_request().url,
            format!("{BASE}/users/muiscript/items?page=1&per_page=1")
        );

        let err = client.get_user_items("ghost", 1, 20).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { resource: "user", .. }));
    }

    #[test]
    fn is_following_user_maps_status() {
        let stub = StubTransport::new()
            .respond(204, &[], "")
            .respond(404, &[], "")
            .respond(401, &[], r#"{"message":"Unauthorized","type":"unauthorized"}"#)
            .respond(500, &[], "");
        let client = client(&stub);

        assert!(client.is_following_user("mizchi").unwrap());
        assert!(!client.is_following_user("yaotti").unwrap());
        assert!(matches!(
            client.is_following_user("mizchi").unwrap_err(),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            client.is_following_user("mizchi").unwrap_err(),
            ApiError::Unknown { status: 500, .. }
        ));
        assert!(stub.requests()[0].url.ends_with("/users/mizchi/following"));
    }

    #[test]
    fn follow_and_unfollow() {
        let stub = StubTransport::new()
            .respond(204, &[], "")
            .respond(403, &[], "")
            .respond(204, &[], "");
        let client = client(&stub);

        client.follow_user("mizchi").unwrap();
        let err = client.follow_user("mizchi").unwrap_err();
        assert!(matches!(err, ApiError::Forbidden { .. }));
        assert!(err.to_string().contains("already be followed"));
        client.unfollow_user("mizchi").unwrap();

        let requests = stub.requests();
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert_eq!(requests[2].method, HttpMethod::Delete);
        assert!(requests[2].url.ends_with("/users/mizchi/following"));
    }

    #[test]
    fn follow_without_token_is_unauthorized() {
        let stub = StubTransport::new().respond(401, &[], "");
        let err = anonymous(&stub).follow_user("mizchi").unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
        assert!(stub.last_request().header("authorization").is_none());
    }
}
