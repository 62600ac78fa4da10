//! `/comments` endpoints and the comment list of an item.

use serde::de::IgnoredAny;

use crate::client::{QiitaClient, Subject};
use crate::error::ApiResult;
use crate::http::Transport;
use crate::request::ApiRequest;
use crate::types::{Comment, CommentDraft};

impl<T: Transport> QiitaClient<T> {
    /// `GET /comments/:comment_id`
    pub fn get_comment(&self, comment_id: &str) -> ApiResult<Comment> {
        self.fetch_one(
            ApiRequest::get(&["comments", comment_id]),
            Subject::new("comment", comment_id),
        )
    }

    /// `GET /items/:item_id/comments`, oldest first. Not paginated.
    pub fn get_item_comments(&self, item_id: &str) -> ApiResult<Vec<Comment>> {
        self.fetch_all(
            ApiRequest::get(&["items", item_id, "comments"]),
            Subject::new("item", item_id),
        )
    }

    /// `POST /items/:item_id/comments`. Requires a token.
    pub fn create_comment(&self, item_id: &str, draft: &CommentDraft) -> ApiResult<Comment> {
        self.mutate_returning(
            ApiRequest::post(&["items", item_id, "comments"]).json(draft)?,
            Some(Subject::new("item", item_id)),
            "the comment body may be empty",
        )
    }

    /// `PATCH /comments/:comment_id`. Requires a token.
    pub fn update_comment(&self, comment_id: &str, draft: &CommentDraft) -> ApiResult<Comment> {
        self.mutate_returning(
            ApiRequest::patch(&["comments", comment_id]).json(draft)?,
            Some(Subject::new("comment", comment_id)),
            "you may not be the author of this comment, or the body is empty",
        )
    }

    /// `DELETE /comments/:comment_id`. Requires a token.
    pub fn delete_comment(&self, comment_id: &str) -> ApiResult<()> {
        self.mutate::<IgnoredAny>(
            ApiRequest::delete(&["comments", comment_id]),
            Some(Subject::new("comment", comment_id)),
            "you may not be the author of this comment",
        )?;
        Ok(())
    }

    /// `PUT /comments/:comment_id/thank`. Requires a token.
    pub fn thank_comment(&self, comment_id: &str) -> ApiResult<()> {
        self.mutate::<IgnoredAny>(
            ApiRequest::put(&["comments", comment_id, "thank"]),
            Some(Subject::new("comment", comment_id)),
            "the comment may already be thanked, or may be your own",
        )?;
        Ok(())
    }

    /// `DELETE /comments/:comment_id/thank`. Requires a token.
    pub fn unthank_comment(&self, comment_id: &str) -> ApiResult<()> {
        self.mutate::<IgnoredAny>(
            ApiRequest::delete(&["comments", comment_id, "thank"]),
            Some(Subject::new("comment", comment_id)),
            "the comment may not be thanked yet",
        )?;
        Ok(())
    }
}
