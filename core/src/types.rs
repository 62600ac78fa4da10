//! Domain DTOs for the Qiita API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! the integration test catches schema drift between the two crates. Every
//! entity is decoded fresh from each response. An `Item` owns its author and
//! its tag references by value, so two items tagged "Rust" hold two separate
//! `ItemTag` values.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// A Qiita user.
///
/// Only `id` is required. Other scalars fall back to their default when
/// missing or `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub permanent_id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_only: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followees_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers_count: u64,
    #[serde(default)]
    pub github_login_name: Option<String>,
    #[serde(default)]
    pub linkedin_id: Option<String>,
    #[serde(default)]
    pub twitter_screen_name: Option<String>,
    #[serde(default)]
    pub facebook_id: Option<String>,
}

/// An article published on Qiita.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rendered_body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub private: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coediting: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reactions_count: u64,
    /// Only present when the caller owns the item.
    #[serde(default)]
    pub page_views_count: Option<u64>,
    pub user: User,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<ItemTag>,
}

/// A tag reference attached to an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemTag {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<String>,
}

impl ItemTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
        }
    }

    pub fn with_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions = versions.into_iter().map(Into::into).collect();
        self
    }
}

/// A tag as served by the `/tags` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers_count: u64,
}

/// A comment on an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rendered_body: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub user: User,
}

/// Request payload for creating or updating an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<ItemTag>,
    #[serde(default)]
    pub private: bool,
    /// Only honoured on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweet: Option<bool>,
}

impl ItemDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, tags: Vec<ItemTag>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags,
            private: false,
            tweet: None,
        }
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn tweet(mut self, tweet: bool) -> Self {
        self.tweet = Some(tweet);
        self
    }
}

/// Request payload for creating or updating a comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentDraft {
    pub body: String,
}

impl CommentDraft {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// Ordering for the tag listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagSort {
    /// Most used first.
    #[default]
    Count,
    Name,
}

impl TagSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagSort::Count => "count",
            TagSort::Name => "name",
        }
    }
}

/// Decode `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
