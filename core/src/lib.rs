//! Synchronous client for the Qiita v2 REST API.
//!
//! # Overview
//! Typed access to users, items, tags, comments and the follow/stock
//! relationships between them. Every operation is one request/response
//! round-trip; there are no retries, caches or background tasks.
//!
//! # Design
//! - [`ApiRequest`] describes an endpoint call; [`QiitaClient::build_request`]
//!   turns it into a plain-data [`HttpRequest`] against a copy of the base URL.
//! - A [`Transport`] moves the bytes. [`UreqTransport`] is the default and
//!   anything else (a test stub, another HTTP stack) can be plugged in.
//! - Status codes are classified into a [`StatusOutcome`] and each operation
//!   maps outcomes onto [`ApiError`] variants.
//! - List operations return a [`Page<T>`] whose [`Pagination`] is read from
//!   the `Link` and `Total-Count` response headers.
//! - Diagnostics go through `tracing`; nothing is printed unless the
//!   application installs a subscriber.
//!
//! ```no_run
//! use qiita_core::{ClientConfig, QiitaClient};
//!
//! let client = QiitaClient::new(ClientConfig::default())?;
//! let followees = client.get_user_followees("muiscript", 1, 20)?;
//! for user in &followees.items {
//!     println!("{}", user.id);
//! }
//! # Ok::<(), qiita_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod pagination;
pub mod request;
pub mod status;
pub mod types;

mod authenticated_user;
mod comments;
mod items;
mod tags;
mod users;

pub use client::{QiitaClient, Reply};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use pagination::{Page, Pagination, MAX_PAGE, MAX_PER_PAGE};
pub use request::ApiRequest;
pub use status::StatusOutcome;
pub use types::{Comment, CommentDraft, Item, ItemDraft, ItemTag, Tag, TagSort, User};
