//! The Qiita client: request building and response interpretation.
//!
//! # Design
//! `QiitaClient` holds an immutable parsed base URL, optional credentials and
//! a [`Transport`]. Every operation goes through the same three steps:
//!
//! 1. [`build_request`](QiitaClient::build_request) resolves an
//!    [`ApiRequest`] against a private copy of the base URL and attaches the
//!    client-owned headers.
//! 2. [`execute`](QiitaClient::execute) sends it and decodes the body of a
//!    2xx response when there is one. Non-2xx responses are returned as data
//!    so each operation can map them.
//! 3. The resource operation maps the [`StatusOutcome`] onto a result.
//!
//! The shared helpers at the bottom of this file implement the four
//! operation shapes (get-one, list, mutate, toggle-check) used by the
//! resource modules.

use std::fmt;

use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::pagination::{extract_pagination, validate_pagination, Page};
use crate::request::ApiRequest;
use crate::status::StatusOutcome;

/// Synchronous client for the Qiita v2 API.
///
/// Cheap to share: operations take `&self` and never mutate the client, so
/// one instance can serve many threads when its transport is `Sync`.
#[derive(Clone)]
pub struct QiitaClient<T = UreqTransport> {
    base_url: Url,
    transport: T,
    access_token: Option<String>,
    user_agent: String,
}

impl QiitaClient<UreqTransport> {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(config, transport)
    }

    /// Shorthand for `QiitaClient::new(ClientConfig::from_env()?)`.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> QiitaClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> ApiResult<Self> {
        config.validate()?;
        let base_url = Url::parse(config.base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Validation(format!(
                "base url '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self {
            access_token: config.token().map(str::to_string),
            user_agent: config.user_agent,
            base_url,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `request` against the base URL.
    ///
    /// Works on a clone of the base URL; the client itself is never touched.
    pub fn build_request(&self, request: ApiRequest<'_>) -> ApiResult<HttpRequest> {
        if request.segments.iter().any(|segment| segment.trim().is_empty()) {
            return Err(ApiError::Validation(format!(
                "empty path segment in '{}'",
                request.path()
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::Validation(format!("base url '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(&request.segments);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        let mut headers = vec![("user-agent".to_string(), self.user_agent.clone())];
        if let Some(token) = &self.access_token {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        let has_content_type = request
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
        if request.body.is_some() && !has_content_type {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        headers.extend(request.headers.into_iter().filter(|(name, _)| {
            !name.eq_ignore_ascii_case("user-agent") && !name.eq_ignore_ascii_case("authorization")
        }));

        Ok(HttpRequest {
            method: request.method,
            url: url.into(),
            headers,
            body: request.body,
        })
    }

    /// Send `request` and decode a 2xx body into `B`.
    ///
    /// Empty bodies (204 and friends) leave the value absent. Malformed JSON
    /// on a 2xx is an error; non-2xx statuses are not.
    pub fn execute<B: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<Reply<B>> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.send(&request)?;
        let outcome = StatusOutcome::from_status(response.status);
        debug!(
            method = request.method.as_str(),
            url = %request.url,
            status = response.status,
            "received response"
        );

        let value = if outcome.is_success() && !response.body.trim().is_empty() {
            Some(serde_json::from_str(&response.body)?)
        } else {
            None
        };

        Ok(Reply {
            outcome,
            value,
            response,
        })
    }

    fn round_trip<B: DeserializeOwned>(&self, request: ApiRequest<'_>) -> ApiResult<Reply<B>> {
        let request = self.build_request(request)?;
        self.execute(request)
    }

    /// GET a single entity. 404 names `subject`; anything else non-2xx is
    /// unknown.
    pub(crate) fn fetch_one<E: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
        subject: Subject<'_>,
    ) -> ApiResult<E> {
        let reply = self.round_trip::<E>(request)?;
        match reply.outcome {
            StatusOutcome::Success(_) => reply.into_value(),
            StatusOutcome::NotFound => Err(subject.not_found()),
            _ => Err(reply.unexpected()),
        }
    }

    /// GET a JSON array without pagination headers.
    pub(crate) fn fetch_all<E: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
        subject: Subject<'_>,
    ) -> ApiResult<Vec<E>> {
        let reply = self.round_trip::<Vec<E>>(request)?;
        match reply.outcome {
            StatusOutcome::Success(_) => Ok(reply.value.unwrap_or_default()),
            StatusOutcome::NotFound => Err(subject.not_found()),
            _ => Err(reply.unexpected()),
        }
    }

    /// GET one page of a collection.
    ///
    /// `page` and `per_page` are validated before anything is built. `owner`
    /// names the parent resource for nested collections so a 404 can be
    /// reported against it.
    pub(crate) fn fetch_page<E: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
        page: u32,
        per_page: u32,
        owner: Option<Subject<'_>>,
    ) -> ApiResult<Page<E>> {
        validate_pagination(page, per_page)?;
        let request = request.query("page", page).query("per_page", per_page);
        let reply = self.round_trip::<Vec<E>>(request)?;

        match (reply.outcome, owner) {
            (StatusOutcome::Success(_), _) => {
                let pagination =
                    extract_pagination(|name| reply.response.header(name), page, per_page)
                        .inspect_err(|err| warn!(error = %err, "could not read pagination headers"))?;
                Ok(Page {
                    items: reply.value.unwrap_or_default(),
                    pagination,
                })
            }
            (StatusOutcome::NotFound, Some(owner)) => Err(owner.not_found()),
            (StatusOutcome::Unauthorized, _) => Err(ApiError::Unauthorized),
            _ => Err(reply.unexpected()),
        }
    }

    /// POST/PUT/PATCH/DELETE. 200, 201 and 204 succeed; the decoded body is
    /// returned when the server sent one.
    pub(crate) fn mutate<E: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
        subject: Option<Subject<'_>>,
        forbidden_hint: &str,
    ) -> ApiResult<Option<E>> {
        Ok(self.mutate_reply(request, subject, forbidden_hint)?.value)
    }

    /// Like [`mutate`](Self::mutate) but the response must carry an entity.
    pub(crate) fn mutate_returning<E: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
        subject: Option<Subject<'_>>,
        forbidden_hint: &str,
    ) -> ApiResult<E> {
        self.mutate_reply(request, subject, forbidden_hint)?
            .into_value()
    }

    fn mutate_reply<E: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
        subject: Option<Subject<'_>>,
        forbidden_hint: &str,
    ) -> ApiResult<Reply<E>> {
        let reply = self.round_trip::<E>(request)?;
        match (reply.outcome, subject) {
            (StatusOutcome::Success(200 | 201 | 204), _) => Ok(reply),
            (StatusOutcome::Unauthorized, _) => Err(ApiError::Unauthorized),
            (StatusOutcome::Forbidden, _) => Err(ApiError::forbidden(forbidden_hint)),
            (StatusOutcome::NotFound, Some(subject)) => Err(subject.not_found()),
            _ => Err(reply.unexpected()),
        }
    }

    /// GET a relationship sub-path. 204 is `true`, 404 is `false`.
    ///
    /// `false` only means the relationship could not be confirmed: the server
    /// also answers 404 when the parent resource does not exist.
    pub(crate) fn check(&self, request: ApiRequest<'_>) -> ApiResult<bool> {
        let reply = self.round_trip::<IgnoredAny>(request)?;
        match reply.outcome {
            StatusOutcome::Success(204) => Ok(true),
            StatusOutcome::NotFound => Ok(false),
            StatusOutcome::Unauthorized => Err(ApiError::Unauthorized),
            _ => Err(reply.unexpected()),
        }
    }
}

impl<T> fmt::Debug for QiitaClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QiitaClient")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.access_token.is_some())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Interpreted response: status classification, the decoded 2xx body if
/// any, and the raw response for headers.
#[derive(Debug, Clone)]
pub struct Reply<B> {
    pub outcome: StatusOutcome,
    pub value: Option<B>,
    pub response: HttpResponse,
}

impl<B> Reply<B> {
    pub fn status(&self) -> u16 {
        self.response.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.response.header(name)
    }

    /// The decoded body, or an error when the server sent none.
    pub fn into_value(self) -> ApiResult<B> {
        let status = self.response.status;
        self.value.ok_or(ApiError::EmptyBody { status })
    }

    /// Error for a status the operation has no mapping for.
    pub fn unexpected(self) -> ApiError {
        ApiError::Unknown {
            status: self.response.status,
            body: self.response.body,
        }
    }
}

/// The resource an operation is about, for not-found reporting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Subject<'a> {
    resource: &'static str,
    id: &'a str,
}

impl<'a> Subject<'a> {
    pub(crate) fn new(resource: &'static str, id: &'a str) -> Self {
        Self { resource, id }
    }

    fn not_found(self) -> ApiError {
        ApiError::not_found(self.resource, self.id)
    }
}
