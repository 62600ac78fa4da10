//! Endpoint-relative request description.
//!
//! An [`ApiRequest`] names a method, the path segments below the base
//! endpoint, query parameters, extra headers and an optional JSON body. It
//! carries no knowledge of the base URL or credentials; the client resolves
//! it into an [`HttpRequest`](crate::http::HttpRequest).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::http::HttpMethod;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest<'a> {
    pub(crate) method: HttpMethod,
    pub(crate) segments: Vec<&'a str>,
    /// Sorted so the encoded query string is stable.
    pub(crate) query: BTreeMap<&'static str, String>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<String>,
}

impl<'a> ApiRequest<'a> {
    pub fn new(method: HttpMethod, segments: &[&'a str]) -> Self {
        Self {
            method,
            segments: segments.to_vec(),
            query: BTreeMap::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(segments: &[&'a str]) -> Self {
        Self::new(HttpMethod::Get, segments)
    }

    pub fn post(segments: &[&'a str]) -> Self {
        Self::new(HttpMethod::Post, segments)
    }

    pub fn put(segments: &[&'a str]) -> Self {
        Self::new(HttpMethod::Put, segments)
    }

    pub fn patch(segments: &[&'a str]) -> Self {
        Self::new(HttpMethod::Patch, segments)
    }

    pub fn delete(segments: &[&'a str]) -> Self {
        Self::new(HttpMethod::Delete, segments)
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.insert(key, value.to_string());
        self
    }

    /// Extra header. `User-Agent` and `Authorization` are always owned by
    /// the client and will be replaced.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_string(body).map_err(ApiError::Serialization)?);
        Ok(self)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// `users/muiscript/followees`-style rendering for diagnostics.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}
