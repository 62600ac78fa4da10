//! Classification of response status codes.
//!
//! Every resource operation maps the status code through [`StatusOutcome`]
//! first and then decides, per endpoint, what each outcome means. Keeping the
//! classification in one place makes the mapping testable without a server.

/// Finite interpretation of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// 200..=299. The exact code is kept for endpoints that distinguish
    /// 204 from 200.
    Success(u16),
    NotFound,
    Unauthorized,
    Forbidden,
    Unknown(u16),
}

impl StatusOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Success(status),
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            other => Self::Unknown(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
