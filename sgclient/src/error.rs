//! Client error kinds and error value helpers.
//!
//! ```rust
//! use sgclient::{ClientError, ClientErrorKind};
//!
//! let auth = ClientError::from_status(401, "invalid api key");
//! assert_eq!(auth.kind, ClientErrorKind::Authentication);
//! assert!(!auth.retryable);
//!
//! let busy = ClientError::from_status(503, "try later");
//! assert!(busy.retryable);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    Configuration,
    Authentication,
    InvalidRequest,
    NotFound,
    RateLimited,
    Timeout,
    Transport,
    Unavailable,
    MalformedResponse,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: String,
    pub retryable: bool,
    pub status: Option<u16>,
}

impl ClientError {
    pub fn new(kind: ClientErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
            status: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Configuration, message, false)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Authentication, message, false)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::InvalidRequest, message, false)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::NotFound, message, false)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::RateLimited, message, true)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Timeout, message, true)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Transport, message, true)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Unavailable, message, true)
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::MalformedResponse, message, false)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Other, message, false)
    }

    /// Classifies a non-success HTTP status reported by the service.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let error = match status {
            401 | 403 => Self::authentication(message),
            404 => Self::not_found(message),
            408 | 504 => Self::timeout(message),
            429 => Self::rate_limited(message),
            400 | 422 => Self::invalid_request(message),
            502 | 503 => Self::unavailable(message),
            _ => Self::transport(message),
        };

        error.with_status(status)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{:?} [status={}]: {}", self.kind, status, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ClientError {}
