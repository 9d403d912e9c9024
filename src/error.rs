// src/error.rs
//! Error types for the server.
//!
//! `AppError` says what went wrong and where; `ErrorKind` is the coarse
//! classification callers of the MCP tools see.

use std::fmt;
use thiserror::Error;

/// The `code` field of a Notion error object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    RateLimited,
    /// Missing, or not shared with the integration; Notion does not distinguish
    ObjectNotFound,
    Unauthorized,
    RestrictedResource,
    InvalidJson,
    ValidationFailed,
    Conflict,
    InternalError,
    ServiceUnavailable,
    /// No error object in the body, only a status line
    HttpStatus(u16),
    Unknown(String),
}

/// Wire names of the codes Notion documents.
const WIRE_CODES: [(&str, NotionErrorCode); 9] = [
    ("rate_limited", NotionErrorCode::RateLimited),
    ("object_not_found", NotionErrorCode::ObjectNotFound),
    ("unauthorized", NotionErrorCode::Unauthorized),
    ("restricted_resource", NotionErrorCode::RestrictedResource),
    ("invalid_json", NotionErrorCode::InvalidJson),
    ("validation_error", NotionErrorCode::ValidationFailed),
    ("conflict_error", NotionErrorCode::Conflict),
    ("internal_server_error", NotionErrorCode::InternalError),
    ("service_unavailable", NotionErrorCode::ServiceUnavailable),
];

impl NotionErrorCode {
    pub fn from_api_response(code: &str) -> Self {
        WIRE_CODES
            .iter()
            .find(|(wire, _)| *wire == code)
            .map(|(_, known)| known.clone())
            .unwrap_or_else(|| Self::Unknown(code.to_string()))
    }

    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// The kind implied by the code alone; `None` leaves it to the HTTP status.
    fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Unauthorized | Self::RestrictedResource => Some(ErrorKind::Authentication),
            Self::ObjectNotFound => Some(ErrorKind::NotFound),
            Self::RateLimited => Some(ErrorKind::RateLimited),
            Self::InternalError | Self::ServiceUnavailable => Some(ErrorKind::TransientNetwork),
            Self::InvalidJson | Self::ValidationFailed => Some(ErrorKind::InvalidArgument),
            Self::Conflict | Self::HttpStatus(_) | Self::Unknown(_) => None,
        }
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(status) => write!(f, "http_{}", status),
            Self::Unknown(code) => f.write_str(code),
            known => {
                let wire = WIRE_CODES
                    .iter()
                    .find(|(_, code)| code == known)
                    .map_or("unknown", |(wire, _)| *wire);
                f.write_str(wire)
            }
        }
    }
}

/// Coarse failure classification reported to tool callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Authentication,
    NotFound,
    RateLimited,
    TransientNetwork,
    /// Notion answered with something this client could not make sense of
    Upstream,
    Internal,
}

impl ErrorKind {
    /// Stable name carried in protocol error payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgumentError",
            ErrorKind::Authentication => "AuthenticationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::RateLimited => "RateLimitedError",
            ErrorKind::TransientNetwork => "TransientNetworkError",
            ErrorKind::Upstream => "UpstreamError",
            ErrorKind::Internal => "InternalError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    MissingConfiguration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request to Notion failed: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion returned {status} ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
        request_id: Option<String>,
    },

    #[error("Unexpected response from Notion: {0}")]
    MalformedResponse(String),

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Classify this error for protocol consumers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidArgument(_) | AppError::ValidationError(_) => {
                ErrorKind::InvalidArgument
            }
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::NetworkFailure(_) => ErrorKind::TransientNetwork,
            AppError::NotionService { code, status, .. } => {
                code.kind().unwrap_or_else(|| classify_status(*status))
            }
            AppError::MalformedResponse(_) => ErrorKind::Upstream,
            AppError::MissingConfiguration(_) | AppError::InternalError { .. } => {
                ErrorKind::Internal
            }
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::InternalError {
            message: message.into(),
            source: None,
        }
    }
}

fn classify_status(status: reqwest::StatusCode) -> ErrorKind {
    match status.as_u16() {
        401 | 403 => ErrorKind::Authentication,
        404 => ErrorKind::NotFound,
        429 => ErrorKind::RateLimited,
        400 => ErrorKind::InvalidArgument,
        500..=599 => ErrorKind::TransientNetwork,
        _ => ErrorKind::Upstream,
    }
}

impl From<std::fmt::Error> for AppError {
    fn from(err: std::fmt::Error) -> Self {
        AppError::InternalError {
            message: "failed to write rendered output".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}
