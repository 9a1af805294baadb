//
//  teamcity-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared building blocks used by every resource module:
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Locator`] - Builder for TeamCity locator expressions (re-exported from [`locator`])
//! - [`escape`] - Query-style escaping for identifiers embedded in paths and locators
//! - [`PropertyMap`] - Open-schema key/value record used by statistics and user properties
//!
//! # Example
//!
//! ```rust
//! use teamcity_client::api::common::ApiError;
//!
//! fn handle<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.is_not_found() => println!("Nothing there"),
//!         Err(e) if e.is_auth_error() => println!("Check your credentials"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

mod locator;

pub use locator::*;

/// A free-form JSON object as returned by the server.
///
/// Used wherever TeamCity returns records without a fixed schema, such as
/// build statistics or user properties. Sequences of these keep the server's
/// ordering.
pub type PropertyMap = serde_json::Map<String, serde_json::Value>;

/// Unified error type for all TeamCity API operations.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `Config` | The base URL cannot form a request URL, or the HTTP client cannot be built |
/// | `Transport` | The connection fails or times out |
/// | `Status` | The server answers with a non-2xx status |
/// | `Decode` | The body does not match the expected JSON shape |
/// | `Encode` | A request body cannot be serialized |
/// | `NotFound` | A lookup succeeded over HTTP but matched nothing |
/// | `DateParse` | A raw build date is malformed (only when the parsed value is asked for) |
///
/// Request-level variants carry a `context` string naming the method and
/// path (for example `GET /projects/id:Foo`) so failures can be traced back
/// to the call that produced them.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A network-level error occurred during the request.
    #[error("{context}: request failed: {source}")]
    Transport {
        /// Method and path of the failed request.
        context: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{context}: server returned {status}: {message}")]
    Status {
        /// Method and path of the failed request.
        context: String,
        /// The HTTP status code.
        status: StatusCode,
        /// Message extracted from the response body.
        message: String,
    },

    /// The response body could not be decoded into the expected type.
    #[error("{context}: failed to decode response: {source}")]
    Decode {
        /// Method and path of the request.
        context: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("{context}: failed to encode request body: {source}")]
    Encode {
        /// Method and path of the request.
        context: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The requested resource does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A raw date string did not match the `YYYYMMDDThhmmss±hhmm` layout.
    #[error("Invalid {field} date {raw:?}: {reason}")]
    DateParse {
        /// Which date was requested (`queued`, `start`, `finish`).
        field: &'static str,
        /// The raw value as received from the server.
        raw: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ApiError {
    /// Returns the HTTP status code for `Status` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for a 404 response or an empty lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns `true` for 401 and 403 responses.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

/// Escapes an identifier for use inside a path segment or locator value.
///
/// Uses form-style escaping: spaces become `+`, reserved characters become
/// `%XX`. Alphanumerics and `-`, `_`, `.`, `*` are left untouched.
///
/// # Example
///
/// ```rust
/// use teamcity_client::api::common::escape;
///
/// assert_eq!(escape("Project_Main"), "Project_Main");
/// assert_eq!(escape("My Project"), "My+Project");
/// assert_eq!(escape("a/b:c"), "a%2Fb%3Ac");
/// ```
pub fn escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Extracts a readable message from an error response body.
///
/// TeamCity answers errors either as JSON (`{"errors": [{"message": ...}]}`
/// or `{"message": ...}`) or as plain text starting with
/// `Responding with error, status code: ...`. JSON messages are extracted;
/// anything else is returned trimmed.
pub fn format_api_error(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "(empty response body)".to_string()
    } else {
        trimmed.to_string()
    }
}
