//
//  teamcity-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authorization Module
//!
//! TeamCity serves its REST API under two different roots depending on how a
//! client authenticates:
//!
//! | Mode | API root | Authentication |
//! |------|----------|----------------|
//! | Guest | `<base>/guestAuth/app/rest` | none |
//! | HTTP | `<base>/httpAuth/app/rest` | HTTP Basic |
//!
//! The [`Authorizer`] enum captures that choice. It is fixed when the client is
//! constructed and only read afterwards.
//!
//! ## Module Structure
//!
//! - [`keyring`]: Secure password storage using the system keyring
//!
//! ## Example
//!
//! ```rust
//! use teamcity_client::auth::Authorizer;
//!
//! let guest = Authorizer::guest();
//! assert_eq!(
//!     guest.resolve_base_url("https://ci.example.com"),
//!     "https://ci.example.com/guestAuth/app/rest"
//! );
//! assert!(guest.credentials().is_none());
//!
//! let http = Authorizer::http("jdoe", "secret");
//! assert_eq!(
//!     http.resolve_base_url("https://ci.example.com"),
//!     "https://ci.example.com/httpAuth/app/rest"
//! );
//! assert_eq!(http.credentials(), Some(("jdoe", "secret")));
//! ```

mod keyring;

pub use keyring::*;

use std::fmt;

use reqwest::blocking::RequestBuilder;

/// Path prefix for unauthenticated (guest) access.
pub const GUEST_AUTH_PREFIX: &str = "/guestAuth/app/rest";

/// Path prefix for HTTP Basic authenticated access.
pub const HTTP_AUTH_PREFIX: &str = "/httpAuth/app/rest";

/// Access mode used to talk to a TeamCity server.
///
/// Each variant knows which API root it targets and which credentials, if
/// any, it attaches to outgoing requests.
///
/// # Variants
///
/// - `Guest`: Anonymous access. Only publicly visible data is returned.
/// - `Http`: HTTP Basic authentication with a username and password.
///
/// # Notes
///
/// The `Debug` implementation masks the password so an authorizer can be
/// logged safely.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorizer {
    /// Guest access mode.
    Guest,
    /// Credentialed access using HTTP Basic authentication.
    Http {
        /// The TeamCity username.
        username: String,
        /// The password for `username`.
        password: String,
    },
}

impl Authorizer {
    /// Creates a guest-mode authorizer.
    pub fn guest() -> Self {
        Self::Guest
    }

    /// Creates a credentialed authorizer using HTTP Basic authentication.
    ///
    /// # Parameters
    ///
    /// - `username`: The TeamCity username.
    /// - `password`: The password for that user.
    pub fn http(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Http {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the path prefix selected by this access mode.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Guest => GUEST_AUTH_PREFIX,
            Self::Http { .. } => HTTP_AUTH_PREFIX,
        }
    }

    /// Resolves a server base URL into the full REST API root.
    ///
    /// The base URL is not validated beyond dropping a single trailing `/`,
    /// so `"https://ci.example.com/"` and `"https://ci.example.com"` resolve
    /// to the same root.
    ///
    /// # Example
    ///
    /// ```rust
    /// use teamcity_client::auth::Authorizer;
    ///
    /// let root = Authorizer::guest().resolve_base_url("https://ci.example.com/");
    /// assert_eq!(root, "https://ci.example.com/guestAuth/app/rest");
    /// ```
    pub fn resolve_base_url(&self, base_url: &str) -> String {
        let base = base_url.strip_suffix('/').unwrap_or(base_url);
        format!("{}{}", base, self.prefix())
    }

    /// Returns the basic-auth credentials, or `None` in guest mode.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match self {
            Self::Guest => None,
            Self::Http { username, password } => Some((username.as_str(), password.as_str())),
        }
    }

    /// Returns `true` for the guest access mode.
    pub fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }

    /// Attaches the authorization header to a request, if this mode has one.
    ///
    /// Guest requests are returned untouched.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials() {
            Some((username, password)) => request.basic_auth(username, Some(password)),
            None => request,
        }
    }
}

impl Default for Authorizer {
    fn default() -> Self {
        Self::Guest
    }
}

impl fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guest => f.write_str("Guest"),
            Self::Http { username, .. } => f
                .debug_struct("Http")
                .field("username", username)
                .field("password", &"********")
                .finish(),
        }
    }
}
