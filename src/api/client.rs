//
//  teamcity-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the TeamCity REST API
//!
//! This module provides the transport used by every resource accessor. It
//! resolves the API root through the [`Authorizer`], attaches credentials,
//! serializes request bodies and decodes responses.
//!
//! ## Features
//!
//! - Guest and HTTP-authenticated access modes
//! - JSON serialization/deserialization with distinct encode/decode errors
//! - Non-2xx responses turned into [`ApiError::Status`] with the server's message
//! - Custom User-Agent header
//!
//! Every call is a single blocking request. Nothing is retried or cached.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::common::{format_api_error, ApiError};
use crate::auth::Authorizer;

/// Query parameters as name/value pairs.
pub type Query<'a> = &'a [(&'a str, String)];

/// Builder for [`TeamCityClient`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use teamcity_client::api::TeamCityClient;
/// use teamcity_client::auth::Authorizer;
///
/// let client = TeamCityClient::builder("https://ci.example.com", Authorizer::guest())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), teamcity_client::api::ApiError>(())
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    auth: Authorizer,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientBuilder {
    /// Sets a per-request timeout. Without one, reqwest's default applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the `User-Agent` header (defaults to `tc/<version>`).
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the underlying HTTP client cannot be
    /// created. The base URL itself is only checked when a request is made.
    pub fn build(self) -> Result<TeamCityClient, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(self.user_agent)
            .default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("could not create HTTP client: {}", e)))?;

        let root = self.auth.resolve_base_url(&self.base_url);
        tracing::debug!("TeamCity API root resolved to {}", root);

        Ok(TeamCityClient {
            http,
            base_url: self.base_url,
            root,
            auth: self.auth,
        })
    }
}

/// The client for a single TeamCity server.
///
/// The client holds the resolved API root and the authorizer, both fixed at
/// construction. It is `Send + Sync` and can be shared between threads.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use teamcity_client::api::TeamCityClient;
/// use teamcity_client::auth::Authorizer;
///
/// // Anonymous access
/// let guest = TeamCityClient::guest("https://ci.example.com")?;
///
/// // Authenticated access
/// let client = TeamCityClient::new(
///     "https://ci.example.com",
///     Authorizer::http("jdoe", "secret"),
/// )?;
///
/// for project in client.get_projects()? {
///     println!("{} - {}", project.id, project.name);
/// }
/// # Ok::<(), teamcity_client::api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TeamCityClient {
    /// The underlying HTTP client
    http: Client,
    /// The server base URL as given by the caller
    base_url: String,
    /// The API root (base URL plus access-mode prefix)
    root: String,
    /// Access mode and credentials
    auth: Authorizer,
}

impl TeamCityClient {
    /// Creates a client for `base_url` using the given access mode.
    pub fn new(base_url: &str, auth: Authorizer) -> Result<Self, ApiError> {
        Self::builder(base_url, auth).build()
    }

    /// Creates a guest-mode client.
    pub fn guest(base_url: &str) -> Result<Self, ApiError> {
        Self::new(base_url, Authorizer::guest())
    }

    /// Starts building a client with non-default settings.
    pub fn builder(base_url: &str, auth: Authorizer) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.to_string(),
            auth,
            timeout: None,
            user_agent: format!("tc/{}", crate::VERSION),
        }
    }

    /// Returns the server base URL as given at construction.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the resolved API root, e.g. `https://ci.example.com/httpAuth/app/rest`.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns the access mode of this client.
    pub fn authorizer(&self) -> &Authorizer {
        &self.auth
    }

    /// Makes an HTTP GET request and decodes the JSON response.
    ///
    /// # Parameters
    ///
    /// * `path` - The API path relative to the root (e.g. "/projects/id:Root")
    /// * `query` - Optional query parameters; values are form-encoded
    ///
    /// # Errors
    ///
    /// - [`ApiError::Config`] if `root + path` is not a valid URL
    /// - [`ApiError::Transport`] if the request cannot be sent
    /// - [`ApiError::Status`] if the response status is not 2xx
    /// - [`ApiError::Decode`] if the body cannot be deserialized to `T`
    pub fn get<T: DeserializeOwned>(&self, path: &str, query: Option<Query<'_>>) -> Result<T, ApiError> {
        let (url, context) = self.request_url(Method::GET, path, query)?;
        let request = self.http.get(url);
        self.execute(request, context)
    }

    /// Makes an HTTP POST request with a JSON body and decodes the JSON response.
    ///
    /// The body is sent with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus [`ApiError::Encode`] if the body
    /// cannot be serialized.
    pub fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<Query<'_>>,
        body: &B,
    ) -> Result<T, ApiError> {
        let (url, context) = self.request_url(Method::POST, path, query)?;
        let payload = serde_json::to_vec(body).map_err(|source| ApiError::Encode {
            context: context.clone(),
            source,
        })?;

        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        self.execute(request, context)
    }

    /// Builds the absolute request URL and the context string used in errors.
    fn request_url(
        &self,
        method: Method,
        path: &str,
        query: Option<Query<'_>>,
    ) -> Result<(Url, String), ApiError> {
        let raw = format!("{}{}", self.root, path);
        let mut url = Url::parse(&raw)
            .map_err(|e| ApiError::Config(format!("invalid request URL '{}': {}", raw, e)))?;

        if let Some(pairs) = query.filter(|q| !q.is_empty()) {
            let mut serializer = url.query_pairs_mut();
            for (name, value) in pairs {
                serializer.append_pair(name, value);
            }
        }

        let context = match url.query() {
            Some(q) => format!("{} {}?{}", method, path, q),
            None => format!("{} {}", method, path),
        };
        Ok((url, context))
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder, context: String) -> Result<T, ApiError> {
        tracing::debug!("{}", context);

        let response = self
            .auth
            .apply_to_request(request)
            .send()
            .map_err(|source| {
                tracing::error!("{} failed: {}", context, source);
                ApiError::Transport {
                    context: context.clone(),
                    source,
                }
            })?;

        let status = response.status();
        let text = response.text().map_err(|source| ApiError::Transport {
            context: context.clone(),
            source,
        })?;

        if !status.is_success() {
            let message = format_api_error(&text);
            tracing::error!("{} returned {}: {}", context, status, message);
            return Err(ApiError::Status {
                context,
                status,
                message,
            });
        }

        tracing::debug!("{}: {} ({} bytes)", context, status, text.len());
        serde_json::from_str(&text).map_err(|source| {
            tracing::error!("{}: could not decode response: {}", context, source);
            ApiError::Decode { context, source }
        })
    }
}
