//
//  teamcity-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the TeamCity REST API.
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP transport with authorization and request handling
//! - [`common`]: Shared types (errors, locators, escaping)
//! - One module per resource, each adding accessor methods to [`TeamCityClient`]:
//!   [`projects`], [`build_types`], [`builds`], [`changes`], [`users`],
//!   [`user_groups`], [`server`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use teamcity_client::api::TeamCityClient;
//! use teamcity_client::auth::Authorizer;
//!
//! let client = TeamCityClient::new("https://ci.example.com", Authorizer::http("jdoe", "secret"))?;
//!
//! for build in client.get_builds_for_build_type("Main_Build", 5)? {
//!     println!("#{} {:?} {}", build.number, build.status, build.status_text);
//! }
//! # Ok::<(), teamcity_client::api::ApiError>(())
//! ```
//!
//! ## Collections
//!
//! TeamCity wraps collections in an envelope such as
//! `{"count": 2, "project": [...]}`. Accessors unwrap the envelope and return
//! the inner list. Locator filters, including `count`, are enforced by the
//! server.

/// Core HTTP transport.
///
/// Provides the [`TeamCityClient`] struct which handles:
/// - API root resolution through the authorizer
/// - Authentication header injection
/// - Request/response serialization
/// - Error mapping for network failures, status codes and bad bodies
pub mod client;

/// Types shared by all resource modules.
pub mod common;

/// Projects (`/projects`).
pub mod projects;

/// Build configurations (`/buildTypes`) and build statistics.
pub mod build_types;

/// Builds (`/builds`).
pub mod builds;

/// VCS changes (`/changes`).
pub mod changes;

/// Users (`/users`).
pub mod users;

/// User groups (`/userGroups`).
pub mod user_groups;

/// Server-wide data (`/server`).
pub mod server;

pub use build_types::{BuildStatistics, BuildType};
pub use builds::{Build, BuildStatus, DATE_LAYOUT};
pub use changes::Change;
pub use client::{ClientBuilder, TeamCityClient};
pub use common::{ApiError, Locator};
pub use projects::Project;
pub use server::ServerLicensingData;
pub use user_groups::UserGroup;
pub use users::{Role, User, UserProperties};
