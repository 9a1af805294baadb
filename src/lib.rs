//
//  teamcity-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity Client Library
//!
//! A typed, synchronous client for the TeamCity REST API, plus the `tc`
//! command-line tool built on top of it.
//!
//! ## Overview
//!
//! A [`TeamCityClient`] is created from a server URL and an [`Authorizer`].
//! The authorizer picks the REST root: guest access goes through
//! `/guestAuth/app/rest`, credentialed access through `/httpAuth/app/rest`
//! with HTTP Basic authentication. Every accessor is a single blocking request
//! that returns a typed resource or an [`ApiError`].
//!
//! ## Module Structure
//!
//! - [`api`]: Client, transport and resource accessors
//! - [`auth`]: Access modes and keyring storage of passwords
//! - [`config`]: Configuration file of the `tc` tool
//! - [`context`]: Resolution of the server connection from flags and config
//! - [`output`]: Table and JSON rendering
//! - [`interactive`]: Terminal prompts
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use teamcity_client::{Authorizer, TeamCityClient};
//!
//! let client = TeamCityClient::new("https://ci.example.com", Authorizer::http("jdoe", "secret"))?;
//!
//! for project in client.get_projects()? {
//!     println!("{} {}", project.id, project.name);
//! }
//!
//! let build = client.get_build_by_id(42)?;
//! println!("#{} {} started {}", build.number, build.status, build.start_date()?);
//! # Ok::<(), teamcity_client::ApiError>(())
//! ```

/// Command-line interface definitions.
pub mod cli;

/// TeamCity REST API client and resource types.
///
/// Covers projects, build configurations, builds, VCS changes, users, user
/// groups and server licensing data.
pub mod api;

/// Access modes and credential storage.
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/tc/config.toml`
/// - macOS: `~/Library/Application Support/tc/config.toml`
/// - Windows: `%APPDATA%\tc\config.toml`
pub mod config;

/// Server connection resolution for the CLI.
pub mod context;

/// Output formatting for table and JSON modes.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

pub use api::{ApiError, TeamCityClient};
pub use auth::Authorizer;
pub use cli::Cli;
pub use config::Config;

/// Application version constant.
///
/// Derived from Cargo.toml at compile time and sent in the `User-Agent`
/// header of every request.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Example
///
/// ```rust,no_run
/// use teamcity_client::exit_codes;
/// use std::process;
///
/// process::exit(exit_codes::AUTH_ERROR);
/// ```
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// Reported by clap itself when parsing fails.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// The server answered 401 or 403. Run `tc auth login` to authenticate.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    ///
    /// The server answered 404, or a lookup by name matched nothing.
    pub const NOT_FOUND: i32 = 8;
}
