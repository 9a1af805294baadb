//
//  teamcity-client
//  context/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Server Context
//!
//! Works out which server the CLI talks to and how it authenticates, from
//! (highest priority first):
//!
//! 1. Command-line flags and their environment variables (`TC_URL`,
//!    `TC_USERNAME`, `TC_PASSWORD`)
//! 2. The `[server]` section of the configuration file
//! 3. For the password only: the system keyring entry for the user and server
//!
//! Without a username, or with `--guest`, the guest access mode is used.

use std::time::Duration;

use anyhow::{bail, Result};

use crate::api::TeamCityClient;
use crate::auth::Authorizer;
use crate::config::{normalize_server_url, Config};

/// Connection settings passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConnectionArgs {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub guest: bool,
    pub timeout: Option<u64>,
}

/// A fully resolved connection to one TeamCity server.
#[derive(Debug, Clone)]
pub struct ServerContext {
    /// Normalized server base URL.
    pub url: String,
    /// Access mode and credentials.
    pub authorizer: Authorizer,
    /// Per-request timeout, if configured.
    pub timeout: Option<Duration>,
}

impl ServerContext {
    /// Resolves the connection from flags, configuration and stored passwords.
    ///
    /// `lookup_password` is called with `(server_url, username)` only when a
    /// username is known and no password was given explicitly.
    ///
    /// # Errors
    ///
    /// Fails when no server URL is known, or when a username is known but no
    /// password can be found for it.
    pub fn resolve<F>(args: &ConnectionArgs, config: &Config, lookup_password: F) -> Result<Self>
    where
        F: FnOnce(&str, &str) -> Result<Option<String>>,
    {
        let url = match args.url.as_deref().or(config.server.url.as_deref()) {
            Some(url) => normalize_server_url(url),
            None => bail!(
                "No TeamCity server configured. Pass --url, set TC_URL, or run 'tc auth login'"
            ),
        };

        let guest = args.guest || config.server.guest;
        let username = args.username.clone().or_else(|| config.server.username.clone());

        let authorizer = match username {
            Some(username) if !guest => {
                let password = match args.password.clone() {
                    Some(password) => password,
                    None => match lookup_password(&url, &username)? {
                        Some(password) => password,
                        None => bail!(
                            "No password for {} on {}. Set TC_PASSWORD or run 'tc auth login'",
                            username,
                            url
                        ),
                    },
                };
                Authorizer::http(username, password)
            }
            _ => Authorizer::guest(),
        };

        let timeout = args.timeout.or(config.core.timeout).map(Duration::from_secs);

        tracing::debug!("Using {} as {:?}", url, authorizer);
        Ok(Self {
            url,
            authorizer,
            timeout,
        })
    }

    /// Builds an API client for this context.
    pub fn client(&self) -> Result<TeamCityClient> {
        let mut builder = TeamCityClient::builder(&self.url, self.authorizer.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}
