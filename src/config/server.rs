//
//  teamcity-client
//  config/server.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Server Configuration
//!
//! The `[server]` table of the configuration file: which TeamCity server to
//! talk to and as whom.
//!
//! ```toml
//! [server]
//! url = "https://ci.example.com"
//! username = "jdoe"
//! guest = false
//! ```

use serde::{Deserialize, Serialize};

/// Connection settings for the TeamCity server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server base URL, without the `/httpAuth/app/rest` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Username for HTTP authentication. The password lives in the keyring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Force guest access even when a username is configured.
    #[serde(default)]
    pub guest: bool,
}

/// Normalizes a user-supplied server URL.
///
/// Surrounding whitespace and trailing slashes are removed, and `https://`
/// is assumed when no scheme is given.
///
/// # Example
///
/// ```rust
/// use teamcity_client::config::normalize_server_url;
///
/// assert_eq!(normalize_server_url("ci.example.com/"), "https://ci.example.com");
/// assert_eq!(normalize_server_url(" http://localhost:8111 "), "http://localhost:8111");
/// ```
pub fn normalize_server_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
