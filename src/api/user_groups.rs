//
//  teamcity-client
//  api/user_groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity User Group API
//!
//! ## API Endpoints
//!
//! ```text
//! GET  /userGroups
//! GET  /userGroups/key:{groupKey}
//! POST /userGroups
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use teamcity_client::api::{TeamCityClient, UserGroup};
//! use teamcity_client::auth::Authorizer;
//!
//! let client = TeamCityClient::new("https://ci.example.com", Authorizer::http("admin", "secret"))?;
//!
//! let group = UserGroup {
//!     key: "RELEASE_MANAGERS".to_string(),
//!     name: "Release managers".to_string(),
//!     ..Default::default()
//! };
//! let created = client.create_user_group(&group)?;
//! println!("created {}", created.key);
//! # Ok::<(), teamcity_client::api::ApiError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::TeamCityClient;
use crate::api::common::{escape, ApiError};
use crate::api::users::{Role, User};

/// A user group.
///
/// Parent groups, members and roles are embedded by value. Empty lists are
/// left out when a group is sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    /// Unique group key, e.g. "ALL_USERS_GROUP".
    #[serde(default)]
    pub key: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Groups this group inherits from.
    #[serde(default, rename = "parent-groups", skip_serializing_if = "Vec::is_empty")]
    pub parent_groups: Vec<UserGroup>,

    /// Direct members.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,

    /// Roles granted to every member.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,
}

/// Envelope used by `/userGroups` and `/users/{locator}/groups`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserGroupList {
    #[serde(default)]
    pub(crate) group: Vec<UserGroup>,
}

impl TeamCityClient {
    /// Lists all user groups.
    pub fn get_user_groups(&self) -> Result<Vec<UserGroup>, ApiError> {
        tracing::debug!("get_user_groups()");
        let list: UserGroupList = self.get("/userGroups", None)?;
        Ok(list.group)
    }

    /// Gets a user group by key.
    pub fn get_user_group(&self, key: &str) -> Result<UserGroup, ApiError> {
        tracing::debug!("get_user_group({:?})", key);
        self.get(&format!("/userGroups/key:{}", escape(key)), None)
    }

    /// Creates a user group and returns the group as stored by the server.
    pub fn create_user_group(&self, group: &UserGroup) -> Result<UserGroup, ApiError> {
        tracing::debug!("create_user_group({:?})", group.key);
        self.post("/userGroups", None, group)
    }
}
