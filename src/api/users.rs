//
//  teamcity-client
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity User API
//!
//! ## API Endpoints
//!
//! ```text
//! GET  /users/{userLocator}
//! POST /users/{userLocator}/groups
//! ```
//!
//! A user locator is itself a locator expression (`username:jdoe`, `id:12`,
//! `current`) and is placed in the path as given.

use serde::{Deserialize, Serialize};

use crate::api::client::TeamCityClient;
use crate::api::common::{escape, ApiError, PropertyMap};
use crate::api::user_groups::{UserGroup, UserGroupList};

/// A role assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role ID, e.g. "PROJECT_DEVELOPER".
    #[serde(default)]
    pub role_id: String,

    /// Scope of the assignment, e.g. "g" (global) or "p:Backend".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scope: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
}

/// Custom properties attached to a user.
///
/// Properties have no fixed schema; each entry is kept as an untyped map in
/// server order (typically `name`, `value` and `inherited`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProperties {
    #[serde(default)]
    pub count: usize,

    /// Ordered property entries.
    #[serde(default, rename = "property")]
    pub properties: Vec<PropertyMap>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
}

impl UserProperties {
    /// Returns `true` when no property is set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A TeamCity user account.
///
/// Roles and groups are embedded as values, so a decoded user is a complete
/// snapshot with no back-references into other objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: u64,

    /// Login name.
    #[serde(default)]
    pub username: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    /// Authentication realm the user belongs to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub realm: String,

    /// Raw date of the last login.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_login: String,

    #[serde(default)]
    pub has_password: bool,

    /// Only ever sent to the server (when creating or updating a user).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub locator: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<Role>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<UserGroup>,

    #[serde(default, skip_serializing_if = "UserProperties::is_empty")]
    pub properties: UserProperties,
}

/// Response of `POST /users/{locator}/groups`: either the bare list or the
/// usual `group` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserGroupsResponse {
    List(Vec<UserGroup>),
    Envelope(UserGroupList),
}

impl UserGroupsResponse {
    fn into_groups(self) -> Vec<UserGroup> {
        match self {
            Self::List(groups) => groups,
            Self::Envelope(list) => list.group,
        }
    }
}

impl TeamCityClient {
    /// Gets a user by locator (`username:jdoe`, `id:12`, `current`, ...).
    ///
    /// The locator is used verbatim. Use
    /// [`get_user_by_username`](Self::get_user_by_username) to look up a raw
    /// username safely.
    pub fn get_user(&self, user_locator: &str) -> Result<User, ApiError> {
        tracing::debug!("get_user({:?})", user_locator);
        self.get(&format!("/users/{}", user_locator), None)
    }

    /// Gets a user by login name.
    pub fn get_user_by_username(&self, username: &str) -> Result<User, ApiError> {
        self.get_user(&format!("username:{}", escape(username)))
    }

    /// Replaces the group memberships of a user.
    ///
    /// The groups are sent as a bare JSON array. Returns the groups as echoed
    /// by the server.
    pub fn update_user_groups(&self, user_locator: &str, groups: &[UserGroup]) -> Result<Vec<UserGroup>, ApiError> {
        tracing::debug!("update_user_groups({:?}, {} groups)", user_locator, groups.len());
        let response: UserGroupsResponse = self.post(&format!("/users/{}/groups", user_locator), None, groups)?;
        Ok(response.into_groups())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_response_shapes() {
        let list: UserGroupsResponse = serde_json::from_str(r#"[{"key": "DEVS"}]"#).unwrap();
        assert_eq!(list.into_groups()[0].key, "DEVS");

        let envelope: UserGroupsResponse =
            serde_json::from_str(r#"{"count": 1, "group": [{"key": "OPS"}]}"#).unwrap();
        assert_eq!(envelope.into_groups()[0].key, "OPS");
    }

    #[test]
    fn test_decode_user() {
        let json = r#"{
            "username": "jdoe",
            "name": "Jane Doe",
            "id": 12,
            "email": "jane@example.com",
            "lastLogin": "20230114T181233+0000",
            "hasPassword": true,
            "roles": [{"roleId": "SYSTEM_ADMIN", "scope": "g"}],
            "groups": [{"key": "ALL_USERS_GROUP", "name": "All Users"}],
            "properties": {
                "count": 2,
                "property": [
                    {"name": "plugin:vcs:anyVcs:anyVcsRoot", "value": "jdoe", "inherited": false},
                    {"name": "teamcity.server.buildNumber", "value": "147512", "type": {"rawValue": "text"}}
                ]
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 12);
        assert_eq!(user.username, "jdoe");
        assert!(user.has_password);
        assert_eq!(user.roles[0].role_id, "SYSTEM_ADMIN");
        assert_eq!(user.groups[0].key, "ALL_USERS_GROUP");
        assert_eq!(user.properties.count, 2);
        assert_eq!(
            user.properties.properties[1]["name"],
            serde_json::json!("teamcity.server.buildNumber")
        );
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let user = User {
            username: "jdoe".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, serde_json::json!({"id": 0, "username": "jdoe", "hasPassword": false}));
    }

    #[test]
    fn test_groups_body_is_bare_array() {
        let groups = vec![UserGroup {
            key: "DEVS".to_string(),
            ..Default::default()
        }];
        let value = serde_json::to_value(groups.as_slice()).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["key"], "DEVS");
    }
}
