//
//  teamcity-client
//  api/changes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity Change API
//!
//! Every change query hits the same collection endpoint and differs only in
//! its locator:
//!
//! | Accessor | Locator |
//! |----------|---------|
//! | [`get_changes`](TeamCityClient::get_changes) | `count:{n}` |
//! | [`get_changes_for_project`](TeamCityClient::get_changes_for_project) | `project:{id},count:{n}` |
//! | [`get_changes_for_build`](TeamCityClient::get_changes_for_build) | `build:(id:{id})` |
//! | [`get_changes_for_build_type_since_change`](TeamCityClient::get_changes_for_build_type_since_change) | `buildType:{id},sinceChange:{changeId}` |
//! | [`get_changes_for_build_type_pending`](TeamCityClient::get_changes_for_build_type_pending) | `buildType:{id},pending:true` |

use serde::{Deserialize, Serialize};

use crate::api::client::TeamCityClient;
use crate::api::common::{ApiError, Locator};

/// A VCS change known to TeamCity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Internal change ID.
    #[serde(default)]
    pub id: u64,

    /// VCS revision.
    #[serde(default)]
    pub version: String,

    /// Author as recorded by the VCS.
    #[serde(default)]
    pub username: String,

    /// Raw change date (same layout as build dates).
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
struct ChangeList {
    #[serde(default)]
    change: Vec<Change>,
}

impl TeamCityClient {
    /// Gets a change by its ID.
    pub fn get_change_by_id(&self, id: u64) -> Result<Change, ApiError> {
        tracing::debug!("get_change_by_id({})", id);
        self.get(&format!("/changes/id:{}", id), None)
    }

    /// Gets the `count` most recent changes.
    pub fn get_changes(&self, count: usize) -> Result<Vec<Change>, ApiError> {
        tracing::debug!("get_changes({})", count);
        self.list_changes(Locator::new().dimension("count", count))
    }

    /// Gets the `count` most recent changes of a project.
    pub fn get_changes_for_project(&self, project_id: &str, count: usize) -> Result<Vec<Change>, ApiError> {
        tracing::debug!("get_changes_for_project({:?}, {})", project_id, count);
        self.list_changes(
            Locator::new()
                .escaped("project", project_id)
                .dimension("count", count),
        )
    }

    /// Gets the changes included in a build.
    pub fn get_changes_for_build(&self, build_id: u64) -> Result<Vec<Change>, ApiError> {
        tracing::debug!("get_changes_for_build({})", build_id);
        self.list_changes(Locator::new().nested("build", Locator::new().dimension("id", build_id)))
    }

    /// Gets the changes of a build configuration made after `change_id`.
    pub fn get_changes_for_build_type_since_change(
        &self,
        build_type_id: &str,
        change_id: u64,
    ) -> Result<Vec<Change>, ApiError> {
        tracing::debug!(
            "get_changes_for_build_type_since_change({:?}, {})",
            build_type_id,
            change_id
        );
        self.list_changes(
            Locator::new()
                .escaped("buildType", build_type_id)
                .dimension("sinceChange", change_id),
        )
    }

    /// Gets the changes of a build configuration not yet included in any build.
    pub fn get_changes_for_build_type_pending(&self, build_type_id: &str) -> Result<Vec<Change>, ApiError> {
        tracing::debug!("get_changes_for_build_type_pending({:?})", build_type_id);
        self.list_changes(
            Locator::new()
                .escaped("buildType", build_type_id)
                .dimension("pending", true),
        )
    }

    fn list_changes(&self, locator: Locator) -> Result<Vec<Change>, ApiError> {
        let query = locator.into_query();
        let list: ChangeList = self.get("/changes", Some(&query))?;
        Ok(list.change)
    }
}
