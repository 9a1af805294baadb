//
//  teamcity-client
//  api/build_types.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity Build Configuration API
//!
//! A build type is a named build configuration inside a project (what other
//! CI systems call a job or pipeline definition).
//!
//! ## API Endpoints
//!
//! ```text
//! GET /buildTypes
//! GET /buildTypes/id:{buildTypeId}
//! GET /buildTypes?locator=project:{projectId}
//! GET /builds/{buildId}/statistics
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::TeamCityClient;
use crate::api::common::{escape, ApiError, Locator, PropertyMap};

/// A build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildType {
    /// Build configuration ID, e.g. "Backend_Api_Build".
    #[serde(default)]
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// ID of the owning project.
    #[serde(default)]
    pub project_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildTypeList {
    #[serde(default)]
    build_type: Vec<BuildType>,
}

/// Statistic values reported for a build.
///
/// The server decides which properties exist (`BuildDuration`,
/// `ArtifactsSize`, test counts and so on), so each entry is kept as an
/// untyped map in server order.
///
/// # Example
///
/// ```rust
/// use teamcity_client::api::BuildStatistics;
///
/// let json = r#"{"count": 1, "property": [{"name": "BuildDuration", "value": "61000"}]}"#;
/// let stats: BuildStatistics = serde_json::from_str(json).unwrap();
/// assert_eq!(stats.value("BuildDuration"), Some("61000"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildStatistics {
    /// Ordered statistic entries.
    #[serde(default, rename = "property")]
    pub properties: Vec<PropertyMap>,
}

impl BuildStatistics {
    /// Looks up the `value` of the first entry whose `name` matches.
    ///
    /// Returns `None` when no entry matches or the value is not a string.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.get("name").and_then(|n| n.as_str()) == Some(name))
            .and_then(|p| p.get("value"))
            .and_then(|v| v.as_str())
    }
}

impl TeamCityClient {
    /// Gets a build configuration by its ID.
    pub fn get_build_type_by_id(&self, id: &str) -> Result<BuildType, ApiError> {
        tracing::debug!("get_build_type_by_id({:?})", id);
        self.get(&format!("/buildTypes/id:{}", escape(id)), None)
    }

    /// Lists all build configurations.
    pub fn get_build_types(&self) -> Result<Vec<BuildType>, ApiError> {
        tracing::debug!("get_build_types()");
        let list: BuildTypeList = self.get("/buildTypes", None)?;
        Ok(list.build_type)
    }

    /// Lists the build configurations of a project.
    ///
    /// Sends `locator=project:<escaped id>`.
    pub fn get_build_types_for_project(&self, project_id: &str) -> Result<Vec<BuildType>, ApiError> {
        tracing::debug!("get_build_types_for_project({:?})", project_id);
        let query = Locator::new().escaped("project", project_id).into_query();
        let list: BuildTypeList = self.get("/buildTypes", Some(&query))?;
        Ok(list.build_type)
    }

    /// Gets the statistics reported for a build.
    pub fn get_build_type_statistics(&self, build_id: u64) -> Result<BuildStatistics, ApiError> {
        tracing::debug!("get_build_type_statistics({})", build_id);
        self.get(&format!("/builds/{}/statistics", build_id), None)
    }
}
