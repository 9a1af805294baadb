//
//  teamcity-client
//  api/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity Project API
//!
//! Projects group build configurations and form a tree: every project except
//! `_Root` names its parent by ID.
//!
//! ## API Endpoints
//!
//! ```text
//! GET /projects
//! GET /projects/id:{projectId}
//! GET /projects?locator=name:{name}
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::TeamCityClient;
use crate::api::common::{escape, ApiError, Locator};

/// A TeamCity project.
///
/// # Example
///
/// ```rust,no_run
/// # use teamcity_client::api::TeamCityClient;
/// # let client = TeamCityClient::guest("https://ci.example.com")?;
/// let project = client.get_project_by_id("Backend")?;
/// println!("{} (parent: {})", project.name, project.parent_project_id);
/// # Ok::<(), teamcity_client::api::ApiError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project ID, e.g. "Backend".
    #[serde(default)]
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Free-text description. Empty when the project has none.
    #[serde(default)]
    pub description: String,

    /// ID of the parent project. Empty for the root project.
    #[serde(default)]
    pub parent_project_id: String,
}

impl Project {
    /// Returns `true` for the root of the project tree.
    pub fn is_root(&self) -> bool {
        self.parent_project_id.is_empty()
    }
}

/// Envelope returned by `GET /projects`. The `count` field is not needed.
#[derive(Debug, Default, Deserialize)]
struct ProjectList {
    #[serde(default)]
    project: Vec<Project>,
}

impl TeamCityClient {
    /// Gets a project by its ID.
    pub fn get_project_by_id(&self, id: &str) -> Result<Project, ApiError> {
        tracing::debug!("get_project_by_id({:?})", id);
        self.get(&format!("/projects/id:{}", escape(id)), None)
    }

    /// Gets a project by its display name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no project has that name.
    pub fn get_project_by_name(&self, name: &str) -> Result<Project, ApiError> {
        tracing::debug!("get_project_by_name({:?})", name);
        let query = Locator::new().escaped("name", name).into_query();
        let list: ProjectList = self.get("/projects", Some(&query))?;

        list.project
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(format!("project named '{}'", name)))
    }

    /// Lists all projects visible to the current user.
    pub fn get_projects(&self) -> Result<Vec<Project>, ApiError> {
        tracing::debug!("get_projects()");
        let list: ProjectList = self.get("/projects", None)?;
        Ok(list.project)
    }
}
