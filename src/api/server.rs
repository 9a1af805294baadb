//
//  teamcity-client
//  api/server.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Server-wide endpoints.

use serde::{Deserialize, Serialize};

use crate::api::client::TeamCityClient;
use crate::api::common::ApiError;

/// Snapshot of the server's license limits.
///
/// Negative "left" values are how TeamCity reports an unlimited license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerLicensingData {
    #[serde(default)]
    pub max_agents: i64,

    #[serde(default)]
    pub agents_left: i64,

    #[serde(default)]
    pub max_build_types: i64,

    #[serde(default)]
    pub build_types_left: i64,

    /// License type, e.g. "professional" or "enterprise".
    #[serde(default)]
    pub server_license_type: String,
}

impl TeamCityClient {
    /// Gets the server's licensing data (`GET /server/licensingData`).
    pub fn get_server_licensing_data(&self) -> Result<ServerLicensingData, ApiError> {
        tracing::debug!("get_server_licensing_data()");
        self.get("/server/licensingData", None)
    }
}
