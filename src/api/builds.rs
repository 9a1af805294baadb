//
//  teamcity-client
//  api/builds.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # TeamCity Build API
//!
//! ## API Endpoints
//!
//! ```text
//! GET /builds/id:{buildId}
//! GET /builds?locator=count:{n}
//! GET /builds?locator=buildType:{buildTypeId},count:{n}
//! ```
//!
//! ## Dates
//!
//! Build dates arrive as fixed-format strings such as
//! `20230115T120000+0000`. They are stored exactly as received and only
//! parsed when one of the date accessors is called, so a malformed date
//! never prevents the rest of the build from decoding.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::client::TeamCityClient;
use crate::api::common::{ApiError, Locator};

/// `chrono` layout of build dates (`YYYYMMDDThhmmss±hhmm`).
pub const DATE_LAYOUT: &str = "%Y%m%dT%H%M%S%z";

/// Outcome of a build.
///
/// Decoded from the server's upper-case status strings. Missing or
/// unrecognised values decode as [`BuildStatus::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    /// The build succeeded.
    Success,
    /// The build is still running.
    Running,
    /// The build failed.
    Failure,
    /// Status not reported or not recognised.
    #[default]
    #[serde(other)]
    Unknown,
}

impl BuildStatus {
    /// Returns the status as the server spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Success => "SUCCESS",
            Self::Running => "RUNNING",
            Self::Failure => "FAILURE",
        }
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single build of a build configuration.
///
/// # Example
///
/// ```rust
/// use teamcity_client::api::{Build, BuildStatus};
///
/// let json = r#"{
///     "id": 1042,
///     "number": "57",
///     "status": "SUCCESS",
///     "buildTypeId": "Api_Build",
///     "queuedDate": "20230115T120000+0000"
/// }"#;
///
/// let build: Build = serde_json::from_str(json).unwrap();
/// assert_eq!(build.status, BuildStatus::Success);
/// assert_eq!(build.queued_date().unwrap().to_rfc3339(), "2023-01-15T12:00:00+00:00");
/// assert!(build.finish_date().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Internal build ID.
    #[serde(default)]
    pub id: u64,

    /// Build number as shown in the UI (not necessarily numeric).
    #[serde(default)]
    pub number: String,

    /// Build outcome.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: BuildStatus,

    /// Human-readable status, e.g. "Tests passed: 120".
    #[serde(default)]
    pub status_text: String,

    /// Completion percentage of a running build.
    #[serde(default, rename = "percentageComplete", alias = "progress")]
    pub progress: u32,

    /// ID of the build configuration.
    #[serde(default)]
    pub build_type_id: String,

    /// Raw queue date.
    #[serde(default, rename = "queuedDate")]
    pub queued_date_raw: String,

    /// Raw start date. Empty while the build is queued.
    #[serde(default, rename = "startDate")]
    pub start_date_raw: String,

    /// Raw finish date. Empty until the build finishes.
    #[serde(default, rename = "finishDate")]
    pub finish_date_raw: String,
}

impl Build {
    /// Parses the date the build was queued.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DateParse`] if the raw value is empty or malformed.
    pub fn queued_date(&self) -> Result<DateTime<FixedOffset>, ApiError> {
        parse_date("queued", &self.queued_date_raw)
    }

    /// Parses the date the build started.
    pub fn start_date(&self) -> Result<DateTime<FixedOffset>, ApiError> {
        parse_date("start", &self.start_date_raw)
    }

    /// Parses the date the build finished.
    pub fn finish_date(&self) -> Result<DateTime<FixedOffset>, ApiError> {
        parse_date("finish", &self.finish_date_raw)
    }
}

/// Decodes `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Checks the fixed-width shape `YYYYMMDDThhmmss±hhmm`.
///
/// `chrono` accepts single-digit fields and `+hh:mm` offsets, so the width is
/// checked first.
fn has_date_layout(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 20
        && bytes.iter().enumerate().all(|(i, b)| match i {
            8 => *b == b'T',
            15 => *b == b'+' || *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a raw build date with [`DATE_LAYOUT`].
pub fn parse_date(field: &'static str, raw: &str) -> Result<DateTime<FixedOffset>, ApiError> {
    let error = |reason: String| ApiError::DateParse {
        field,
        raw: raw.to_string(),
        reason,
    };
    if !has_date_layout(raw) {
        return Err(error("expected YYYYMMDDThhmmss+hhmm".to_string()));
    }
    DateTime::parse_from_str(raw, DATE_LAYOUT).map_err(|e| error(e.to_string()))
}

#[derive(Debug, Default, Deserialize)]
struct BuildList {
    #[serde(default)]
    build: Vec<Build>,
}

impl TeamCityClient {
    /// Gets a build by its ID.
    pub fn get_build_by_id(&self, id: u64) -> Result<Build, ApiError> {
        tracing::debug!("get_build_by_id({})", id);
        self.get(&format!("/builds/id:{}", id), None)
    }

    /// Gets the `count` most recent builds.
    pub fn get_builds(&self, count: usize) -> Result<Vec<Build>, ApiError> {
        tracing::debug!("get_builds({})", count);
        let query = Locator::new().dimension("count", count).into_query();
        let list: BuildList = self.get("/builds", Some(&query))?;
        Ok(list.build)
    }

    /// Gets the `count` most recent builds of a build configuration.
    pub fn get_builds_for_build_type(&self, build_type_id: &str, count: usize) -> Result<Vec<Build>, ApiError> {
        tracing::debug!("get_builds_for_build_type({:?}, {})", build_type_id, count);
        let query = Locator::new()
            .escaped("buildType", build_type_id)
            .dimension("count", count)
            .into_query();
        let list: BuildList = self.get("/builds", Some(&query))?;
        Ok(list.build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_with_queued(raw: &str) -> Build {
        Build {
            queued_date_raw: raw.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_queued_date_round_trip() {
        let build = build_with_queued("20230115T120000+0000");
        let parsed = build.queued_date().unwrap();
        assert_eq!(parsed.format(DATE_LAYOUT).to_string(), "20230115T120000+0000");
    }

    #[test]
    fn test_date_keeps_offset() {
        let build = build_with_queued("20240301T081530-0500");
        let parsed = build.queued_date().unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(parsed.format(DATE_LAYOUT).to_string(), "20240301T081530-0500");
    }

    #[test]
    fn test_malformed_date_fails_on_access() {
        let build = build_with_queued("not-a-date");
        let err = build.queued_date().unwrap_err();
        match err {
            ApiError::DateParse { field, raw, .. } => {
                assert_eq!(field, "queued");
                assert_eq!(raw, "not-a-date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_date_fails_on_access() {
        let build = Build::default();
        assert!(matches!(
            build.start_date(),
            Err(ApiError::DateParse { field: "start", .. })
        ));
    }

    #[test]
    fn test_decode_build_with_bad_date_succeeds() {
        let json = r#"{"id": 7, "number": "7", "status": "FAILURE", "startDate": "yesterday"}"#;
        let build: Build = serde_json::from_str(json).unwrap();
        assert_eq!(build.status, BuildStatus::Failure);
        assert!(build.start_date().is_err());
    }

    #[test]
    fn test_decode_status() {
        let decode = |s: &str| -> BuildStatus { serde_json::from_str(&format!("\"{}\"", s)).unwrap() };
        assert_eq!(decode("SUCCESS"), BuildStatus::Success);
        assert_eq!(decode("FAILURE"), BuildStatus::Failure);
        assert_eq!(decode("RUNNING"), BuildStatus::Running);
        assert_eq!(decode("ERROR"), BuildStatus::Unknown);
    }

    #[test]
    fn test_short_field_is_rejected() {
        let build = build_with_queued("2023011T120000+0000");
        assert!(matches!(build.queued_date(), Err(ApiError::DateParse { .. })));
    }

    #[test]
    fn test_colon_offset_is_rejected() {
        let build = build_with_queued("20230115T120000+00:00");
        assert!(matches!(build.queued_date(), Err(ApiError::DateParse { .. })));
    }

    #[test]
    fn test_out_of_range_month_is_rejected() {
        let build = build_with_queued("20231315T120000+0000");
        assert!(build.queued_date().is_err());
    }

    #[test]
    fn test_null_status_decodes_as_unknown() {
        let build: Build = serde_json::from_str(r#"{"id": 3, "status": null}"#).unwrap();
        assert_eq!(build.status, BuildStatus::Unknown);
    }

    #[test]
    fn test_decode_progress() {
        let build: Build = serde_json::from_str(r#"{"id": 1, "percentageComplete": 42}"#).unwrap();
        assert_eq!(build.progress, 42);
        assert_eq!(build.status, BuildStatus::Unknown);
    }
}
