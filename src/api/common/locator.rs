//
//  teamcity-client
//  api/common/locator.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Locator Expressions
//!
//! TeamCity filters collections with *locators*: comma-separated
//! `dimension:value` pairs, where a value can itself be a parenthesised
//! locator.
//!
//! ```text
//! project:Root,count:10
//! buildType:Main_Build,sinceChange:42
//! build:(id:1234)
//! ```
//!
//! The server enforces every dimension, including `count`; callers never
//! re-filter the returned items.

use std::fmt;

use super::escape;

/// Builder for a locator expression.
///
/// Dimensions are rendered in insertion order.
///
/// # Example
///
/// ```rust
/// use teamcity_client::api::common::Locator;
///
/// let locator = Locator::new()
///     .escaped("project", "My Project")
///     .dimension("count", 5);
/// assert_eq!(locator.to_string(), "project:My+Project,count:5");
///
/// let nested = Locator::new().nested("build", Locator::new().dimension("id", 7));
/// assert_eq!(nested.to_string(), "build:(id:7)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locator {
    dimensions: Vec<(String, String)>,
}

impl Locator {
    /// Creates an empty locator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dimension whose value is rendered verbatim.
    ///
    /// Use this for numbers, booleans and values the caller already escaped.
    pub fn dimension(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.dimensions.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds a dimension whose value is an identifier and must be escaped.
    pub fn escaped(self, name: &str, value: &str) -> Self {
        let value = escape(value);
        self.dimension(name, value)
    }

    /// Adds a dimension whose value is another locator, wrapped in parentheses.
    pub fn nested(self, name: &str, inner: Locator) -> Self {
        let value = format!("({})", inner);
        self.dimension(name, value)
    }

    /// Returns `true` when no dimension was added.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Renders the locator as a `locator` query parameter.
    pub fn into_query(self) -> Vec<(&'static str, String)> {
        vec![("locator", self.to_string())]
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.dimensions.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", name, value)?;
        }
        Ok(())
    }
}
