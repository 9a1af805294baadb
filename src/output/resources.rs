//
//  teamcity-client
//  output/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table layouts for the TeamCity resource types.

use crate::api::common::PropertyMap;
use crate::api::{Build, BuildType, Change, Project, ServerLicensingData, User, UserGroup};

use super::{format_bool, format_status, truncate, DetailOutput, TableOutput};

fn or_dash(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}

/// Renders a JSON value without the quotes strings get from `to_string`.
fn plain(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

impl TableOutput for Project {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Parent", "Description"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            or_dash(&self.parent_project_id),
            truncate(&or_dash(&self.description), 40),
        ]
    }
}

impl DetailOutput for Project {
    fn fields(&self, _color: bool) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.clone()),
            ("Name", self.name.clone()),
            ("Parent", or_dash(&self.parent_project_id)),
            ("Description", or_dash(&self.description)),
        ]
    }
}

impl TableOutput for BuildType {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Project", "Description"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.project_id.clone(),
            truncate(&or_dash(&self.description), 40),
        ]
    }
}

impl DetailOutput for BuildType {
    fn fields(&self, _color: bool) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.clone()),
            ("Name", self.name.clone()),
            ("Project", self.project_id.clone()),
            ("Description", or_dash(&self.description)),
        ]
    }
}

impl TableOutput for Build {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Number", "Status", "Build Type", "Status Text"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.number.clone(),
            format_status(self.status.as_str(), color),
            self.build_type_id.clone(),
            truncate(&or_dash(&self.status_text), 40),
        ]
    }
}

impl DetailOutput for Build {
    fn fields(&self, color: bool) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Number", self.number.clone()),
            ("Status", format_status(self.status.as_str(), color)),
            ("Status Text", or_dash(&self.status_text)),
            ("Progress", format!("{}%", self.progress)),
            ("Build Type", self.build_type_id.clone()),
            ("Queued", or_dash(&self.queued_date_raw)),
            ("Started", or_dash(&self.start_date_raw)),
            ("Finished", or_dash(&self.finish_date_raw)),
        ]
    }
}

impl TableOutput for Change {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Version", "Author", "Date"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.id.to_string(),
            truncate(&self.version, 12),
            or_dash(&self.username),
            or_dash(&self.date),
        ]
    }
}

impl DetailOutput for Change {
    fn fields(&self, _color: bool) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Version", self.version.clone()),
            ("Author", or_dash(&self.username)),
            ("Date", or_dash(&self.date)),
        ]
    }
}

impl TableOutput for UserGroup {
    fn headers() -> Vec<&'static str> {
        vec!["Key", "Name", "Description"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.key.clone(),
            self.name.clone(),
            truncate(&or_dash(&self.description), 40),
        ]
    }
}

impl DetailOutput for UserGroup {
    fn fields(&self, _color: bool) -> Vec<(&'static str, String)> {
        let parents: Vec<&str> = self.parent_groups.iter().map(|g| g.key.as_str()).collect();
        let users: Vec<&str> = self.users.iter().map(|u| u.username.as_str()).collect();
        let roles: Vec<&str> = self.roles.iter().map(|r| r.role_id.as_str()).collect();
        vec![
            ("Key", self.key.clone()),
            ("Name", self.name.clone()),
            ("Description", or_dash(&self.description)),
            ("Parent Groups", or_dash(&parents.join(", "))),
            ("Users", or_dash(&users.join(", "))),
            ("Roles", or_dash(&roles.join(", "))),
        ]
    }
}

impl DetailOutput for User {
    fn fields(&self, _color: bool) -> Vec<(&'static str, String)> {
        let groups: Vec<&str> = self.groups.iter().map(|g| g.key.as_str()).collect();
        let roles: Vec<String> = self
            .roles
            .iter()
            .map(|r| format!("{} ({})", r.role_id, or_dash(&r.scope)))
            .collect();
        vec![
            ("ID", self.id.to_string()),
            ("Username", self.username.clone()),
            ("Name", or_dash(&self.name)),
            ("Email", or_dash(&self.email)),
            ("Last Login", or_dash(&self.last_login)),
            ("Has Password", format_bool(self.has_password)),
            ("Groups", or_dash(&groups.join(", "))),
            ("Roles", or_dash(&roles.join(", "))),
            ("Properties", self.properties.properties.len().to_string()),
        ]
    }
}

impl DetailOutput for ServerLicensingData {
    fn fields(&self, _color: bool) -> Vec<(&'static str, String)> {
        vec![
            ("License Type", or_dash(&self.server_license_type)),
            ("Max Agents", self.max_agents.to_string()),
            ("Agents Left", self.agents_left.to_string()),
            ("Max Build Types", self.max_build_types.to_string()),
            ("Build Types Left", self.build_types_left.to_string()),
        ]
    }
}

/// Statistic and property entries are shown by their `name` and `value`.
impl TableOutput for PropertyMap {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Value"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![plain(self.get("name")), plain(self.get("value"))]
    }
}
