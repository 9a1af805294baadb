//
//  teamcity-client
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::UserGroup;

use super::GlobalOptions;

/// Inspect users and their groups
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// View a user
    View(ViewArgs),

    /// Replace the groups a user belongs to
    #[command(name = "set-groups")]
    SetGroups(SetGroupsArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// User locator, e.g. "current", "id:1" or "username:jdoe"
    pub locator: String,
}

#[derive(Args, Debug)]
pub struct SetGroupsArgs {
    /// User locator, e.g. "username:jdoe"
    pub locator: String,

    /// Keys of the groups the user should belong to
    #[arg(required = true)]
    pub keys: Vec<String>,
}

impl UserCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer()?;

        match &self.command {
            UserSubcommand::View(args) => writer.write(&client.get_user(&args.locator)?),
            UserSubcommand::SetGroups(args) => {
                let groups: Vec<UserGroup> = args
                    .keys
                    .iter()
                    .map(|key| UserGroup {
                        key: key.clone(),
                        ..Default::default()
                    })
                    .collect();
                let updated = client.update_user_groups(&args.locator, &groups)?;
                writer.write_success(&format!("Updated groups of {}", args.locator));
                writer.write_list(&updated)
            }
        }
    }
}
