//
//  teamcity-client
//  cli/group.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User group commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::UserGroup;

use super::GlobalOptions;

/// Manage user groups
#[derive(Args, Debug)]
pub struct GroupCommand {
    #[command(subcommand)]
    pub command: GroupSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GroupSubcommand {
    /// List user groups
    #[command(visible_alias = "ls")]
    List,

    /// View a user group by key
    View(ViewArgs),

    /// Create a user group
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Group key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Group key
    #[arg(long, short = 'k')]
    pub key: String,

    /// Display name
    #[arg(long, short = 'n')]
    pub name: String,

    /// Description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Key of a parent group (repeatable)
    #[arg(long = "parent", short = 'p')]
    pub parents: Vec<String>,
}

impl CreateArgs {
    fn to_group(&self) -> UserGroup {
        UserGroup {
            key: self.key.clone(),
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            parent_groups: self
                .parents
                .iter()
                .map(|key| UserGroup {
                    key: key.clone(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }
}

impl GroupCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer()?;

        match &self.command {
            GroupSubcommand::List => writer.write_list(&client.get_user_groups()?),
            GroupSubcommand::View(args) => writer.write(&client.get_user_group(&args.key)?),
            GroupSubcommand::Create(args) => {
                let created = client.create_user_group(&args.to_group())?;
                writer.write_success(&format!("Created group {}", created.key));
                writer.write(&created)
            }
        }
    }
}
