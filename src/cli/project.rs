//
//  teamcity-client
//  cli/project.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

/// Inspect projects
#[derive(Args, Debug)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectSubcommand {
    /// List projects
    #[command(visible_alias = "ls")]
    List,

    /// View a project by ID
    View(ViewArgs),

    /// Find a project by name
    Find(FindArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Project ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Project name
    pub name: String,
}

impl ProjectCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer()?;

        match &self.command {
            ProjectSubcommand::List => writer.write_list(&client.get_projects()?),
            ProjectSubcommand::View(args) => writer.write(&client.get_project_by_id(&args.id)?),
            ProjectSubcommand::Find(args) => writer.write(&client.get_project_by_name(&args.name)?),
        }
    }
}
