//
//  teamcity-client
//  cli/build_type.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build configuration commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

/// Inspect build configurations
#[derive(Args, Debug)]
pub struct BuildTypeCommand {
    #[command(subcommand)]
    pub command: BuildTypeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BuildTypeSubcommand {
    /// List build configurations
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a build configuration by ID
    View(ViewArgs),

    /// Show the statistics reported for a build
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list build configurations of this project
    #[arg(long, short = 'p')]
    pub project: Option<String>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Build configuration ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Build ID
    pub build_id: u64,
}

impl BuildTypeCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer()?;

        match &self.command {
            BuildTypeSubcommand::List(args) => {
                let build_types = match &args.project {
                    Some(project) => client.get_build_types_for_project(project)?,
                    None => client.get_build_types()?,
                };
                writer.write_list(&build_types)
            }
            BuildTypeSubcommand::View(args) => writer.write(&client.get_build_type_by_id(&args.id)?),
            BuildTypeSubcommand::Stats(args) => {
                let stats = client.get_build_type_statistics(args.build_id)?;
                writer.write_list(&stats.properties)
            }
        }
    }
}
