//
//  teamcity-client
//  cli/build.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Build commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::Build;
use crate::output::{print_field, write_json, OutputFormat};

use super::GlobalOptions;

/// Inspect builds
#[derive(Args, Debug)]
pub struct BuildCommand {
    #[command(subcommand)]
    pub command: BuildSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BuildSubcommand {
    /// List the latest builds
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a build by ID
    View(ViewArgs),

    /// Show the parsed queue, start and finish dates of a build
    Dates(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list builds of this build configuration
    #[arg(long, short = 'b')]
    pub build_type: Option<String>,

    /// Maximum number of builds to list
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Build ID
    pub id: u64,
}

/// Parsed build dates as RFC 3339 strings, or the parse error.
#[derive(Debug, Serialize)]
struct BuildDates {
    id: u64,
    queued: Result<String, String>,
    started: Result<String, String>,
    finished: Result<String, String>,
}

impl BuildDates {
    fn from_build(build: &Build) -> Self {
        let render = |parsed: Result<chrono::DateTime<chrono::FixedOffset>, crate::api::ApiError>| {
            parsed.map(|d| d.to_rfc3339()).map_err(|e| e.to_string())
        };
        Self {
            id: build.id,
            queued: render(build.queued_date()),
            started: render(build.start_date()),
            finished: render(build.finish_date()),
        }
    }
}

impl BuildCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer()?;

        match &self.command {
            BuildSubcommand::List(args) => {
                let builds = match &args.build_type {
                    Some(build_type) => client.get_builds_for_build_type(build_type, args.limit)?,
                    None => client.get_builds(args.limit)?,
                };
                writer.write_list(&builds)
            }
            BuildSubcommand::View(args) => writer.write(&client.get_build_by_id(args.id)?),
            BuildSubcommand::Dates(args) => {
                let build = client.get_build_by_id(args.id)?;
                let dates = BuildDates::from_build(&build);
                if writer.format() == OutputFormat::Json {
                    return write_json(&dates);
                }

                let color = writer.color_enabled();
                for (label, value) in [
                    ("Queued", &dates.queued),
                    ("Started", &dates.started),
                    ("Finished", &dates.finished),
                ] {
                    match value {
                        Ok(date) => print_field(label, date, color),
                        Err(e) => print_field(label, &format!("n/a ({})", e), color),
                    }
                }
                Ok(())
            }
        }
    }
}
