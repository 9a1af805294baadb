//
//  teamcity-client
//  cli/change.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! VCS change commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::{Change, TeamCityClient};

use super::GlobalOptions;

/// Inspect VCS changes
#[derive(Args, Debug)]
pub struct ChangeCommand {
    #[command(subcommand)]
    pub command: ChangeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ChangeSubcommand {
    /// List changes
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// View a change by ID
    View(ViewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list changes of this project
    #[arg(long, short = 'p', conflicts_with_all = ["build", "build_type"])]
    pub project: Option<String>,

    /// Only list changes included in this build
    #[arg(long, conflicts_with = "build_type")]
    pub build: Option<u64>,

    /// Only list changes of this build configuration (requires --since or --pending)
    #[arg(long, short = 'b')]
    pub build_type: Option<String>,

    /// List changes made after this change ID
    #[arg(long, requires = "build_type", conflicts_with = "pending")]
    pub since: Option<u64>,

    /// List changes not yet included in a build
    #[arg(long, requires = "build_type")]
    pub pending: bool,

    /// Maximum number of changes to list
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Change ID
    pub id: u64,
}

impl ChangeCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer()?;

        match &self.command {
            ChangeSubcommand::List(args) => writer.write_list(&list_changes(&client, args)?),
            ChangeSubcommand::View(args) => writer.write(&client.get_change_by_id(args.id)?),
        }
    }
}

fn list_changes(client: &TeamCityClient, args: &ListArgs) -> Result<Vec<Change>> {
    if let Some(project) = &args.project {
        return Ok(client.get_changes_for_project(project, args.limit)?);
    }
    if let Some(build) = args.build {
        return Ok(client.get_changes_for_build(build)?);
    }
    if let Some(build_type) = &args.build_type {
        return match (args.since, args.pending) {
            (Some(since), _) => Ok(client.get_changes_for_build_type_since_change(build_type, since)?),
            (None, true) => Ok(client.get_changes_for_build_type_pending(build_type)?),
            (None, false) => bail!("--build-type requires either --since <change-id> or --pending"),
        };
    }
    Ok(client.get_changes(args.limit)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ListArgs,
    }

    #[test]
    fn test_since_requires_build_type() {
        assert!(TestCli::try_parse_from(["test", "--since", "5"]).is_err());
        assert!(TestCli::try_parse_from(["test", "--build-type", "Bt1", "--since", "5"]).is_ok());
    }

    #[test]
    fn test_since_conflicts_with_pending() {
        let result = TestCli::try_parse_from(["test", "-b", "Bt1", "--since", "5", "--pending"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_limit() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        assert_eq!(cli.args.limit, 10);
        assert!(cli.args.project.is_none());
    }
}
