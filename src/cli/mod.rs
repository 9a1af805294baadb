//
//  teamcity-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod build;
mod build_type;
mod change;
mod completion;
mod config;
mod group;
mod project;
mod server;
mod user;

pub use auth::AuthCommand;
pub use build::BuildCommand;
pub use build_type::BuildTypeCommand;
pub use change::ChangeCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use group::GroupCommand;
pub use project::ProjectCommand;
pub use server::ServerCommand;
pub use user::UserCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::TeamCityClient;
use crate::auth::KeyringStore;
use crate::config::Config;
use crate::context::{ConnectionArgs, ServerContext};
use crate::output::{OutputFormat, OutputWriter};

/// TeamCity CLI - Query a TeamCity server from the command line
#[derive(Parser, Debug)]
#[command(
    name = "tc",
    version,
    about = "Query a TeamCity server from the command line",
    long_about = "tc is a CLI for the TeamCity REST API.\n\n\
                  It lists projects, build configurations, builds and changes, \
                  and manages users and groups.",
    propagate_version = true,
    after_help = "Use 'tc <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// TeamCity server URL (e.g. https://ci.example.com)
    #[arg(long, global = true, env = "TC_URL")]
    pub url: Option<String>,

    /// Username for HTTP authentication
    #[arg(long, short = 'u', global = true, env = "TC_USERNAME")]
    pub username: Option<String>,

    /// Password for HTTP authentication
    #[arg(long, global = true, env = "TC_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Use guest access even if a username is configured
    #[arg(long, global = true)]
    pub guest: bool,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "TC_TIMEOUT")]
    pub timeout: Option<u64>,
}

impl GlobalOptions {
    fn connection_args(&self) -> ConnectionArgs {
        ConnectionArgs {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            guest: self.guest,
            timeout: self.timeout,
        }
    }

    /// Resolves the server connection from flags, config and keyring.
    pub fn context(&self, config: &Config) -> Result<ServerContext> {
        let keyring = KeyringStore::new();
        ServerContext::resolve(&self.connection_args(), config, |url, user| keyring.get(url, user))
    }

    /// Builds an API client from the global options and the config file.
    pub fn client(&self) -> Result<TeamCityClient> {
        let config = Config::load()?;
        self.context(&config)?.client()
    }

    /// Returns the output writer for the selected format.
    ///
    /// `--json` wins over the configured format. A config file that cannot be
    /// read is an error, as it is for [`client`](Self::client).
    pub fn writer(&self) -> Result<OutputWriter> {
        if self.json {
            return Ok(OutputWriter::new(OutputFormat::Json));
        }
        let config = Config::load()?;
        Ok(OutputWriter::new(OutputFormat::from_name(&config.core.output)))
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with a TeamCity server
    Auth(AuthCommand),

    /// Inspect projects
    #[command(visible_alias = "proj")]
    Project(ProjectCommand),

    /// Inspect build configurations
    #[command(name = "build-type", visible_alias = "bt")]
    BuildType(BuildTypeCommand),

    /// Inspect builds
    Build(BuildCommand),

    /// Inspect VCS changes
    Change(ChangeCommand),

    /// Inspect users and their groups
    User(UserCommand),

    /// Manage user groups
    Group(GroupCommand),

    /// Server information
    Server(ServerCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
