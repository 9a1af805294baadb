//
//  teamcity-client
//  cli/server.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Server information commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;

/// Server information
#[derive(Args, Debug)]
pub struct ServerCommand {
    #[command(subcommand)]
    pub command: ServerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ServerSubcommand {
    /// Show license limits and remaining capacity
    License,
}

impl ServerCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.writer()?;

        match &self.command {
            ServerSubcommand::License => writer.write(&client.get_server_licensing_data()?),
        }
    }
}
