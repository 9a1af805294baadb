//
//  teamcity-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use teamcity_client::api::ApiError;
use teamcity_client::cli::{Cli, Commands};
use teamcity_client::exit_codes;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("TC_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps API failures anywhere in the error chain to an exit code.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.chain().find_map(|cause| cause.downcast_ref::<ApiError>()) {
        Some(api) if api.is_auth_error() => exit_codes::AUTH_ERROR,
        Some(api) if api.is_not_found() => exit_codes::NOT_FOUND,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(cmd) => cmd.run(&cli.global),
        Commands::Project(cmd) => cmd.run(&cli.global),
        Commands::BuildType(cmd) => cmd.run(&cli.global),
        Commands::Build(cmd) => cmd.run(&cli.global),
        Commands::Change(cmd) => cmd.run(&cli.global),
        Commands::User(cmd) => cmd.run(&cli.global),
        Commands::Group(cmd) => cmd.run(&cli.global),
        Commands::Server(cmd) => cmd.run(&cli.global),
        Commands::Config(cmd) => cmd.run(&cli.global),
        Commands::Completion(cmd) => cmd.run(&cli.global),
        Commands::Version => {
            println!("tc version {}", teamcity_client::VERSION);
            Ok(())
        }
    }
}
