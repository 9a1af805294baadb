//
//  teamcity-client
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands for the TeamCity CLI.
//!
//! `tc auth login` checks the credentials against the server before the
//! password goes into the system keyring and the server URL and username go
//! into the configuration file.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::api::TeamCityClient;
use crate::auth::{Authorizer, KeyringStore};
use crate::config::{normalize_server_url, Config};
use crate::interactive::{prompt_input, prompt_password, read_password_from_stdin};

use super::GlobalOptions;

/// Authenticate with a TeamCity server.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in to a TeamCity server
    Login(LoginArgs),

    /// Remove stored credentials
    Logout,

    /// View authentication status
    Status,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Log in with guest access (no credentials stored)
    #[arg(long = "as-guest", conflicts_with_all = ["password_stdin"])]
    pub as_guest: bool,

    /// Read the password from standard input
    #[arg(long)]
    pub password_stdin: bool,
}

impl AuthCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global),
            AuthSubcommand::Logout => logout(global),
            AuthSubcommand::Status => status(global),
        }
    }
}

/// Performs the login flow.
fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let mut config = Config::load()?;

    let url = match global.url.as_deref().or(config.server.url.as_deref()) {
        Some(url) => url.to_string(),
        None => prompt_input("TeamCity server URL")?,
    };
    let url = normalize_server_url(&url);

    if args.as_guest || global.guest {
        println!("Checking guest access to {}...", url);
        let client = client_for(&url, Authorizer::guest(), global)?;
        client
            .get_projects()
            .context("Guest access is not available on this server")?;

        config.server.url = Some(url.clone());
        config.server.guest = true;
        config.save()?;
        println!("Using guest access to {}", url);
        return Ok(());
    }

    let username = match &global.username {
        Some(username) => username.clone(),
        None => prompt_input("Username")?,
    };
    let password = match (&global.password, args.password_stdin) {
        (_, true) => read_password_from_stdin()?,
        (Some(password), false) => password.clone(),
        (None, false) => prompt_password("Password")?,
    };

    println!("Validating credentials...");
    let client = client_for(&url, Authorizer::http(&username, &password), global)?;
    let user = client
        .get_user("current")
        .with_context(|| format!("Could not log in to {} as {}", url, username))?;

    KeyringStore::new().store(&url, &username, &password)?;

    config.server.url = Some(url.clone());
    config.server.username = Some(username.clone());
    config.server.guest = false;
    config.save()?;

    if user.name.is_empty() {
        println!("Logged in to {} as {}", url, username);
    } else {
        println!("Logged in to {} as {} ({})", url, username, user.name);
    }
    Ok(())
}

fn logout(global: &GlobalOptions) -> Result<()> {
    let mut config = Config::load()?;

    let (Some(url), Some(username)) = (
        global.url.clone().or_else(|| config.server.url.clone()),
        global.username.clone().or_else(|| config.server.username.clone()),
    ) else {
        println!("Not logged in");
        return Ok(());
    };
    let url = normalize_server_url(&url);

    KeyringStore::new().delete(&url, &username)?;
    if config.server.username.as_deref() == Some(username.as_str()) {
        config.server.username = None;
        config.save()?;
    }

    println!("Logged out {} from {}", username, url);
    Ok(())
}

fn status(global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;

    let Some(url) = global.url.clone().or_else(|| config.server.url.clone()) else {
        println!("Not logged in to any TeamCity server");
        println!();
        println!("Run 'tc auth login' to authenticate");
        return Ok(());
    };
    let url = normalize_server_url(&url);

    println!("{}", url);
    let username = global.username.clone().or_else(|| config.server.username.clone());
    match username {
        Some(username) if !(global.guest || config.server.guest) => {
            println!("  Logged in as: {}", username);
            let stored = KeyringStore::new().get(&url, &username)?.is_some();
            println!("  Password stored: {}", if stored { "yes" } else { "no" });
        }
        _ => println!("  Guest access"),
    }
    Ok(())
}

fn client_for(url: &str, auth: Authorizer, global: &GlobalOptions) -> Result<TeamCityClient> {
    let mut builder = TeamCityClient::builder(url, auth);
    if let Some(secs) = global.timeout {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}
