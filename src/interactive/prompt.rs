//
//  teamcity-client
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts Module
//!
//! Thin wrappers over `dialoguer` for the few values the CLI may have to ask
//! for interactively.
//!
//! ```no_run
//! use teamcity_client::interactive::{prompt_input, prompt_password};
//!
//! let username = prompt_input("TeamCity username").unwrap();
//! let password = prompt_password("Password").unwrap();
//! ```

use std::io::{BufRead, IsTerminal};

use anyhow::{bail, Result};
use dialoguer::{Input, Password};

/// Prompts for a line of text.
pub fn prompt_input(message: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(message).interact_text()?;
    Ok(input)
}

/// Prompts for a password without echoing it.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

/// Reads a password from the first line of stdin.
///
/// Used by `--password-stdin` so scripts can pipe a secret in. Fails if stdin
/// is a terminal or the line is empty.
pub fn read_password_from_stdin() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("--password-stdin expects the password to be piped in");
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("No password received on stdin");
    }
    Ok(password)
}
