//
//  teamcity-client
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Small helpers for reading and writing the configuration file. Writes
//! create missing parent directories.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use teamcity_client::config::{config_exists, read_config_file, write_config_file};
//!
//! let path = Path::new("/tmp/tc/config.toml");
//! if !config_exists(path) {
//!     write_config_file(path, "[server]\nurl = \"https://ci.example.com\"\n")?;
//! }
//! println!("{}", read_config_file(path)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the whole configuration file into a string.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes the configuration file, creating parent directories as needed.
///
/// Existing content is replaced.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Returns `true` if a file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.exists()
}
