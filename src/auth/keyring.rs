//
//  teamcity-client
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Password Storage
//!
//! Stores the password used for HTTP authentication in the platform's native
//! keyring so it never has to be written to the configuration file.
//!
//! - **macOS**: Keychain Services
//! - **Linux**: Secret Service API (GNOME Keyring, KWallet)
//! - **Windows**: Windows Credential Manager
//!
//! Entries are keyed by `<username>@<server url>` under the service name
//! `teamcity-client`, so one user can keep passwords for several servers.
//!
//! ```rust,no_run
//! use teamcity_client::auth::KeyringStore;
//!
//! let store = KeyringStore::new();
//! store.store("https://ci.example.com", "jdoe", "secret")?;
//!
//! if let Some(password) = store.get("https://ci.example.com", "jdoe")? {
//!     println!("found a stored password ({} chars)", password.len());
//! }
//!
//! store.delete("https://ci.example.com", "jdoe")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;
use keyring::Entry;

/// The service name under which all passwords are stored.
const SERVICE_NAME: &str = "teamcity-client";

/// Secure password storage backed by the system keyring.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    /// Creates a store using the default service name.
    ///
    /// No keyring access happens until a method is called.
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Builds the keyring account name for a server/user pair.
    ///
    /// A trailing `/` on the server URL is ignored so both spellings of the
    /// same server share one entry.
    pub fn account(server_url: &str, username: &str) -> String {
        let server = server_url.strip_suffix('/').unwrap_or(server_url);
        format!("{}@{}", username, server)
    }

    /// Stores (or replaces) the password for `username` on `server_url`.
    pub fn store(&self, server_url: &str, username: &str, password: &str) -> Result<()> {
        let entry = Entry::new(&self.service, &Self::account(server_url, username))?;
        entry.set_password(password)?;
        Ok(())
    }

    /// Retrieves the stored password, if any.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no entry exists; `Err` only for keyring access errors.
    pub fn get(&self, server_url: &str, username: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, &Self::account(server_url, username))?;
        match entry.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the stored password. Deleting a missing entry succeeds.
    pub fn delete(&self, server_url: &str, username: &str) -> Result<()> {
        let entry = Entry::new(&self.service, &Self::account(server_url, username))?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already deleted
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_ignores_trailing_slash() {
        assert_eq!(
            KeyringStore::account("https://ci.example.com/", "jdoe"),
            "jdoe@https://ci.example.com"
        );
        assert_eq!(
            KeyringStore::account("https://ci.example.com", "jdoe"),
            "jdoe@https://ci.example.com"
        );
    }
}
