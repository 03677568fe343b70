//
//  clumio-sdk
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! System keyring storage for API tokens.
//!
//! Tokens are stored under the service name `clumio-sdk`, one entry per base path, so a user
//! with accounts in several Clumio regions can keep one token per region.
//!
//! | Platform | Backend |
//! |----------|---------|
//! | macOS | Keychain |
//! | Windows | Credential Manager |
//! | Linux | Secret Service (GNOME Keyring, KWallet) |

use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "clumio-sdk";

/// Token store backed by the platform keyring.
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Stores `token` for `base_path`, replacing any existing token.
    pub fn store(&self, base_path: &str, token: &str) -> Result<()> {
        let entry = Entry::new(&self.service, &account(base_path))?;
        entry
            .set_password(token)
            .context("Failed to write token to the system keyring")?;
        Ok(())
    }

    /// Returns the token for `base_path`, or `None` if nothing is stored.
    pub fn get(&self, base_path: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, &account(base_path))?;
        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the token for `base_path`. Removing a missing token is not an error.
    pub fn delete(&self, base_path: &str) -> Result<()> {
        let entry = Entry::new(&self.service, &account(base_path))?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keyring account name for a base path: the URL without scheme or trailing slash.
fn account(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_end_matches('/');
    trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_ignores_scheme_and_slash() {
        assert_eq!(
            account("https://us-west-2.api.clumio.com/"),
            "us-west-2.api.clumio.com"
        );
        assert_eq!(account("us-east-1.api.clumio.com"), "us-east-1.api.clumio.com");
    }
}
