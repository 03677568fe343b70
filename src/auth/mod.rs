//
//  clumio-sdk
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication
//!
//! Clumio authenticates API calls with a bearer token generated in the Clumio UI
//! (*Settings → API Tokens*). This module provides the token type, a format check, and
//! storage of tokens in the system keyring.
//!
//! ## Token Resolution
//!
//! [`resolve_token`] looks for a token in this order:
//!
//! | Source | Notes |
//! |--------|-------|
//! | `CLUMIO_API_TOKEN` | Environment variable, useful in CI |
//! | System keyring | Stored by `clumio auth login`, keyed by base path |
//!
//! ## Security
//!
//! Tokens are never written to the configuration file, and the `Debug` output of
//! [`ApiToken`] is redacted.

mod keyring;
mod token;

pub use keyring::*;
pub use token::*;

use std::fmt;

use reqwest::RequestBuilder;
use tracing::debug;

/// Environment variable consulted before the keyring.
pub const TOKEN_ENV_VAR: &str = "CLUMIO_API_TOKEN";

/// A Clumio API bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Adds the `Authorization: Bearer` header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.0)
    }

    /// Returns the first characters of the token followed by an ellipsis.
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        format!("{}…", prefix)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiToken").field(&self.redacted()).finish()
    }
}

/// Finds the token for `base_path`, first in the environment, then in the keyring.
///
/// Keyring failures (no secret service, locked keychain) are logged and treated as "no token"
/// so that commands which do not need authentication keep working.
pub fn resolve_token(base_path: &str) -> Option<ApiToken> {
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        let token = token.trim();
        if !token.is_empty() {
            return Some(ApiToken::new(token));
        }
    }

    match KeyringStore::new().get(base_path) {
        Ok(token) => token.map(ApiToken::new),
        Err(e) => {
            debug!(error = %e, "keyring lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let token = ApiToken::new("eyJhbGciOiJSUzI1NiJ9.secret");
        let debug = format!("{:?}", token);
        assert_eq!(debug, "ApiToken(\"eyJh…\")");
        assert!(!debug.contains("secret"));
        assert_eq!(token.as_str(), "eyJhbGciOiJSUzI1NiJ9.secret");
    }
}
