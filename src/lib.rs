//
//  clumio-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # clumio-sdk
//!
//! A typed client for the Clumio REST API, plus the `clumio` command-line tool built on it.
//!
//! ## Layers
//!
//! - [`model`]: the declarative field table behind every payload, the generic hydrator and
//!   serializer, and the `clumio_model!` macro
//! - [`models`]: request and response payloads, one module per resource family
//! - [`api`]: the HTTP transport ([`ClumioClient`]), request templating, errors, filters
//! - [`controllers`]: one controller per resource family, reached through client accessors
//! - [`auth`], [`config`]: bearer tokens, keyring storage and the TOML configuration file
//! - [`cli`], [`output`], [`util`]: the `clumio` binary
//!
//! ## Example
//!
//! ```rust,no_run
//! use clumio_sdk::api::{ClumioClient, Filter, ListParams};
//! use clumio_sdk::auth::ApiToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ClumioClient::new("https://us-west-2.api.clumio.com")?
//!     .with_auth(ApiToken::new("your-api-token"));
//!
//! let params = ListParams::new().filter(Filter::new().equals("activation_status", "activated"));
//! let policies = client.policy_definitions().list(&params).await?;
//!
//! if let Some(page) = policies.data() {
//!     println!("{:?} policies", page.total_count);
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod model;

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod controllers;
pub mod models;
pub mod output;
pub mod util;

pub use api::ClumioClient;
pub use cli::Cli;
pub use config::Config;

/// Binary name.
pub const APP_NAME: &str = "clumio";

/// Crate version, also sent in `user-agent` and `x-clumio-sdk-version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes of the `clumio` binary.
///
/// Codes are distinct powers of two above `USAGE` so scripts can tell failures apart.
///
/// ```bash
/// clumio task view "$TASK_ID"
/// case $? in
///     0) echo "ok" ;;
///     4) echo "log in with: clumio auth login" ;;
///     8) echo "no such task" ;;
/// esac
/// ```
pub mod exit_codes {
    /// The command completed.
    pub const SUCCESS: i32 = 0;

    /// Any failure not covered below.
    pub const ERROR: i32 = 1;

    /// Invalid arguments; clap exits with this code on its own.
    pub const USAGE: i32 = 2;

    /// The API answered `401` or `403`, or no token was found.
    pub const AUTH_ERROR: i32 = 4;

    /// The API answered `404`.
    pub const NOT_FOUND: i32 = 8;

    /// The API answered `429`.
    pub const RATE_LIMIT: i32 = 32;
}
