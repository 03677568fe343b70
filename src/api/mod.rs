//
//  clumio-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP transport used by every resource controller.
//!
//! ## Architecture
//!
//! - [`client`]: [`ClumioClient`], which sends requests and maps responses
//! - [`request`]: [`Request`], the description of one call (path template, query, body)
//! - [`common`]: Shared types (errors, raw responses, dual-status results, list parameters)
//!
//! The per-resource operations live in [`crate::controllers`] and the payload types in
//! [`crate::models`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clumio_sdk::api::ClumioClient;
//! use clumio_sdk::api::common::ListParams;
//! use clumio_sdk::auth::ApiToken;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ClumioClient::new("https://us-west-2.api.clumio.com")?
//!     .with_auth(ApiToken::new("your-api-token"));
//!
//! let page = client
//!     .policy_definitions()
//!     .list(&ListParams::new().limit(10))
//!     .await?;
//!
//! if let Some(list) = page.data() {
//!     println!("{} policies", list.total_count.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`], which always names the operation that failed:
//!
//! - `Operation`: the API answered with a non-2xx status
//! - `Network`: no response was received
//! - `Hydration`: a 2xx body did not match the response model
//! - `InvalidRequest`: the request could not be built

pub mod client;
pub mod common;
pub mod request;

/// Re-export of the Clumio API client.
pub use client::ClumioClient;

/// Re-export of the types most callers need.
pub use common::{ApiError, ApiResponse, Filter, ListParams, OperationResult, RawResponse};

pub use request::Request;
