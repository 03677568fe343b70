//
//  clumio-sdk
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Clumio REST API
//!
//! This module provides the types shared by every resource controller: the domain error,
//! the response wrappers used for raw-response mode and dual-status operations, and the
//! list-endpoint query parameters.
//!
//! # Overview
//!
//! - [`ApiError`] - The single error type returned by controller operations
//! - [`RawResponse`] - The untouched transport response (status, headers, body)
//! - [`ApiResponse`] - Either a hydrated model or a raw response with a best-effort model
//! - [`OperationResult`] - Sync (200) or async-task (202) outcome of a dual-shape operation
//! - [`Filter`] / [`ListParams`] - The `filter`, `limit`, `start` and `embed` query values
//!
//! # Example
//!
//! ```rust
//! use clumio_sdk::api::common::ApiError;
//!
//! fn describe(result: Result<(), ApiError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(err) if err.is_not_found() => format!("{} found nothing", err.operation()),
//!         Err(err) => err.to_string(),
//!     }
//! }
//! ```

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{HydrationError, Model};

mod filter;
mod params;

pub use filter::*;
pub use params::*;

/// Error type for all Clumio controller operations.
///
/// Every variant names the operation that failed (for example `read_policy_definition`), so
/// callers can report failures without tracking call sites themselves.
///
/// # Variants
///
/// | Variant | Cause |
/// |---------|-------|
/// | `Operation` | The API answered with a non-2xx status |
/// | `Network` | No response was received (DNS, TLS, timeout, connection reset) |
/// | `Hydration` | A 2xx body could not be turned into the response model |
/// | `InvalidRequest` | The request could not be built (bad path parameter, bad base path) |
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API returned a non-success status.
    #[error("{operation} failed ({status}): {message}")]
    Operation {
        /// Name of the controller operation.
        operation: &'static str,
        /// HTTP status returned by the API.
        status: StatusCode,
        /// Message extracted from the error body.
        message: String,
        /// The parsed error body, when it was JSON.
        body: Option<Value>,
    },

    /// The request never produced a response.
    #[error("{operation} failed: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// A successful response did not match the expected model.
    #[error("{operation} returned an unexpected body: {source}")]
    Hydration {
        operation: &'static str,
        #[source]
        source: HydrationError,
    },

    /// The request could not be constructed.
    #[error("{operation}: invalid request: {reason}")]
    InvalidRequest {
        operation: &'static str,
        reason: String,
    },
}

impl ApiError {
    /// Returns the name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            ApiError::Operation { operation, .. }
            | ApiError::Network { operation, .. }
            | ApiError::Hydration { operation, .. }
            | ApiError::InvalidRequest { operation, .. } => operation,
        }
    }

    /// Returns the HTTP status for errors that came from an API response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Operation { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for 404 responses.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns true for 401 and 403 responses.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

/// The untouched response of one request/response exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parses the body as JSON. An empty body parses as `{}`.
    pub fn json(&self) -> Result<Value, HydrationError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Hydrates the body into a model.
    pub fn hydrate<T: Model>(&self) -> Result<T, HydrationError> {
        T::from_value(self.json()?)
    }
}

/// Result of a controller operation.
///
/// In the default mode operations return [`ApiResponse::Hydrated`]. When the client is built
/// with raw-response mode enabled, operations return [`ApiResponse::Raw`] for every status,
/// with `data` hydrated on a best-effort basis for 2xx responses only.
///
/// # Example
///
/// ```rust
/// use clumio_sdk::api::common::ApiResponse;
///
/// let response = ApiResponse::Hydrated(42);
/// assert_eq!(response.data(), Some(&42));
/// assert!(!response.is_raw());
/// ```
#[derive(Debug, Clone)]
pub enum ApiResponse<T> {
    /// The hydrated response model.
    Hydrated(T),
    /// The raw transport response and its best-effort hydration.
    Raw {
        response: RawResponse,
        data: Option<T>,
    },
}

impl<T> ApiResponse<T> {
    /// Returns the hydrated model, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResponse::Hydrated(data) => Some(data),
            ApiResponse::Raw { data, .. } => data.as_ref(),
        }
    }

    /// Consumes the response, returning the hydrated model, if any.
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResponse::Hydrated(data) => Some(data),
            ApiResponse::Raw { data, .. } => data,
        }
    }

    /// Returns the raw transport response in raw-response mode.
    pub fn raw(&self) -> Option<&RawResponse> {
        match self {
            ApiResponse::Raw { response, .. } => Some(response),
            ApiResponse::Hydrated(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, ApiResponse::Raw { .. })
    }
}

/// Outcome of an operation that may complete synchronously or start a task.
///
/// Clumio answers some writes with `200` and the finished resource, and others with `202`
/// and a task to poll. The variant is chosen from the status code alone: `202` is
/// [`OperationResult::Async`], any other success status is [`OperationResult::Sync`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationResult<S, A> {
    /// The operation completed; the body is the resulting resource.
    Sync(S),
    /// The operation was accepted; the body describes the task.
    Async(A),
}

impl<S: Model, A: Model> OperationResult<S, A> {
    /// Hydrates a success response into the variant selected by its status.
    pub fn from_raw(raw: &RawResponse) -> Result<Self, HydrationError> {
        if raw.status == StatusCode::ACCEPTED {
            Ok(OperationResult::Async(raw.hydrate()?))
        } else {
            Ok(OperationResult::Sync(raw.hydrate()?))
        }
    }
}

impl<S, A> OperationResult<S, A> {
    pub fn is_async(&self) -> bool {
        matches!(self, OperationResult::Async(_))
    }

    /// Returns the completed resource for a synchronous outcome.
    pub fn sync(&self) -> Option<&S> {
        match self {
            OperationResult::Sync(value) => Some(value),
            OperationResult::Async(_) => None,
        }
    }

    /// Returns the task description for an asynchronous outcome.
    pub fn task(&self) -> Option<&A> {
        match self {
            OperationResult::Async(value) => Some(value),
            OperationResult::Sync(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AsyncTaskResponse, OrganizationalUnit};

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        let response = raw(204, "");
        assert_eq!(response.json().unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_status_branching() {
        let body = r#"{"id":"ou-1","task_id":"t-9"}"#;

        let ok = OperationResult::<OrganizationalUnit, AsyncTaskResponse>::from_raw(&raw(200, body))
            .unwrap();
        assert_eq!(ok.sync().unwrap().id.as_deref(), Some("ou-1"));

        let created =
            OperationResult::<OrganizationalUnit, AsyncTaskResponse>::from_raw(&raw(201, body))
                .unwrap();
        assert!(!created.is_async());

        let accepted =
            OperationResult::<OrganizationalUnit, AsyncTaskResponse>::from_raw(&raw(202, body))
                .unwrap();
        assert!(accepted.is_async());
        assert_eq!(accepted.task().unwrap().task_id.as_deref(), Some("t-9"));
    }

    #[test]
    fn test_malformed_body() {
        let err = raw(200, "not json").hydrate::<OrganizationalUnit>().unwrap_err();
        assert!(matches!(err, HydrationError::MalformedBody(_)));
    }

    #[test]
    fn test_api_error_accessors() {
        let err = ApiError::Operation {
            operation: "read_task",
            status: StatusCode::NOT_FOUND,
            message: "Task not found".to_string(),
            body: None,
        };
        assert_eq!(err.operation(), "read_task");
        assert!(err.is_not_found());
        assert!(!err.is_auth_error());
        assert_eq!(err.to_string(), "read_task failed (404 Not Found): Task not found");

        let invalid = ApiError::InvalidRequest {
            operation: "read_task",
            reason: "missing path parameter `task_id`".to_string(),
        };
        assert_eq!(invalid.status(), None);
    }

    #[test]
    fn test_api_response_accessors() {
        let response: ApiResponse<u8> = ApiResponse::Raw {
            response: raw(500, "boom"),
            data: None,
        };
        assert!(response.is_raw());
        assert_eq!(response.raw().unwrap().body, "boom");
        assert!(response.into_data().is_none());
    }
}
