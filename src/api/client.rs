//
//  clumio-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Clumio API
//!
//! This module provides [`ClumioClient`], the transport shared by every resource controller.
//! It owns the base path, the default headers, the bearer token, the organizational-unit
//! context and the raw-response flag. All of these are fixed when the client is built.
//!
//! ## Features
//!
//! - `{param}` path templating and query encoding (see [`Request`])
//! - SDK identification through `user-agent` and `x-clumio-sdk-version`
//! - Versioned `accept` media types per resource family
//! - Error mapping of non-2xx responses to [`ApiError::Operation`]
//! - Raw-response mode returning the untouched response plus a best-effort model
//! - Status branching for operations that answer `200` or `202`

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::common::{ApiError, ApiResponse, OperationResult, RawResponse};
use super::request::Request;
use crate::auth::ApiToken;
use crate::config::Config;
use crate::model::{HydrationError, Model};

/// Header carrying the SDK name and version.
pub const SDK_VERSION_HEADER: &str = "x-clumio-sdk-version";

/// Header scoping a request to an organizational unit.
pub const OU_CONTEXT_HEADER: &str = "x-clumio-organizationalunit-context";

/// Parses a Clumio API error response into an [`ApiError::Operation`].
///
/// Clumio returns errors in the format:
/// ```json
/// {"errors": [{"error_code": 14001, "error_message": "Human readable message"}]}
/// ```
///
/// Gateways and older endpoints may instead answer with `{"message": "..."}`,
/// `{"error": {"message": "..."}}` or `{"error": "..."}`. If none of these match, the trimmed
/// body is used, and an empty body falls back to the status reason.
///
/// # Parameters
///
/// * `operation` - Name of the controller operation that failed
/// * `status` - The HTTP status code
/// * `body` - The raw error response body
pub fn format_api_error(operation: &'static str, status: StatusCode, body: &str) -> ApiError {
    let parsed = serde_json::from_str::<Value>(body).ok();

    let message = parsed
        .as_ref()
        .and_then(extract_error_message)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        });

    ApiError::Operation {
        operation,
        status,
        message,
        body: parsed,
    }
}

fn extract_error_message(json: &Value) -> Option<String> {
    // Clumio format: {"errors": [{"error_message": "..."}, ...]}
    if let Some(errors) = json.get("errors").and_then(|e| e.as_array()) {
        let messages: Vec<&str> = errors
            .iter()
            .filter_map(|e| e.get("error_message").or_else(|| e.get("message")))
            .filter_map(|m| m.as_str())
            .collect();
        if !messages.is_empty() {
            return Some(messages.join("; "));
        }
    }

    if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }

    match json.get("error") {
        Some(Value::String(message)) => Some(message.clone()),
        Some(error) => error
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string),
        None => None,
    }
}

/// The HTTP client for the Clumio REST API.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use clumio_sdk::api::ClumioClient;
/// use clumio_sdk::auth::ApiToken;
///
/// let client = ClumioClient::new("https://us-west-2.api.clumio.com")?
///     .with_auth(ApiToken::new("your-api-token"))
///     .with_organizational_unit("00000000-0000-0000-0000-000000000000")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// Resource controllers are reached through accessors such as
/// [`ClumioClient::policy_definitions`] and [`ClumioClient::tasks`].
#[derive(Debug, Clone)]
pub struct ClumioClient {
    /// The underlying HTTP client
    http: Client,
    /// Base path every request template is appended to
    base_path: Url,
    /// Headers sent with every request
    headers: HeaderMap,
    /// Organizational unit context, if any
    organizational_unit: Option<String>,
    /// Whether operations return the untouched response
    raw_response: bool,
    /// Optional bearer token
    auth: Option<ApiToken>,
}

impl ClumioClient {
    /// Creates a client for the given base path with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_path` is not an absolute URL or the HTTP client cannot be
    /// created.
    pub fn new(base_path: &str) -> Result<Self> {
        let base_path =
            Url::parse(base_path).with_context(|| format!("Invalid base path: {}", base_path))?;
        Self::build(base_path, None)
    }

    /// Creates a client from the loaded configuration.
    ///
    /// Applies the configured base path, timeout, organizational unit, raw-response flag and
    /// custom headers. Authentication is not part of the configuration; add it with
    /// [`ClumioClient::with_auth`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_path = crate::config::normalize_base_path(&config.core.base_path)?;
        let timeout = config.core.timeout_secs.map(Duration::from_secs);

        let mut client =
            Self::build(base_path, timeout)?.with_raw_response(config.core.raw_response);

        if let Some(ou) = &config.core.organizational_unit {
            client = client.with_organizational_unit(ou)?;
        }

        for (name, value) in &config.headers {
            client = client.with_header(name, value)?;
        }

        Ok(client)
    }

    fn build(base_path: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(format!("clumio-sdk-rust/{}", crate::VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            SDK_VERSION_HEADER,
            HeaderValue::from_str(&format!("clumio-rust-sdk:{}", crate::VERSION))?,
        );

        Ok(Self {
            http: builder.build()?,
            base_path,
            headers,
            organizational_unit: None,
            raw_response: false,
            auth: None,
        })
    }

    /// Sets the bearer token for this client.
    pub fn with_auth(mut self, auth: ApiToken) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Scopes every request to an organizational unit.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a valid header value.
    pub fn with_organizational_unit(mut self, id: &str) -> Result<Self> {
        HeaderValue::from_str(id)
            .with_context(|| format!("Invalid organizational unit id: {}", id))?;
        self.organizational_unit = Some(id.to_string());
        Ok(self)
    }

    /// Enables or disables raw-response mode.
    ///
    /// In raw-response mode no operation fails on a non-2xx status; see [`ApiResponse::Raw`].
    pub fn with_raw_response(mut self, raw: bool) -> Self {
        self.raw_response = raw;
        self
    }

    /// Adds a header sent with every request, replacing any earlier value.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let header = HeaderName::from_bytes(name.as_bytes())
            .with_context(|| format!("Invalid header name: {}", name))?;
        let value = HeaderValue::from_str(value)
            .with_context(|| format!("Invalid value for header {}", name))?;
        self.headers.insert(header, value);
        Ok(self)
    }

    pub fn base_path(&self) -> &Url {
        &self.base_path
    }

    pub fn organizational_unit(&self) -> Option<&str> {
        self.organizational_unit.as_deref()
    }

    pub fn is_raw_response(&self) -> bool {
        self.raw_response
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Sends one request and returns the response without interpreting its status.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidRequest`] if the URL or a header cannot be built
    /// - [`ApiError::Network`] if no response was received
    pub async fn send(&self, request: Request) -> Result<RawResponse, ApiError> {
        let url = request.url(&self.base_path)?;
        let operation = request.operation;

        debug!(operation, method = %request.method, %url, "sending request");

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .headers(self.headers.clone());

        if let Some(accept) = request.accept {
            builder = builder.header(ACCEPT, accept);
        }
        if let Some(ou) = &self.organizational_unit {
            builder = builder.header(OU_CONTEXT_HEADER, ou.as_str());
        }
        for (name, value) in &request.headers {
            let header = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| request.invalid(format!("invalid header name `{}`: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| {
                    request.invalid(format!("invalid value for header `{}`: {}", name, e))
                })?;
            builder = builder.header(header, value);
        }
        if let Some(auth) = &self.auth {
            builder = auth.apply_to_request(builder);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;

        debug!(operation, status = status.as_u16(), bytes = body.len(), "received response");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Sends a request and hydrates a successful body into `T`.
    pub async fn call<T: Model>(&self, request: Request) -> Result<ApiResponse<T>, ApiError> {
        self.dispatch(request, |raw| raw.hydrate::<T>()).await
    }

    /// Sends a request whose success body depends on the status: `202` hydrates `A`, any other
    /// success status hydrates `S`.
    pub async fn call_dual<S: Model, A: Model>(
        &self,
        request: Request,
    ) -> Result<ApiResponse<OperationResult<S, A>>, ApiError> {
        self.dispatch(request, OperationResult::from_raw).await
    }

    async fn dispatch<T, F>(&self, request: Request, hydrate: F) -> Result<ApiResponse<T>, ApiError>
    where
        F: Fn(&RawResponse) -> Result<T, HydrationError>,
    {
        let operation = request.operation;
        let raw = self.send(request).await?;

        if self.raw_response {
            let data = if raw.is_success() {
                match hydrate(&raw) {
                    Ok(data) => Some(data),
                    Err(err) => {
                        warn!(operation, error = %err, "could not hydrate raw response");
                        None
                    }
                }
            } else {
                None
            };
            return Ok(ApiResponse::Raw {
                response: raw,
                data,
            });
        }

        if !raw.is_success() {
            return Err(format_api_error(operation, raw.status, &raw.body));
        }

        hydrate(&raw)
            .map(ApiResponse::Hydrated)
            .map_err(|source| ApiError::Hydration { operation, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clumio_error_format() {
        let body = r#"{"errors":[{"error_code":14001,"error_message":"Policy not found."}]}"#;
        let err = format_api_error("read_policy_definition", StatusCode::NOT_FOUND, body);
        match err {
            ApiError::Operation {
                operation,
                status,
                message,
                body,
            } => {
                assert_eq!(operation, "read_policy_definition");
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "Policy not found.");
                assert!(body.is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_multiple_errors_are_joined() {
        let body = r#"{"errors":[{"error_message":"a"},{"error_message":"b"}]}"#;
        let err = format_api_error("create_user", StatusCode::BAD_REQUEST, body);
        assert_eq!(err.to_string(), "create_user failed (400 Bad Request): a; b");
    }

    #[test]
    fn test_fallback_formats() {
        let cases = [
            (r#"{"message":"Unauthorized"}"#, "Unauthorized"),
            (r#"{"error":{"message":"nested"}}"#, "nested"),
            (r#"{"error":"flat"}"#, "flat"),
            ("<html>bad gateway</html>", "<html>bad gateway</html>"),
            ("   ", "Bad Gateway"),
        ];
        for (body, expected) in cases {
            match format_api_error("list_tasks", StatusCode::BAD_GATEWAY, body) {
                ApiError::Operation { message, .. } => assert_eq!(message, expected),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_builders() {
        let client = ClumioClient::new("https://us-east-1.api.clumio.com")
            .unwrap()
            .with_raw_response(true)
            .with_organizational_unit("ou-1")
            .unwrap()
            .with_header("x-trace", "abc")
            .unwrap();

        assert!(client.is_raw_response());
        assert!(!client.is_authenticated());
        assert_eq!(client.organizational_unit(), Some("ou-1"));
        assert_eq!(client.base_path().host_str(), Some("us-east-1.api.clumio.com"));
        assert_eq!(client.headers["x-trace"], "abc");
        assert!(client.headers.contains_key(SDK_VERSION_HEADER));

        assert!(ClumioClient::new("not a url").is_err());
        assert!(client.with_header("bad header", "x").is_err());
    }
}
