//
//  clumio-sdk
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Descriptions
//!
//! A [`Request`] is everything a controller knows about one REST call before it is sent: the
//! operation name used in errors, the method, the `{param}` path template, the versioned
//! `accept` media type, path and query parameters, extra headers and the JSON body.
//!
//! ## Path Templates
//!
//! Templates are split on `/` and every `{name}` placeholder is substituted by the path
//! parameter with exactly that name. Substituted values are percent-encoded as single path
//! segments, so a value containing `/` cannot change the route. Segments that render to `.` or
//! `..` are rejected, since URL normalization would resolve them against the template.
//!
//! ```rust
//! use clumio_sdk::api::request::render_segments;
//!
//! let segments = render_segments(
//!     "/policies/definitions/{policy_id}",
//!     &[("policy_id", "p-1".to_string())],
//! )
//! .unwrap();
//! assert_eq!(segments, vec!["policies", "definitions", "p-1"]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Method;
use serde_json::Value;
use url::Url;

use super::common::{ApiError, ListParams};
use crate::model::RequestBody;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}/]+)\}").unwrap());

/// Substitutes `{name}` placeholders in a path template.
///
/// # Returns
///
/// The rendered, non-empty path segments, or a description of the first placeholder that has
/// no (or an empty) parameter, or whose value renders a dot segment.
pub fn render_segments(
    template: &str,
    params: &[(&'static str, String)],
) -> Result<Vec<String>, String> {
    template
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut rendered = String::with_capacity(segment.len());
            let mut last = 0;

            for caps in PLACEHOLDER.captures_iter(segment) {
                let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let value = params
                    .iter()
                    .find(|(key, _)| *key == name.as_str())
                    .map(|(_, value)| value)
                    .ok_or_else(|| format!("missing path parameter `{}`", name.as_str()))?;
                if value.is_empty() {
                    return Err(format!("path parameter `{}` is empty", name.as_str()));
                }

                rendered.push_str(&segment[last..whole.start()]);
                rendered.push_str(value);
                last = whole.end();
            }

            rendered.push_str(&segment[last..]);
            if rendered == "." || rendered == ".." {
                return Err(format!("path segment `{}` is not allowed", rendered));
            }
            Ok(rendered)
        })
        .collect()
}

/// One REST call, ready to be sent by [`ClumioClient::send`](super::ClumioClient::send).
#[derive(Debug, Clone)]
pub struct Request {
    /// Operation name reported in errors (e.g. `read_policy_definition`).
    pub operation: &'static str,
    pub method: Method,
    /// Path template relative to the base path.
    pub template: String,
    /// Versioned media type for the `accept` header.
    pub accept: Option<&'static str>,
    pub path_params: Vec<(&'static str, String)>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(operation: &'static str, method: Method, template: impl Into<String>) -> Self {
        Self {
            operation,
            method,
            template: template.into(),
            accept: None,
            path_params: Vec::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(operation: &'static str, template: impl Into<String>) -> Self {
        Self::new(operation, Method::GET, template)
    }

    pub fn post(operation: &'static str, template: impl Into<String>) -> Self {
        Self::new(operation, Method::POST, template)
    }

    pub fn put(operation: &'static str, template: impl Into<String>) -> Self {
        Self::new(operation, Method::PUT, template)
    }

    pub fn patch(operation: &'static str, template: impl Into<String>) -> Self {
        Self::new(operation, Method::PATCH, template)
    }

    pub fn delete(operation: &'static str, template: impl Into<String>) -> Self {
        Self::new(operation, Method::DELETE, template)
    }

    pub fn accept(mut self, media_type: &'static str) -> Self {
        self.accept = Some(media_type);
        self
    }

    /// Binds a value to the `{name}` placeholder.
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present.
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Adds a comma-joined `embed` parameter when `names` is non-empty.
    pub fn embed(self, names: &[&str]) -> Self {
        if names.is_empty() {
            return self;
        }
        self.query("embed", names.join(","))
    }

    /// Appends the `limit`, `start`, `filter` and `embed` parameters of a list call.
    pub fn list_params(mut self, params: &ListParams) -> Self {
        self.query.extend(params.to_query());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attaches a model body, serialized with the model's null policy.
    pub fn body<B: RequestBody>(mut self, body: &B) -> Self {
        self.body = Some(body.to_body());
        self
    }

    /// Attaches an arbitrary JSON body.
    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the full request URL under `base`.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidRequest`] when a placeholder is unbound or `base` cannot carry a path.
    pub fn url(&self, base: &Url) -> Result<Url, ApiError> {
        let segments = render_segments(&self.template, &self.path_params)
            .map_err(|reason| self.invalid(reason))?;

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| self.invalid(format!("`{}` cannot be used as a base path", base)))?
            .pop_if_empty()
            .extend(segments.iter());

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }

    pub(crate) fn invalid(&self, reason: impl Into<String>) -> ApiError {
        ApiError::InvalidRequest {
            operation: self.operation,
            reason: reason.into(),
        }
    }
}
