//
//  clumio-sdk
//  api/common/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query parameters shared by list endpoints.
//!
//! Clumio paginates list endpoints with `limit` and `start` and embeds related resources with
//! `embed`. These values are passed through as given; the SDK does not iterate pages.
//!
//! | Parameter | Wire form |
//! |-----------|-----------|
//! | `limit` | integer page size |
//! | `start` | opaque page token returned by the previous page |
//! | `filter` | JSON object, see [`Filter`] |
//! | `embed` | comma-separated list of embeddable link names |

use super::Filter;

/// Parameters for a single list request.
///
/// # Example
///
/// ```rust
/// use clumio_sdk::api::common::{Filter, ListParams};
///
/// let params = ListParams::new()
///     .limit(25)
///     .start("2")
///     .filter(Filter::new().equals("status", "completed"))
///     .embed("read-policy-definition");
///
/// let query = params.to_query();
/// assert_eq!(query[0], ("limit".to_string(), "25".to_string()));
/// assert_eq!(query[1], ("start".to_string(), "2".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    /// Maximum number of items per page.
    pub limit: Option<u32>,
    /// Page token to start from.
    pub start: Option<String>,
    /// Structured filter.
    pub filter: Option<Filter>,
    /// Link names whose targets should be embedded in `_embedded`.
    pub embed: Vec<String>,
    /// Endpoint-specific parameters, sent verbatim after the standard ones.
    pub extra: Vec<(String, String)>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the filter; an empty filter is not sent.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = if filter.is_empty() { None } else { Some(filter) };
        self
    }

    /// Adds an embeddable link name.
    pub fn embed(mut self, name: impl Into<String>) -> Self {
        self.embed.push(name.into());
        self
    }

    /// Adds an endpoint-specific parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Renders the parameters as query pairs, omitting unset values.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(start) = &self.start {
            query.push(("start".to_string(), start.clone()));
        }
        if let Some(filter) = &self.filter {
            query.push(("filter".to_string(), filter.to_query_value()));
        }
        if !self.embed.is_empty() {
            query.push(("embed".to_string(), self.embed.join(",")));
        }
        query.extend(self.extra.iter().cloned());
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ListParams::new().to_query().is_empty());
    }

    #[test]
    fn test_embed_is_comma_joined() {
        let query = ListParams::new()
            .embed("read-policy-definition")
            .embed("read-organizational-unit")
            .to_query();
        assert_eq!(
            query,
            vec![(
                "embed".to_string(),
                "read-policy-definition,read-organizational-unit".to_string()
            )]
        );
    }

    #[test]
    fn test_empty_filter_is_dropped() {
        let params = ListParams::new().filter(Filter::new()).param("lookback_days", "7");
        assert!(params.filter.is_none());
        assert_eq!(
            params.to_query(),
            vec![("lookback_days".to_string(), "7".to_string())]
        );
    }
}
