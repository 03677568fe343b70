//
//  clumio-sdk
//  api/common/filter.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Builder for the `filter` query parameter of list endpoints.
//!
//! Clumio list endpoints accept a JSON-encoded filter of the form
//! `{"field": {"$op": value}}`. Several operators on the same field are merged into one
//! object, e.g. `{"start_timestamp": {"$gte": "...", "$lt": "..."}}`.
//!
//! | Method | Operator |
//! |--------|----------|
//! | [`Filter::equals`] | `$eq` |
//! | [`Filter::is_in`] | `$in` |
//! | [`Filter::contains`] | `$contains` |
//! | [`Filter::begins_with`] | `$begins_with` |
//! | [`Filter::gt`] / [`Filter::gte`] | `$gt` / `$gte` |
//! | [`Filter::lt`] / [`Filter::lte`] | `$lt` / `$lte` |
//! | [`Filter::exists`] | `$exists` |
//!
//! ```rust
//! use clumio_sdk::api::common::Filter;
//!
//! let filter = Filter::new()
//!     .equals("status", "in_progress")
//!     .gte("start_timestamp", "2024-01-01T00:00:00Z");
//!
//! let sent: serde_json::Value = serde_json::from_str(&filter.to_query_value()).unwrap();
//! assert_eq!(sent["status"]["$eq"], "in_progress");
//! assert_eq!(sent["start_timestamp"]["$gte"], "2024-01-01T00:00:00Z");
//! ```

use std::fmt;

use serde::de::Error as _;
use serde_json::{Map, Value};

/// A structured list filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Map<String, Value>,
}

impl Filter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a filter from its JSON text, which must be an object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str(text)? {
            Value::Object(conditions) => Ok(Self { conditions }),
            _ => Err(serde_json::Error::custom("filter must be a JSON object")),
        }
    }

    /// Adds `operator: value` under `field`, merging with operators already set on it.
    pub fn condition(mut self, field: &str, operator: &str, value: impl Into<Value>) -> Self {
        let entry = self
            .conditions
            .entry(field.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        match entry {
            Value::Object(operators) => {
                operators.insert(operator.to_string(), value.into());
            }
            other => {
                let mut operators = Map::new();
                operators.insert(operator.to_string(), value.into());
                *other = Value::Object(operators);
            }
        }
        self
    }

    pub fn equals(self, field: &str, value: impl Into<Value>) -> Self {
        self.condition(field, "$eq", value)
    }

    /// Matches any of `values`.
    pub fn is_in<I, V>(self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.condition(field, "$in", Value::Array(values))
    }

    pub fn contains(self, field: &str, value: impl Into<Value>) -> Self {
        self.condition(field, "$contains", value)
    }

    pub fn begins_with(self, field: &str, value: impl Into<Value>) -> Self {
        self.condition(field, "$begins_with", value)
    }

    pub fn gt(self, field: &str, value: impl Into<Value>) -> Self {
        self.condition(field, "$gt", value)
    }

    pub fn gte(self, field: &str, value: impl Into<Value>) -> Self {
        self.condition(field, "$gte", value)
    }

    pub fn lt(self, field: &str, value: impl Into<Value>) -> Self {
        self.condition(field, "$lt", value)
    }

    pub fn lte(self, field: &str, value: impl Into<Value>) -> Self {
        self.condition(field, "$lte", value)
    }

    pub fn exists(self, field: &str, present: bool) -> Self {
        self.condition(field, "$exists", present)
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Returns the JSON text sent as the `filter` query value.
    pub fn to_query_value(&self) -> String {
        Value::Object(self.conditions.clone()).to_string()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_value())
    }
}
