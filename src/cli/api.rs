//
//  clumio-sdk
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends one request to any path under the configured base path, with the same
//! authentication, organizational-unit context and custom headers as every other command.
//! Useful for endpoints that have no dedicated command.
//!
//! ## Examples
//!
//! ```bash
//! # Read a policy
//! clumio api /policies/definitions/3f9c1e
//!
//! # Versioned media type
//! clumio api /connections/aws -H 'accept: application/api.clumio.aws-connections=v1+json'
//!
//! # Create an organizational unit with POST
//! clumio api -X POST /organizational-units -F name=finance -F users='["u-1"]'
//! ```

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use reqwest::Method;
use serde_json::{Map, Value};

use super::GlobalOptions;
use crate::api::Request;
use crate::output::write_body;

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API path relative to the base path (e.g., /tasks?limit=5)
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Request headers as 'Name: Value' (can be specified multiple times)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Request body fields as key=value; values are parsed as JSON when possible and keys
    /// nest with dots
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Request body fields whose values are always strings
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read the request body from a file (- for stdin)
    #[arg(long, short = 'f', conflicts_with_all = ["field", "raw_field"])]
    pub input: Option<String>,

    /// Include the status line and response headers in the output
    #[arg(long, short = 'i')]
    pub include: bool,

    /// Print nothing on success
    #[arg(long)]
    pub silent: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let request = self.build_request()?;
        let client = global.client()?;

        let response = client.send(request).await?;
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.include {
            println!("{} {}", style("HTTP").dim(), response.status);
            for (name, value) in response.headers.iter() {
                println!("{}: {}", name, value.to_str().unwrap_or(""));
            }
            println!();
        }

        if !response.is_success() {
            write_body(&mut out, &response.body)?;
            bail!("Request failed with status {}", response.status);
        }

        if !self.silent {
            write_body(&mut out, &response.body)?;
        }
        Ok(())
    }

    fn build_request(&self) -> Result<Request> {
        let method = parse_method(&self.method)?;
        let (path, query) = match self.endpoint.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (self.endpoint.as_str(), None),
        };

        let mut request = Request::new("api", method, path);
        if let Some(query) = query {
            for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
                request = request.query(key.into_owned(), value);
            }
        }

        for header in &self.header {
            let (name, value) = header
                .split_once(':')
                .with_context(|| {
                    format!("Invalid header format: {}. Expected 'Name: Value'", header)
                })?;
            request = request.header(name.trim(), value.trim());
        }

        if let Some(body) = self.build_body()? {
            request = request.json_body(body);
        }
        Ok(request)
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            } else {
                std::fs::read_to_string(input)
                    .with_context(|| format!("Failed to read {}", input))?
            };
            let value = serde_json::from_str(&content).context("Request body is not valid JSON")?;
            return Ok(Some(value));
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut body = Map::new();
        for field in &self.field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut body, key, parse_value(value));
        }
        for field in &self.raw_field {
            let (key, value) = split_field(field)?;
            set_nested_value(&mut body, key, Value::String(value.to_string()));
        }
        Ok(Some(Value::Object(body)))
    }
}

fn parse_method(method: &str) -> Result<Method> {
    match method.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        "HEAD" => Ok(Method::HEAD),
        _ => bail!("Unsupported HTTP method: {}", method),
    }
}

fn split_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

/// JSON literals (numbers, booleans, null, arrays, objects) keep their type; anything else is
/// a string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<Value>(raw)
        .ok()
        .filter(|v| !v.is_string())
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

fn set_nested_value(obj: &mut Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn command(endpoint: &str) -> ApiCommand {
        ApiCommand {
            endpoint: endpoint.to_string(),
            method: "get".to_string(),
            header: Vec::new(),
            field: Vec::new(),
            raw_field: Vec::new(),
            input: None,
            include: false,
            silent: false,
        }
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("42"), json!(42));
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("null"), Value::Null);
        assert_eq!(parse_value("[\"a\"]"), json!(["a"]));
        assert_eq!(parse_value("finance"), json!("finance"));
        assert_eq!(parse_value("\"quoted\""), json!("\"quoted\""));
    }

    #[test]
    fn test_nested_fields() {
        let mut cmd = command("/policies/rules");
        cmd.field = vec![
            "name=nightly".to_string(),
            "priority.before_rule_id=r-1".to_string(),
            "action.assign_policy.policy_id=p-1".to_string(),
        ];
        cmd.raw_field =
            vec![r#"condition={"entity_type":{"$eq":"aws_ebs_volume"}}"#.to_string()];

        let body = cmd.build_body().unwrap().unwrap();
        assert_eq!(body["name"], "nightly");
        assert_eq!(body["priority"]["before_rule_id"], "r-1");
        assert_eq!(body["action"]["assign_policy"]["policy_id"], "p-1");
        assert!(body["condition"].is_string());
    }

    #[test]
    fn test_build_request() {
        let mut cmd = command("/tasks?limit=5&filter=%7B%7D");
        cmd.header = vec!["accept: application/api.clumio.tasks=v1+json".to_string()];

        let request = cmd.build_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.template, "/tasks");
        assert_eq!(
            request.query,
            vec![
                ("limit".to_string(), "5".to_string()),
                ("filter".to_string(), "{}".to_string())
            ]
        );
        assert_eq!(
            request.headers,
            vec![("accept".to_string(), "application/api.clumio.tasks=v1+json".to_string())]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_method("TRACE").is_err());
        assert!(split_field("novalue").is_err());
        assert!(split_field("=x").is_err());

        let mut cmd = command("/tasks");
        cmd.header = vec!["no-colon".to_string()];
        assert!(cmd.build_request().is_err());
    }
}
