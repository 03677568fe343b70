//
//  clumio-sdk
//  cli/audit.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Audit trail command.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use clap::{Args, Subcommand};

use super::{listing, print_list, GlobalOptions, ListOptions};
use crate::api::Filter;
use crate::models::{AuditTrail, ListAuditTrailsResponse};
use crate::output::{cell, format_status, TableOutput};
use crate::util::format_timestamp;

listing!(ListAuditTrailsResponse => AuditTrail);

#[derive(Args, Debug)]
pub struct AuditCommand {
    #[command(subcommand)]
    pub command: AuditSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuditSubcommand {
    /// List audit entries, newest first
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub list: ListOptions,

    /// Only entries in this category, e.g. policy, user_management
    #[arg(long)]
    pub category: Option<String>,

    /// Only entries by this user id
    #[arg(long)]
    pub user: Option<String>,

    /// Only entries newer than this: an RFC 3339 timestamp or hours back (e.g. 24h)
    #[arg(long)]
    pub since: Option<String>,
}

impl AuditCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuditSubcommand::List(args) => list(args, global).await,
        }
    }
}

/// Parses `--since` into an RFC 3339 UTC timestamp.
fn since_timestamp(since: &str, now: DateTime<Utc>) -> Result<String> {
    let at = match since.strip_suffix('h') {
        Some(hours) => {
            let hours: i64 = hours
                .parse()
                .with_context(|| format!("Invalid --since value: {}", since))?;
            now - Duration::hours(hours)
        }
        None => DateTime::parse_from_rfc3339(since)
            .with_context(|| format!("Invalid --since value: {}", since))?
            .with_timezone(&Utc),
    };
    Ok(at.to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn conditions(args: &ListArgs, filter: Filter, since: Option<String>) -> Filter {
    let mut filter = filter;
    if let Some(category) = &args.category {
        filter = filter.equals("category", category.as_str());
    }
    if let Some(user) = &args.user {
        filter = filter.equals("user_id", user.as_str());
    }
    if let Some(since) = since {
        filter = filter.gt("timestamp", since);
    }
    filter
}

async fn list(args: &ListArgs, global: &GlobalOptions) -> Result<()> {
    let since = args
        .since
        .as_deref()
        .map(|s| since_timestamp(s, Utc::now()))
        .transpose()?;
    let params = args.list.params(|filter| conditions(args, filter, since))?;

    let client = global.client()?;
    let response = client.audit_trails().list(&params).await?;
    print_list(global, response, "audit entries")
}

impl TableOutput for AuditTrail {
    const HEADERS: &'static [&'static str] =
        &["TIME", "USER", "CATEGORY", "ACTION", "STATUS", "ENTITY"];

    fn row(&self, color: bool) -> Vec<String> {
        let user = self
            .user
            .as_ref()
            .and_then(|u| u.email.as_deref().or(u.full_name.as_deref()));
        let entity = self
            .primary_entity
            .as_ref()
            .and_then(|e| e.value.as_deref().or(e.id.as_deref()));

        vec![
            cell(self.timestamp.as_deref().map(format_timestamp)),
            cell(user),
            cell(self.category.as_deref()),
            cell(self.action.as_deref()),
            format_status(self.status.as_deref().unwrap_or("-"), color),
            cell(entity),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_since_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(since_timestamp("24h", now).unwrap(), "2024-03-09T12:00:00Z");
        assert_eq!(
            since_timestamp("2024-03-01T08:30:00+02:00", now).unwrap(),
            "2024-03-01T06:30:00Z"
        );
        assert!(since_timestamp("yesterday", now).is_err());
        assert!(since_timestamp("xh", now).is_err());
    }

    #[test]
    fn test_conditions() {
        let args = ListArgs {
            list: ListOptions::default(),
            category: Some("policy".to_string()),
            user: None,
            since: None,
        };
        let filter = conditions(&args, Filter::new(), Some("2024-03-09T12:00:00Z".to_string()));
        let value: serde_json::Value = serde_json::from_str(&filter.to_query_value()).unwrap();
        assert_eq!(value["category"]["$eq"], "policy");
        assert_eq!(value["timestamp"]["$gt"], "2024-03-09T12:00:00Z");
        assert!(value.get("user_id").is_none());
    }
}
