//
//  clumio-sdk
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod audit;
mod auth;
mod completion;
mod config;
mod connection;
mod ou;
mod policy;
mod report;
mod rule;
mod schema;
mod task;
mod user;

pub use api::ApiCommand;
pub use audit::AuditCommand;
pub use auth::AuthCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use connection::ConnectionCommand;
pub use ou::OuCommand;
pub use policy::PolicyCommand;
pub use report::ReportCommand;
pub use rule::RuleCommand;
pub use schema::SchemaCommand;
pub use task::TaskCommand;
pub use user::UserCommand;

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::api::{ApiResponse, ClumioClient, Filter, ListParams};
use crate::auth::resolve_token;
use crate::config::Config;
use crate::model::Model;
use crate::models::PageLinks;
use crate::output::{write_body, write_json, OutputFormat, OutputWriter, TableOutput};

#[derive(Parser, Debug)]
#[command(
    name = "clumio",
    version,
    about = "Work with the Clumio API from the command line",
    long_about = "clumio manages Clumio policies, rules, organizational units, tasks and more.\n\n\
                  Authenticate once with 'clumio auth login', or set CLUMIO_API_TOKEN.",
    propagate_version = true,
    after_help = "Use 'clumio <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API base path or region name (e.g. us-east-1)
    #[arg(long, global = true, env = "CLUMIO_API_BASE_PATH")]
    pub base_path: Option<String>,

    /// Organizational unit to act in
    #[arg(long = "ou", global = true, env = "CLUMIO_ORGANIZATIONAL_UNIT_CONTEXT")]
    pub organizational_unit: Option<String>,

    /// Print responses untouched, including error responses
    #[arg(long, global = true)]
    pub raw: bool,

    /// Output JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make an authenticated request to any endpoint
    Api(ApiCommand),

    /// Manage protection policies
    #[command(visible_alias = "policies")]
    Policy(PolicyCommand),

    /// Manage policy assignment rules
    #[command(visible_alias = "rules")]
    Rule(RuleCommand),

    /// Manage organizational units
    #[command(name = "ou", visible_alias = "organizational-unit")]
    Ou(OuCommand),

    /// Inspect and abort tasks
    #[command(visible_alias = "tasks")]
    Task(TaskCommand),

    /// Generate and list report downloads
    Report(ReportCommand),

    /// Manage AWS connections
    #[command(visible_alias = "conn")]
    Connection(ConnectionCommand),

    /// Manage users
    #[command(visible_alias = "users")]
    User(UserCommand),

    /// Browse the audit trail
    Audit(AuditCommand),

    /// Show the field tables of the API models
    Schema(SchemaCommand),

    /// Manage API tokens
    Auth(AuthCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// Generate shell completions
    Completion(CompletionCommand),

    /// Show version information
    Version,
}

/// No token was found in the environment or the keyring.
#[derive(Error, Debug)]
#[error("Not authenticated with {base_path}. Run 'clumio auth login' or set CLUMIO_API_TOKEN.")]
pub struct NotAuthenticated {
    pub base_path: String,
}

impl GlobalOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(self.format())
    }

    /// Loads the configuration and applies the command-line overrides.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(base_path) = &self.base_path {
            config.core.base_path = base_path.clone();
        }
        if let Some(ou) = &self.organizational_unit {
            config.core.organizational_unit = Some(ou.clone());
        }
        if self.raw {
            config.core.raw_response = true;
        }
        Ok(config)
    }

    /// Builds an authenticated client.
    pub fn client(&self) -> Result<ClumioClient> {
        let config = self.config()?;
        let client = ClumioClient::from_config(&config)?;
        let base_path = client.base_path().as_str().to_string();

        match resolve_token(&base_path) {
            Some(token) => Ok(client.with_auth(token)),
            None => Err(NotAuthenticated { base_path }.into()),
        }
    }
}

/// Paging and filtering flags shared by `list` subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct ListOptions {
    /// Maximum number of items per page
    #[arg(long, short = 'L')]
    pub limit: Option<u32>,

    /// Page to start from, as shown after a truncated listing
    #[arg(long)]
    pub start: Option<String>,

    /// Filter as a JSON object, e.g. '{"name":{"$contains":"gold"}}'
    #[arg(long)]
    pub filter: Option<String>,

    /// Embed a linked resource in each item (repeatable)
    #[arg(long)]
    pub embed: Vec<String>,
}

impl ListOptions {
    /// Builds list parameters; `conditions` adds command-specific filter conditions to `--filter`.
    pub fn params(&self, conditions: impl FnOnce(Filter) -> Filter) -> Result<ListParams> {
        let filter = match &self.filter {
            Some(text) => Filter::from_json(text).context("Invalid --filter value")?,
            None => Filter::new(),
        };

        let mut params = ListParams::new().filter(conditions(filter));
        if let Some(limit) = self.limit {
            params = params.limit(limit);
        }
        if let Some(start) = &self.start {
            params = params.start(start.clone());
        }
        for name in &self.embed {
            params = params.embed(name.clone());
        }
        Ok(params)
    }
}

/// Reads a JSON request body from a file, or from stdin when `path` is `-`.
pub(crate) fn read_input<T: Model>(path: &str) -> Result<T> {
    let content = if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };

    let value: Value =
        serde_json::from_str(&content).with_context(|| format!("{} is not valid JSON", path))?;
    T::from_value(value).with_context(|| format!("{} is not a valid {}", path, T::NAME))
}

/// Returns the hydrated payload of a response.
///
/// A raw response is printed as-is and yields `None`; a raw error status becomes an error after
/// printing.
pub(crate) fn take_data<T>(response: ApiResponse<T>) -> Result<Option<T>> {
    match response {
        ApiResponse::Hydrated(data) => Ok(Some(data)),
        ApiResponse::Raw { response, .. } => {
            eprintln!("HTTP {}", response.status);
            write_body(&mut io::stdout().lock(), &response.body)?;
            if !response.is_success() {
                bail!("Request failed with status {}", response.status);
            }
            Ok(None)
        }
    }
}

/// Prints a single resource.
pub(crate) fn print_one<T: Serialize + TableOutput>(
    global: &GlobalOptions,
    response: ApiResponse<T>,
) -> Result<Option<T>> {
    let data = take_data(response)?;
    if let Some(value) = &data {
        global.writer().write(value)?;
    }
    Ok(data)
}

/// A page of a list endpoint.
pub(crate) trait Listing: Serialize {
    type Item: Serialize + TableOutput;

    fn items(&self) -> &[Self::Item];

    fn page_links(&self) -> Option<&PageLinks>;

    fn total(&self) -> Option<i64>;
}

macro_rules! listing {
    ($($list:ty => $item:ty),* $(,)?) => {
        $(
            impl $crate::cli::Listing for $list {
                type Item = $item;

                fn items(&self) -> &[$item] {
                    self.embedded
                        .as_ref()
                        .and_then(|embedded| embedded.items.as_deref())
                        .unwrap_or(&[])
                }

                fn page_links(&self) -> Option<&$crate::models::PageLinks> {
                    self.links.as_ref()
                }

                fn total(&self) -> Option<i64> {
                    self.total_count
                }
            }
        )*
    };
}
pub(crate) use listing;

/// Prints a page of results with a footer pointing at the next page.
pub(crate) fn print_list<L: Listing>(
    global: &GlobalOptions,
    response: ApiResponse<L>,
    noun: &str,
) -> Result<()> {
    match take_data(response)? {
        Some(page) => print_page(global, &page, noun),
        None => Ok(()),
    }
}

/// Prints an already hydrated page.
pub(crate) fn print_page<L: Listing>(global: &GlobalOptions, page: &L, noun: &str) -> Result<()> {
    let writer = global.writer();
    if writer.format() == OutputFormat::Json {
        return write_json(page);
    }

    let items = page.items();
    if items.is_empty() {
        println!("No {} found.", noun);
        return Ok(());
    }

    writer.write_list(items)?;

    match page.total() {
        Some(total) => writer.write_info(&format!("Showing {} of {} {}", items.len(), total, noun)),
        None => writer.write_info(&format!("Showing {} {}", items.len(), noun)),
    }
    if let Some(start) = next_start(page.page_links()) {
        writer.write_info(&format!("More results: --start {}", start));
    }
    Ok(())
}

/// Extracts the `start` query value of a page's `next` link.
pub(crate) fn next_start(links: Option<&PageLinks>) -> Option<String> {
    let href = &links?.next.as_ref()?.href;
    let base = Url::parse("https://api.clumio.invalid/").ok()?;
    let url = base.join(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "start")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HateoasLink;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_parse_after_subcommand() {
        let cli =
            Cli::try_parse_from(["clumio", "task", "list", "--json", "--ou", "ou-1"]).unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.organizational_unit.as_deref(), Some("ou-1"));
        assert_eq!(cli.global.format(), OutputFormat::Json);
    }

    #[test]
    fn test_list_options_merge_filters() {
        let options = ListOptions {
            limit: Some(10),
            filter: Some(r#"{"name":{"$contains":"gold"}}"#.to_string()),
            embed: vec!["read-policy-aws-ebs-volumes-compliance-stats".to_string()],
            ..Default::default()
        };

        let params = options
            .params(|filter| filter.equals("activation_status", "activated"))
            .unwrap();
        assert_eq!(params.limit, Some(10));
        assert_eq!(params.embed.len(), 1);

        let filter: Value =
            serde_json::from_str(&params.filter.unwrap().to_query_value()).unwrap();
        assert_eq!(filter["name"]["$contains"], "gold");
        assert_eq!(filter["activation_status"]["$eq"], "activated");
    }

    #[test]
    fn test_list_options_reject_bad_filter() {
        let options = ListOptions {
            filter: Some("[1, 2]".to_string()),
            ..Default::default()
        };
        assert!(options.params(|f| f).is_err());
    }

    #[test]
    fn test_list_options_without_filter_send_none() {
        let params = ListOptions::default().params(|f| f).unwrap();
        assert!(params.filter.is_none());
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn test_next_start() {
        let links = PageLinks {
            next: Some(HateoasLink {
                href: "/policies/definitions?limit=10&start=3".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(next_start(Some(&links)).as_deref(), Some("3"));
        assert_eq!(next_start(Some(&PageLinks::default())), None);
        assert_eq!(next_start(None), None);
    }
}
