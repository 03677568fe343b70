//
//  clumio-sdk
//  cli/policy.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Protection policy commands.
//!
//! ```bash
//! clumio policy list --status activated
//! clumio policy create --input gold.json
//! clumio policy deactivate 1b2c3d4e
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use super::{listing, print_list, print_one, read_input, take_data, GlobalOptions, ListOptions};
use crate::models::{
    CreatePolicyDefinitionRequest, ListPoliciesResponse, PolicyDefinition, PolicyOperation,
    UpdatePolicyDefinitionRequest, UpdatePolicyResponse,
};
use crate::output::{cell, format_status, write_json, TableOutput};
use crate::util::format_timestamp;

listing!(ListPoliciesResponse => PolicyDefinition);

#[derive(Args, Debug)]
pub struct PolicyCommand {
    #[command(subcommand)]
    pub command: PolicySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PolicySubcommand {
    /// List policies
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a policy
    View(ViewArgs),

    /// Create a policy from a JSON file
    Create(CreateArgs),

    /// Replace a policy with the contents of a JSON file
    Update(UpdateArgs),

    /// Activate a policy
    Activate(IdArgs),

    /// Deactivate a policy
    Deactivate(IdArgs),

    /// Delete a policy
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub list: ListOptions,

    /// Only policies with this activation status (activated, deactivated)
    #[arg(long)]
    pub status: Option<String>,

    /// Only policies whose name contains this text
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    pub id: String,

    /// Embed a linked resource (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub embed: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// JSON file with the policy definition, or - for stdin
    #[arg(long, short = 'i')]
    pub input: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: String,

    /// JSON file with the full policy definition, or - for stdin
    #[arg(long, short = 'i')]
    pub input: String,

    /// Embed a linked resource in the response (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub embed: Vec<String>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: String,
}

impl PolicyCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PolicySubcommand::List(args) => list(args, global).await,
            PolicySubcommand::View(args) => view(args, global).await,
            PolicySubcommand::Create(args) => create(args, global).await,
            PolicySubcommand::Update(args) => update(args, global).await,
            PolicySubcommand::Activate(args) => set_status(&args.id, "activated", global).await,
            PolicySubcommand::Deactivate(args) => set_status(&args.id, "deactivated", global).await,
            PolicySubcommand::Delete(args) => delete(args, global).await,
        }
    }
}

async fn list(args: &ListArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let params = args.list.params(|mut filter| {
        if let Some(status) = &args.status {
            filter = filter.equals("activation_status", status.as_str());
        }
        if let Some(name) = &args.name {
            filter = filter.contains("name", name.as_str());
        }
        filter
    })?;

    let response = client.policy_definitions().list(&params).await?;
    print_list(global, response, "policies")
}

fn embed_names(embed: &[String]) -> Vec<&str> {
    embed.iter().map(String::as_str).collect()
}

async fn view(args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client
        .policy_definitions()
        .read(&args.id, &embed_names(&args.embed))
        .await?;
    print_one(global, response)?;
    Ok(())
}

async fn create(args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
    let body: CreatePolicyDefinitionRequest = read_input(&args.input)?;
    let client = global.client()?;
    let response = client.policy_definitions().create(&body).await?;

    if let Some(policy) = print_one(global, response)? {
        global
            .writer()
            .write_success(&format!("Created policy {}", cell(policy.id.as_deref())));
    }
    Ok(())
}

async fn update(args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
    let body: UpdatePolicyDefinitionRequest = read_input(&args.input)?;
    let client = global.client()?;
    let response = client
        .policy_definitions()
        .update(&args.id, &body, &embed_names(&args.embed))
        .await?;
    print_one(global, response)?;
    Ok(())
}

/// Reads the policy and writes it back with a new activation status.
async fn set_status(id: &str, status: &str, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let policies = client.policy_definitions();

    let policy = policies
        .read(id, &[])
        .await?
        .into_data()
        .with_context(|| format!("Could not read policy {}", id))?;

    let mut body = UpdatePolicyDefinitionRequest::from(&policy);
    body.activation_status = Some(status.to_string());

    let response = policies.update(id, &body, &[]).await?;
    if let Some(updated) = take_data(response)? {
        let writer = global.writer();
        writer.write(&updated)?;
        writer.write_success(&format!("Policy {} is {}", id, status));
    }
    Ok(())
}

async fn delete(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.policy_definitions().delete(&args.id).await?;

    if let Some(deleted) = take_data(response)? {
        if global.json {
            write_json(&deleted)?;
        } else {
            global.writer().write_success(&format!(
                "Deleting policy {} (task {})",
                args.id,
                cell(deleted.task_id.as_deref())
            ));
        }
    }
    Ok(())
}

fn operation_types(operations: Option<&[PolicyOperation]>) -> String {
    let types: Vec<&str> = operations
        .unwrap_or(&[])
        .iter()
        .filter_map(|op| op.operation_type.as_deref())
        .collect();
    if types.is_empty() {
        "-".to_string()
    } else {
        types.join(", ")
    }
}

impl TableOutput for PolicyDefinition {
    const HEADERS: &'static [&'static str] =
        &["ID", "NAME", "STATUS", "OPERATIONS", "TIMEZONE", "UPDATED"];

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            cell(self.id.as_deref()),
            cell(self.name.as_deref()),
            format_status(self.activation_status.as_deref().unwrap_or("-"), color),
            operation_types(self.operations.as_deref()),
            cell(self.timezone.as_deref()),
            cell(self.updated_timestamp.as_deref().map(format_timestamp)),
        ]
    }
}

impl TableOutput for UpdatePolicyResponse {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "STATUS", "OPERATIONS", "TASK"];

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            cell(self.id.as_deref()),
            cell(self.name.as_deref()),
            format_status(self.activation_status.as_deref().unwrap_or("-"), color),
            operation_types(self.operations.as_deref()),
            cell(self.task_id.as_deref()),
        ]
    }
}
