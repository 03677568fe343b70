//
//  clumio-sdk
//  cli/connection.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! AWS connection commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use super::{listing, print_list, print_one, take_data, GlobalOptions, ListOptions};
use crate::models::{
    AwsConnection, CreateAwsConnectionRequest, ListAwsConnectionsResponse,
    UpdateAwsConnectionRequest,
};
use crate::output::{cell, format_status, TableOutput};
use crate::util::format_timestamp;

listing!(ListAwsConnectionsResponse => AwsConnection);

#[derive(Args, Debug)]
pub struct ConnectionCommand {
    #[command(subcommand)]
    pub command: ConnectionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConnectionSubcommand {
    /// List AWS connections
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a connection
    View(IdArgs),

    /// Register an AWS account and region
    Create(CreateArgs),

    /// Change a connection's description or enabled services
    Edit(EditArgs),

    /// Delete a connection
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub list: ListOptions,

    /// Only connections for this AWS account
    #[arg(long)]
    pub account: Option<String>,

    /// Only connections in this AWS region
    #[arg(long)]
    pub aws_region: Option<String>,

    /// Only connections with this status (connected, connecting, disconnected)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// 12-digit AWS account id
    #[arg(long)]
    pub account: String,

    /// AWS region, e.g. us-west-2
    #[arg(long)]
    pub aws_region: String,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Asset type to protect (repeatable), e.g. EBS, RDS, S3
    #[arg(long = "asset-type")]
    pub asset_types: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Asset types to protect (repeatable); replaces the current set
    #[arg(long = "asset-type")]
    pub asset_types: Vec<String>,
}

impl ConnectionCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConnectionSubcommand::List(args) => list(args, global).await,
            ConnectionSubcommand::View(args) => view(args, global).await,
            ConnectionSubcommand::Create(args) => create(args, global).await,
            ConnectionSubcommand::Edit(args) => edit(args, global).await,
            ConnectionSubcommand::Delete(args) => delete(args, global).await,
        }
    }
}

async fn list(args: &ListArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let params = args.list.params(|mut filter| {
        if let Some(account) = &args.account {
            filter = filter.equals("account_native_id", account.as_str());
        }
        if let Some(region) = &args.aws_region {
            filter = filter.equals("aws_region", region.as_str());
        }
        if let Some(status) = &args.status {
            filter = filter.equals("connection_status", status.as_str());
        }
        filter
    })?;

    let response = client.aws_connections().list(&params).await?;
    print_list(global, response, "connections")
}

async fn view(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.aws_connections().read(&args.id).await?;
    print_one(global, response)?;
    Ok(())
}

async fn create(args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
    if args.account.len() != 12 || !args.account.chars().all(|c| c.is_ascii_digit()) {
        bail!("AWS account ids are 12 digits, got '{}'", args.account);
    }

    let body = CreateAwsConnectionRequest {
        account_native_id: Some(args.account.clone()),
        aws_region: Some(args.aws_region.clone()),
        description: args.description.clone(),
        protect_asset_types_enabled: (!args.asset_types.is_empty())
            .then(|| args.asset_types.clone()),
        ..Default::default()
    };
    let client = global.client()?;
    let response = client.aws_connections().create(&body).await?;

    if let Some(connection) = print_one(global, response)? {
        global.writer().write_info(&format!(
            "Deploy the CloudFormation stack {} to finish connecting.",
            cell(connection.stack_name.as_deref())
        ));
    }
    Ok(())
}

async fn edit(args: &EditArgs, global: &GlobalOptions) -> Result<()> {
    let body = UpdateAwsConnectionRequest {
        description: args.description.clone(),
        protect_asset_types_enabled: (!args.asset_types.is_empty())
            .then(|| args.asset_types.clone()),
        ..Default::default()
    };
    if body == UpdateAwsConnectionRequest::default() {
        bail!("Nothing to change. Pass --description or --asset-type.");
    }

    let client = global.client()?;
    let response = client.aws_connections().update(&args.id, &body).await?;
    print_one(global, response)?;
    Ok(())
}

async fn delete(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.aws_connections().delete(&args.id).await?;
    if take_data(response)?.is_some() {
        global
            .writer()
            .write_success(&format!("Deleted connection {}", args.id));
    }
    Ok(())
}

impl TableOutput for AwsConnection {
    const HEADERS: &'static [&'static str] =
        &["ID", "ACCOUNT", "REGION", "STATUS", "ASSET TYPES", "CREATED"];

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            cell(self.id.as_deref()),
            cell(self.account_native_id.as_deref()),
            cell(self.aws_region.as_deref()),
            format_status(self.connection_status.as_deref().unwrap_or("-"), color),
            cell(self.protect_asset_types_enabled.as_ref().map(|t| t.join(", "))),
            cell(self.created_timestamp.as_deref().map(format_timestamp)),
        ]
    }
}
