//
//  clumio-sdk
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use super::{listing, print_list, print_one, take_data, GlobalOptions, ListOptions};
use crate::models::{
    CreateUserRequest, ListUsersResponse, PatchUserRequest, RoleForOrganizationalUnits, User,
};
use crate::output::{cell, format_bool, TableOutput};
use crate::util::format_relative_time;

listing!(ListUsersResponse => User);

#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// List users
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a user
    View(IdArgs),

    /// Invite a user
    Invite(InviteArgs),

    /// Change a user's name, role or enabled state
    Edit(EditArgs),

    /// Delete a user
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub list: ListOptions,

    /// Only users whose name contains this text
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Args, Debug)]
pub struct InviteArgs {
    #[arg(long, short = 'e')]
    pub email: String,

    #[arg(long, short = 'n')]
    pub name: String,

    /// Role to grant
    #[arg(long, requires = "ou_ids")]
    pub role: Option<String>,

    /// Organizational unit the role applies to (repeatable)
    #[arg(long = "role-ou", requires = "role")]
    pub ou_ids: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long, short = 'n')]
    pub name: Option<String>,

    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    #[arg(long)]
    pub disable: bool,
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            UserSubcommand::List(args) => list(args, global).await,
            UserSubcommand::View(args) => view(args, global).await,
            UserSubcommand::Invite(args) => invite(args, global).await,
            UserSubcommand::Edit(args) => edit(args, global).await,
            UserSubcommand::Delete(args) => delete(args, global).await,
        }
    }
}

async fn list(args: &ListArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let params = args.list.params(|filter| match &args.name {
        Some(name) => filter.contains("name", name.as_str()),
        None => filter,
    })?;

    let response = client.users().list(&params).await?;
    print_list(global, response, "users")
}

async fn view(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.users().read(&args.id).await?;
    print_one(global, response)?;
    Ok(())
}

async fn invite(args: &InviteArgs, global: &GlobalOptions) -> Result<()> {
    let access = args.role.as_ref().map(|role| {
        vec![RoleForOrganizationalUnits {
            role_id: Some(role.clone()),
            organizational_unit_ids: Some(args.ou_ids.clone()),
        }]
    });
    let body = CreateUserRequest {
        email: Some(args.email.clone()),
        full_name: Some(args.name.clone()),
        access_control_configuration: access,
    };

    let client = global.client()?;
    let response = client.users().create(&body).await?;
    if print_one(global, response)?.is_some() {
        global
            .writer()
            .write_success(&format!("Invitation sent to {}", args.email));
    }
    Ok(())
}

async fn edit(args: &EditArgs, global: &GlobalOptions) -> Result<()> {
    let is_enabled = match (args.enable, args.disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let body = PatchUserRequest {
        full_name: args.name.clone(),
        is_enabled,
        access_control_configuration: None,
    };
    if body == PatchUserRequest::default() {
        bail!("Nothing to change. Pass --name, --enable or --disable.");
    }

    let client = global.client()?;
    let response = client.users().patch(&args.id, &body).await?;
    print_one(global, response)?;
    Ok(())
}

async fn delete(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.users().delete(&args.id).await?;
    if take_data(response)?.is_some() {
        global
            .writer()
            .write_success(&format!("Deleted user {}", args.id));
    }
    Ok(())
}

impl TableOutput for User {
    const HEADERS: &'static [&'static str] =
        &["ID", "EMAIL", "NAME", "CONFIRMED", "ENABLED", "LAST ACTIVE"];

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            cell(self.id.as_deref()),
            cell(self.email.as_deref()),
            cell(self.full_name.as_deref()),
            format_bool(self.is_confirmed.unwrap_or(false), color),
            format_bool(self.is_enabled.unwrap_or(false), color),
            cell(self.last_activity_timestamp.as_deref().map(format_relative_time)),
        ]
    }
}
