//
//  clumio-sdk
//  cli/ou.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organizational unit commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use super::{listing, print_list, print_one, take_data, GlobalOptions, ListOptions};
use crate::api::OperationResult;
use crate::controllers::OrganizationalUnitResult;
use crate::models::{
    CreateOrganizationalUnitRequest, ListOrganizationalUnitsResponse, OrganizationalUnit,
    OrganizationalUnitTaskResponse, PatchOrganizationalUnitRequest,
};
use crate::output::{cell, write_json, TableOutput};

listing!(ListOrganizationalUnitsResponse => OrganizationalUnit);

#[derive(Args, Debug)]
pub struct OuCommand {
    #[command(subcommand)]
    pub command: OuSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OuSubcommand {
    /// List organizational units
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show an organizational unit
    View(IdArgs),

    /// Create an organizational unit
    Create(CreateArgs),

    /// Rename an organizational unit or change its users
    Edit(EditArgs),

    /// Delete an organizational unit
    #[command(visible_alias = "rm")]
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub list: ListOptions,

    /// Only direct children of this unit
    #[arg(long)]
    pub parent: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Unit name
    #[arg(long, short = 'n')]
    pub name: String,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Parent unit; defaults to the unit of the request context
    #[arg(long)]
    pub parent: Option<String>,

    /// User to add to the unit (repeatable)
    #[arg(long = "user")]
    pub users: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub id: String,

    #[arg(long, short = 'n')]
    pub name: Option<String>,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// User to add (repeatable)
    #[arg(long = "add-user")]
    pub add_users: Vec<String>,

    /// User to remove (repeatable)
    #[arg(long = "remove-user")]
    pub remove_users: Vec<String>,
}

impl OuCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            OuSubcommand::List(args) => list(args, global).await,
            OuSubcommand::View(args) => view(args, global).await,
            OuSubcommand::Create(args) => create(args, global).await,
            OuSubcommand::Edit(args) => edit(args, global).await,
            OuSubcommand::Delete(args) => delete(args, global).await,
        }
    }
}

async fn list(args: &ListArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let params = args.list.params(|filter| match &args.parent {
        Some(parent) => filter.equals("parent_id", parent.as_str()),
        None => filter,
    })?;

    let response = client.organizational_units().list(&params).await?;
    print_list(global, response, "organizational units")
}

async fn view(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.organizational_units().read(&args.id).await?;
    print_one(global, response)?;
    Ok(())
}

async fn create(args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
    let body = CreateOrganizationalUnitRequest {
        name: Some(args.name.clone()),
        description: args.description.clone(),
        parent_id: args.parent.clone(),
        users: (!args.users.is_empty()).then(|| args.users.clone()),
    };
    let client = global.client()?;
    let response = client.organizational_units().create(&body).await?;
    print_result(global, take_data(response)?, "Created")
}

fn patch_body(args: &EditArgs) -> Result<PatchOrganizationalUnitRequest> {
    let body = PatchOrganizationalUnitRequest {
        name: args.name.clone(),
        description: args.description.clone(),
        add_users: (!args.add_users.is_empty()).then(|| args.add_users.clone()),
        remove_users: (!args.remove_users.is_empty()).then(|| args.remove_users.clone()),
    };
    if body == PatchOrganizationalUnitRequest::default() {
        bail!("Nothing to change. Pass --name, --description, --add-user or --remove-user.");
    }
    Ok(body)
}

async fn edit(args: &EditArgs, global: &GlobalOptions) -> Result<()> {
    let body = patch_body(args)?;
    let client = global.client()?;
    let response = client.organizational_units().patch(&args.id, &body).await?;
    print_result(global, take_data(response)?, "Updated")
}

fn print_result(
    global: &GlobalOptions,
    result: Option<OrganizationalUnitResult>,
    verb: &str,
) -> Result<()> {
    let Some(result) = result else {
        return Ok(());
    };
    if global.json {
        return write_json(&result);
    }

    let writer = global.writer();
    match &result {
        OperationResult::Sync(ou) => {
            writer.write(ou)?;
            writer.write_success(&format!(
                "{} organizational unit {}",
                verb,
                cell(ou.id.as_deref())
            ));
        }
        OperationResult::Async(pending) => {
            writer.write(pending)?;
            writer.write_success(&format!(
                "{} organizational unit {}; users are moved by task {}",
                verb,
                cell(pending.id.as_deref()),
                cell(pending.task_id.as_deref())
            ));
        }
    }
    Ok(())
}

async fn delete(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.organizational_units().delete(&args.id).await?;

    if let Some(task) = take_data(response)? {
        if global.json {
            write_json(&task)?;
        } else {
            global.writer().write_success(&format!(
                "Deleting organizational unit {} (task {})",
                args.id,
                cell(task.task_id.as_deref())
            ));
        }
    }
    Ok(())
}

impl TableOutput for OrganizationalUnit {
    const HEADERS: &'static [&'static str] =
        &["ID", "NAME", "PARENT", "PATH", "CHILDREN", "USERS"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            cell(self.id.as_deref()),
            cell(self.name.as_deref()),
            cell(self.parent_id.as_deref()),
            cell(self.path.as_deref()),
            cell(self.children_count),
            cell(self.user_count),
        ]
    }
}

impl TableOutput for OrganizationalUnitTaskResponse {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "PARENT", "PATH", "TASK"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            cell(self.id.as_deref()),
            cell(self.name.as_deref()),
            cell(self.parent_id.as_deref()),
            cell(self.path.as_deref()),
            cell(self.task_id.as_deref()),
        ]
    }
}
