//
//  clumio-sdk
//  cli/rule.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Policy rule commands.
//!
//! A rule assigns a policy to every asset matching its condition:
//!
//! ```bash
//! clumio rule create --name prod-ebs --policy 1b2c3d4e \
//!     --condition '{"entity_type":{"$eq":"aws_ebs_volume"}}'
//! clumio rule preview --condition '{"entity_type":{"$eq":"aws_ebs_volume"}}'
//! ```

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use super::{
    listing, print_list, print_one, print_page, read_input, take_data, GlobalOptions, ListOptions,
};
use crate::api::OperationResult;
use crate::models::{
    CreateRuleRequest, ListRulesResponse, PreviewAsset, PreviewRulesRequest, PreviewRulesResponse,
    Rule, RulePriority, RuleTaskResponse, UpdateRuleRequest,
};
use crate::output::{cell, write_json, TableOutput};
use crate::util::truncate;

listing!(
    ListRulesResponse => Rule,
    PreviewRulesResponse => PreviewAsset,
);

#[derive(Args, Debug)]
pub struct RuleCommand {
    #[command(subcommand)]
    pub command: RuleSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RuleSubcommand {
    /// List rules
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a rule
    View(IdArgs),

    /// Create a rule
    Create(CreateArgs),

    /// Replace a rule with the contents of a JSON file
    Update(UpdateArgs),

    /// Delete a rule
    #[command(visible_alias = "rm")]
    Delete(IdArgs),

    /// Show which assets a condition matches
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub list: ListOptions,

    /// Only rules assigning this policy
    #[arg(long)]
    pub policy: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Rule name
    #[arg(long, short = 'n', required_unless_present = "input")]
    pub name: Option<String>,

    /// Policy to assign
    #[arg(long, short = 'p', required_unless_present = "input")]
    pub policy: Option<String>,

    /// Asset condition as JSON
    #[arg(long, short = 'c', required_unless_present = "input")]
    pub condition: Option<String>,

    /// Evaluate this rule before the given rule
    #[arg(long)]
    pub before: Option<String>,

    /// JSON file with the full rule, or - for stdin
    #[arg(long, short = 'i', conflicts_with_all = ["name", "policy", "condition", "before"])]
    pub input: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: String,

    /// JSON file with the full rule, or - for stdin
    #[arg(long, short = 'i')]
    pub input: String,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Asset condition as JSON
    #[arg(long, short = 'c')]
    pub condition: String,

    /// Start a preview task instead of waiting for the matches
    #[arg(long = "async")]
    pub background: bool,
}

impl RuleCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RuleSubcommand::List(args) => list(args, global).await,
            RuleSubcommand::View(args) => view(args, global).await,
            RuleSubcommand::Create(args) => create(args, global).await,
            RuleSubcommand::Update(args) => update(args, global).await,
            RuleSubcommand::Delete(args) => delete(args, global).await,
            RuleSubcommand::Preview(args) => preview(args, global).await,
        }
    }
}

async fn list(args: &ListArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let params = args.list.params(|filter| match &args.policy {
        Some(policy) => filter.equals("policy_id", policy.as_str()),
        None => filter,
    })?;

    let response = client.policy_rules().list(&params).await?;
    print_list(global, response, "rules")
}

async fn view(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.policy_rules().read(&args.id).await?;
    print_one(global, response)?;
    Ok(())
}

fn create_body(args: &CreateArgs) -> Result<CreateRuleRequest> {
    if let Some(input) = &args.input {
        return read_input(input);
    }

    let (Some(name), Some(policy), Some(condition)) = (&args.name, &args.policy, &args.condition)
    else {
        bail!("--name, --policy and --condition are required without --input");
    };
    serde_json::from_str::<serde_json::Value>(condition)
        .map_err(|e| anyhow::anyhow!("--condition is not valid JSON: {}", e))?;

    let mut body = CreateRuleRequest::assign(name, policy, condition);
    if let Some(before) = &args.before {
        body.priority = Some(RulePriority {
            before_rule_id: Some(before.clone()),
        });
    }
    Ok(body)
}

async fn create(args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
    let body = create_body(args)?;
    let client = global.client()?;
    let response = client.policy_rules().create(&body).await?;
    print_one(global, response)?;
    Ok(())
}

async fn update(args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
    let body: UpdateRuleRequest = read_input(&args.input)?;
    let client = global.client()?;
    let response = client.policy_rules().update(&args.id, &body).await?;
    print_one(global, response)?;
    Ok(())
}

async fn delete(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.policy_rules().delete(&args.id).await?;

    if let Some(deleted) = take_data(response)? {
        if global.json {
            write_json(&deleted)?;
        } else {
            global.writer().write_success(&format!(
                "Deleting rule {} (task {})",
                args.id,
                cell(deleted.task_id.as_deref())
            ));
        }
    }
    Ok(())
}

async fn preview(args: &PreviewArgs, global: &GlobalOptions) -> Result<()> {
    let body = PreviewRulesRequest {
        condition: Some(args.condition.clone()),
        get_result: Some(!args.background),
    };
    let client = global.client()?;
    let response = client.policy_rules().preview(&body).await?;

    match take_data(response)? {
        Some(OperationResult::Sync(page)) => print_page(global, &page, "matching assets"),
        Some(OperationResult::Async(task)) => {
            if global.json {
                write_json(&task)?;
            } else {
                global.writer().write_success(&format!(
                    "Preview started as task {}",
                    cell(task.task_id.as_deref())
                ));
            }
            Ok(())
        }
        None => Ok(()),
    }
}

impl TableOutput for Rule {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "POLICY", "BEFORE", "CONDITION"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            cell(self.id.as_deref()),
            cell(self.name.as_deref()),
            cell(self.policy_id()),
            cell(
                self.priority
                    .as_ref()
                    .and_then(|p| p.before_rule_id.as_deref()),
            ),
            cell(self.condition.as_deref().map(|c| truncate(c, 60))),
        ]
    }
}

impl TableOutput for RuleTaskResponse {
    const HEADERS: &'static [&'static str] = &["ID", "NAME", "POLICY", "TASK"];

    fn row(&self, _color: bool) -> Vec<String> {
        let rule = self.rule.as_ref();
        vec![
            cell(rule.and_then(|r| r.id.as_deref())),
            cell(rule.and_then(|r| r.name.as_deref())),
            cell(rule.and_then(Rule::policy_id)),
            cell(self.task_id.as_deref()),
        ]
    }
}

impl TableOutput for PreviewAsset {
    const HEADERS: &'static [&'static str] =
        &["ID", "NAME", "TYPE", "ACCOUNT", "REGION", "CURRENT POLICY"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            cell(self.id.as_deref()),
            cell(self.name.as_deref()),
            cell(self.asset_type.as_deref()),
            cell(self.aws_account_id.as_deref()),
            cell(self.aws_region.as_deref()),
            cell(self.policy_id.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    fn create_args(condition: &str) -> CreateArgs {
        CreateArgs {
            name: Some("prod-ebs".to_string()),
            policy: Some("p1".to_string()),
            condition: Some(condition.to_string()),
            before: Some("r0".to_string()),
            input: None,
        }
    }

    #[test]
    fn test_create_body_from_flags() {
        let args = create_args(r#"{"entity_type":{"$eq":"aws_ebs_volume"}}"#);
        let body = create_body(&args).unwrap();
        let wire = body.to_wire();

        assert_eq!(wire["name"], "prod-ebs");
        assert_eq!(wire["action"]["assign_policy"]["policy_id"], "p1");
        assert_eq!(wire["priority"]["before_rule_id"], "r0");
        assert_eq!(wire["condition"], r#"{"entity_type":{"$eq":"aws_ebs_volume"}}"#);
    }

    #[test]
    fn test_create_body_rejects_invalid_condition() {
        assert!(create_body(&create_args("not json")).is_err());
    }

    #[test]
    fn test_rule_task_row() {
        let response = RuleTaskResponse::from_value(serde_json::json!({
            "rule": {"id": "r1", "name": "prod", "action": {"assign_policy": {"policy_id": "p1"}}},
            "task_id": "t9"
        }))
        .unwrap();
        assert_eq!(response.row(false), vec!["r1", "prod", "p1", "t9"]);
    }
}
