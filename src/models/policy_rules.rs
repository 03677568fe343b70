//
//  clumio-sdk
//  models/policy_rules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Policy assignment rules.
//!
//! A rule assigns a policy to every asset matching its `condition`, a JSON-encoded filter
//! such as
//! `{"entity_type":{"$eq":"aws_ebs_volume"},"aws_tag":{"$eq":{"key":"env","value":"prod"}}}`.
//! Rules are evaluated in priority order; `priority.before_rule_id` places a rule ahead of
//! another one.

use super::common::{HateoasLink, PageLinks, TaskLinks};
use crate::model::{NullPolicy, RequestBody};

clumio_model! {
    pub struct RuleLinks {
        pub self_link: Option<HateoasLink> => "_self",
        pub delete_policy_rule: Option<HateoasLink> => "delete-policy-rule",
        pub update_policy_rule: Option<HateoasLink> => "update-policy-rule",
        pub read_policy_definition: Option<HateoasLink> => "read-policy-definition",
        pub read_organizational_unit: Option<HateoasLink> => "read-organizational-unit",
    }
}

clumio_model! {
    /// The policy a rule assigns.
    pub struct AssignPolicyAction {
        pub policy_id: String => "policy_id",
    }
}

clumio_model! {
    pub struct RuleAction {
        pub assign_policy: Option<AssignPolicyAction> => "assign_policy",
    }
}

clumio_model! {
    pub struct RulePriority {
        /// Rule that this rule is evaluated before. Unset means lowest priority.
        pub before_rule_id: Option<String> => "before_rule_id",
    }
}

clumio_model! {
    pub struct Rule {
        pub links: Option<RuleLinks> => "_links",
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub action: Option<RuleAction> => "action",
        /// JSON-encoded asset filter.
        pub condition: Option<String> => "condition",
        pub organizational_unit_id: Option<String> => "organizational_unit_id",
        pub priority: Option<RulePriority> => "priority",
    }
}

impl Rule {
    /// Returns the id of the policy this rule assigns.
    pub fn policy_id(&self) -> Option<&str> {
        self.action
            .as_ref()
            .and_then(|action| action.assign_policy.as_ref())
            .map(|assign| assign.policy_id.as_str())
    }
}

clumio_model! {
    pub struct RuleListEmbedded {
        pub items: Option<Vec<Rule>> => "items",
    }
}

clumio_model! {
    pub struct ListRulesResponse {
        pub embedded: Option<RuleListEmbedded> => "_embedded",
        pub links: Option<PageLinks> => "_links",
        pub current_count: Option<i64> => "current_count",
        pub filter_applied: Option<String> => "filter_applied",
        pub limit: Option<i64> => "limit",
        pub start: Option<String> => "start",
        pub total_count: Option<i64> => "total_count",
        pub total_pages_count: Option<i64> => "total_pages_count",
    }
}

clumio_model! {
    pub struct CreateRuleRequest {
        pub name: Option<String> => "name",
        pub action: Option<RuleAction> => "action",
        pub condition: Option<String> => "condition",
        pub priority: Option<RulePriority> => "priority",
    }
}

impl RequestBody for CreateRuleRequest {}

impl CreateRuleRequest {
    /// A rule assigning `policy_id` to assets matching `condition`.
    pub fn assign(name: &str, policy_id: &str, condition: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            action: Some(RuleAction {
                assign_policy: Some(AssignPolicyAction {
                    policy_id: policy_id.to_string(),
                }),
            }),
            condition: Some(condition.to_string()),
            priority: None,
        }
    }
}

clumio_model! {
    /// Full replacement of a rule. Unset fields are sent as `null`.
    pub struct UpdateRuleRequest {
        pub name: Option<String> => "name",
        pub action: Option<RuleAction> => "action",
        pub condition: Option<String> => "condition",
        pub priority: Option<RulePriority> => "priority",
    }
}

impl RequestBody for UpdateRuleRequest {
    const NULL_POLICY: NullPolicy = NullPolicy::Explicit;
}

clumio_model! {
    /// Response of rule writes: the rule and the task re-evaluating assignments.
    pub struct RuleTaskResponse {
        pub links: Option<TaskLinks> => "_links",
        pub rule: Option<Rule> => "rule",
        pub task_id: Option<String> => "task_id",
    }
}

clumio_model! {
    /// Asks which assets a condition would match.
    pub struct PreviewRulesRequest {
        pub condition: Option<String> => "condition",
        /// Return the matches inline (200) instead of starting a preview task (202).
        pub get_result: Option<bool> => "get_result",
    }
}

impl RequestBody for PreviewRulesRequest {}

clumio_model! {
    /// An asset matched by a rule preview.
    pub struct PreviewAsset {
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub asset_type: Option<String> => "type",
        pub aws_account_id: Option<String> => "aws_account_id",
        pub aws_region: Option<String> => "aws_region",
        pub policy_id: Option<String> => "policy_id",
    }
}

clumio_model! {
    pub struct PreviewRulesEmbedded {
        pub items: Option<Vec<PreviewAsset>> => "items",
    }
}

clumio_model! {
    pub struct PreviewRulesResponse {
        pub embedded: Option<PreviewRulesEmbedded> => "_embedded",
        pub links: Option<PageLinks> => "_links",
        pub current_count: Option<i64> => "current_count",
        pub total_count: Option<i64> => "total_count",
    }
}
