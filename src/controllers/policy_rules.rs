//
//  clumio-sdk
//  controllers/policy_rules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Policy rule operations.
//!
//! Rule writes always start a task that re-evaluates policy assignments, so create, update and
//! delete return a [`RuleTaskResponse`]. Previews answer either inline (`200`) or with a task
//! (`202`).

use crate::api::{ApiError, ApiResponse, ClumioClient, ListParams, OperationResult, Request};
use crate::models::{
    AsyncTaskResponse, CreateRuleRequest, ListRulesResponse, PreviewRulesRequest,
    PreviewRulesResponse, Rule, RuleTaskResponse, UpdateRuleRequest,
};

pub const POLICY_RULES_MEDIA_TYPE: &str = "application/api.clumio.policy-rules=v1+json";

/// Operations on `/policies/rules`.
pub struct PolicyRules<'a> {
    client: &'a ClumioClient,
}

impl<'a> PolicyRules<'a> {
    pub(crate) fn new(client: &'a ClumioClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ListRulesResponse>, ApiError> {
        let request = Request::get("list_policy_rules", "/policies/rules")
            .accept(POLICY_RULES_MEDIA_TYPE)
            .list_params(params);
        self.client.call(request).await
    }

    pub async fn create(
        &self,
        body: &CreateRuleRequest,
    ) -> Result<ApiResponse<RuleTaskResponse>, ApiError> {
        let request = Request::post("create_policy_rule", "/policies/rules")
            .accept(POLICY_RULES_MEDIA_TYPE)
            .body(body);
        self.client.call(request).await
    }

    pub async fn read(&self, rule_id: &str) -> Result<ApiResponse<Rule>, ApiError> {
        let request = Request::get("read_policy_rule", "/policies/rules/{rule_id}")
            .accept(POLICY_RULES_MEDIA_TYPE)
            .path_param("rule_id", rule_id);
        self.client.call(request).await
    }

    /// Replaces a rule. Fields left unset in `body` are cleared.
    pub async fn update(
        &self,
        rule_id: &str,
        body: &UpdateRuleRequest,
    ) -> Result<ApiResponse<RuleTaskResponse>, ApiError> {
        let request = Request::put("update_policy_rule", "/policies/rules/{rule_id}")
            .accept(POLICY_RULES_MEDIA_TYPE)
            .path_param("rule_id", rule_id)
            .body(body);
        self.client.call(request).await
    }

    pub async fn delete(&self, rule_id: &str) -> Result<ApiResponse<RuleTaskResponse>, ApiError> {
        let request = Request::delete("delete_policy_rule", "/policies/rules/{rule_id}")
            .accept(POLICY_RULES_MEDIA_TYPE)
            .path_param("rule_id", rule_id);
        self.client.call(request).await
    }

    /// Previews which assets a rule condition would match.
    ///
    /// # Returns
    ///
    /// [`OperationResult::Sync`] with the matched assets when the API answers `200`,
    /// [`OperationResult::Async`] with a preview task when it answers `202`.
    pub async fn preview(
        &self,
        body: &PreviewRulesRequest,
    ) -> Result<ApiResponse<OperationResult<PreviewRulesResponse, AsyncTaskResponse>>, ApiError> {
        let request = Request::post("preview_policy_rules", "/policies/rules/preview")
            .accept(POLICY_RULES_MEDIA_TYPE)
            .body(body);
        self.client.call_dual(request).await
    }
}
