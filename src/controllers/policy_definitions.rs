//
//  clumio-sdk
//  controllers/policy_definitions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Policy definition operations.

use crate::api::{ApiError, ApiResponse, ClumioClient, ListParams, Request};
use crate::models::{
    CreatePolicyDefinitionRequest, DeletePolicyResponse, ListPoliciesResponse, PolicyDefinition,
    UpdatePolicyDefinitionRequest, UpdatePolicyResponse,
};

pub const POLICY_DEFINITIONS_MEDIA_TYPE: &str = "application/api.clumio.policy-definitions=v1+json";

/// Operations on `/policies/definitions`.
pub struct PolicyDefinitions<'a> {
    client: &'a ClumioClient,
}

impl<'a> PolicyDefinitions<'a> {
    pub(crate) fn new(client: &'a ClumioClient) -> Self {
        Self { client }
    }

    /// Lists policies.
    ///
    /// # Parameters
    ///
    /// * `params` - `filter` (e.g. on `activation_status` or `name`) and `embed`
    ///   (`read-policy-aws-ebs-volumes-compliance-stats`, ...)
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ListPoliciesResponse>, ApiError> {
        let request = Request::get("list_policy_definitions", "/policies/definitions")
            .accept(POLICY_DEFINITIONS_MEDIA_TYPE)
            .list_params(params);
        self.client.call(request).await
    }

    pub async fn create(
        &self,
        body: &CreatePolicyDefinitionRequest,
    ) -> Result<ApiResponse<PolicyDefinition>, ApiError> {
        let request = Request::post("create_policy_definition", "/policies/definitions")
            .accept(POLICY_DEFINITIONS_MEDIA_TYPE)
            .body(body);
        self.client.call(request).await
    }

    /// Reads one policy, embedding the linked resources named in `embed`.
    pub async fn read(
        &self,
        policy_id: &str,
        embed: &[&str],
    ) -> Result<ApiResponse<PolicyDefinition>, ApiError> {
        let request = Request::get("read_policy_definition", "/policies/definitions/{policy_id}")
            .accept(POLICY_DEFINITIONS_MEDIA_TYPE)
            .path_param("policy_id", policy_id)
            .embed(embed);
        self.client.call(request).await
    }

    /// Replaces a policy. Fields left unset in `body` are cleared.
    pub async fn update(
        &self,
        policy_id: &str,
        body: &UpdatePolicyDefinitionRequest,
        embed: &[&str],
    ) -> Result<ApiResponse<UpdatePolicyResponse>, ApiError> {
        let request = Request::put("update_policy_definition", "/policies/definitions/{policy_id}")
            .accept(POLICY_DEFINITIONS_MEDIA_TYPE)
            .path_param("policy_id", policy_id)
            .embed(embed)
            .body(body);
        self.client.call(request).await
    }

    /// Deletes a policy. Assets it protected are unassigned by the returned task.
    pub async fn delete(
        &self,
        policy_id: &str,
    ) -> Result<ApiResponse<DeletePolicyResponse>, ApiError> {
        let request =
            Request::delete("delete_policy_definition", "/policies/definitions/{policy_id}")
                .accept(POLICY_DEFINITIONS_MEDIA_TYPE)
                .path_param("policy_id", policy_id);
        self.client.call(request).await
    }
}
