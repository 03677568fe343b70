//
//  clumio-sdk
//  controllers/organizational_units.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organizational unit operations.

use crate::api::{ApiError, ApiResponse, ClumioClient, ListParams, OperationResult, Request};
use crate::models::{
    AsyncTaskResponse, CreateOrganizationalUnitRequest, ListOrganizationalUnitsResponse,
    OrganizationalUnit, OrganizationalUnitTaskResponse, PatchOrganizationalUnitRequest,
};

pub const ORGANIZATIONAL_UNITS_MEDIA_TYPE: &str =
    "application/api.clumio.organizational-units=v1+json";

/// Result of OU writes that may complete immediately or continue as a task.
pub type OrganizationalUnitResult =
    OperationResult<OrganizationalUnit, OrganizationalUnitTaskResponse>;

/// Operations on `/organizational-units`.
pub struct OrganizationalUnits<'a> {
    client: &'a ClumioClient,
}

impl<'a> OrganizationalUnits<'a> {
    pub(crate) fn new(client: &'a ClumioClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ListOrganizationalUnitsResponse>, ApiError> {
        let request = Request::get("list_organizational_units", "/organizational-units")
            .accept(ORGANIZATIONAL_UNITS_MEDIA_TYPE)
            .list_params(params);
        self.client.call(request).await
    }

    /// Creates an organizational unit.
    ///
    /// # Returns
    ///
    /// The new unit (`200`), or the unit and the task moving users into it (`202`).
    pub async fn create(
        &self,
        body: &CreateOrganizationalUnitRequest,
    ) -> Result<ApiResponse<OrganizationalUnitResult>, ApiError> {
        let request = Request::post("create_organizational_unit", "/organizational-units")
            .accept(ORGANIZATIONAL_UNITS_MEDIA_TYPE)
            .body(body);
        self.client.call_dual(request).await
    }

    pub async fn read(&self, id: &str) -> Result<ApiResponse<OrganizationalUnit>, ApiError> {
        let request = Request::get("read_organizational_unit", "/organizational-units/{id}")
            .accept(ORGANIZATIONAL_UNITS_MEDIA_TYPE)
            .path_param("id", id);
        self.client.call(request).await
    }

    /// Changes only the fields set in `body`; `200` or `202` as for [`create`](Self::create).
    pub async fn patch(
        &self,
        id: &str,
        body: &PatchOrganizationalUnitRequest,
    ) -> Result<ApiResponse<OrganizationalUnitResult>, ApiError> {
        let request = Request::patch("patch_organizational_unit", "/organizational-units/{id}")
            .accept(ORGANIZATIONAL_UNITS_MEDIA_TYPE)
            .path_param("id", id)
            .body(body);
        self.client.call_dual(request).await
    }

    /// Deletes an organizational unit. Its assets move to the parent unit in a task.
    pub async fn delete(&self, id: &str) -> Result<ApiResponse<AsyncTaskResponse>, ApiError> {
        let request = Request::delete("delete_organizational_unit", "/organizational-units/{id}")
            .accept(ORGANIZATIONAL_UNITS_MEDIA_TYPE)
            .path_param("id", id);
        self.client.call(request).await
    }
}
