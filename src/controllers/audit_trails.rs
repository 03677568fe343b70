//
//  clumio-sdk
//  controllers/audit_trails.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::{ApiError, ApiResponse, ClumioClient, ListParams, Request};
use crate::models::ListAuditTrailsResponse;

pub const AUDIT_TRAILS_MEDIA_TYPE: &str = "application/api.clumio.audit-trails=v1+json";

/// Operations on `/audit-trails`.
pub struct AuditTrails<'a> {
    client: &'a ClumioClient,
}

impl<'a> AuditTrails<'a> {
    pub(crate) fn new(client: &'a ClumioClient) -> Self {
        Self { client }
    }

    /// Lists audit trail entries, newest first. Filter on `timestamp`, `category` or `user_id`.
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ListAuditTrailsResponse>, ApiError> {
        let request = Request::get("list_audit_trails", "/audit-trails")
            .accept(AUDIT_TRAILS_MEDIA_TYPE)
            .list_params(params);
        self.client.call(request).await
    }
}
