//
//  clumio-sdk
//  controllers/report_downloads.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Report download operations.

use crate::api::{ApiError, ApiResponse, ClumioClient, ListParams, Request};
use crate::models::{
    CreateReportDownloadRequest, CreateReportDownloadResponse, ListReportDownloadsResponse,
};

pub const REPORT_DOWNLOADS_MEDIA_TYPE: &str = "application/api.clumio.report-downloads=v1+json";

/// Operations on `/reports/downloads`.
pub struct ReportDownloads<'a> {
    client: &'a ClumioClient,
}

impl<'a> ReportDownloads<'a> {
    pub(crate) fn new(client: &'a ClumioClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ListReportDownloadsResponse>, ApiError> {
        let request = Request::get("list_report_downloads", "/reports/downloads")
            .accept(REPORT_DOWNLOADS_MEDIA_TYPE)
            .list_params(params);
        self.client.call(request).await
    }

    /// Starts generating a report; poll the returned task, then list downloads for the link.
    pub async fn create(
        &self,
        body: &CreateReportDownloadRequest,
    ) -> Result<ApiResponse<CreateReportDownloadResponse>, ApiError> {
        let request = Request::post("create_report_download", "/reports/downloads")
            .accept(REPORT_DOWNLOADS_MEDIA_TYPE)
            .body(body);
        self.client.call(request).await
    }
}
