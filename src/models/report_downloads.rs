//
//  clumio-sdk
//  models/report_downloads.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Generated CSV reports.

use super::common::{HateoasLink, PageLinks};
use crate::model::RequestBody;

clumio_model! {
    pub struct ReportDownloadLinks {
        pub self_link: Option<HateoasLink> => "_self",
    }
}

clumio_model! {
    /// A generated report file.
    pub struct ReportDownload {
        pub links: Option<ReportDownloadLinks> => "_links",
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        /// `activity`, `compliance` or `audit`.
        pub report_type: Option<String> => "type",
        pub file_name: Option<String> => "file_name",
        /// JSON-encoded filter the report was generated with.
        pub filters: Option<String> => "filters",
        /// Pre-signed URL; empty until the generating task completes.
        pub download_link: Option<String> => "download_link",
        pub task_id: Option<String> => "task_id",
        pub start_timestamp: Option<String> => "start_timestamp",
        pub end_timestamp: Option<String> => "end_timestamp",
        pub expiration_timestamp: Option<String> => "expiration_timestamp",
    }
}

clumio_model! {
    pub struct ReportDownloadListEmbedded {
        pub items: Option<Vec<ReportDownload>> => "items",
    }
}

clumio_model! {
    pub struct ListReportDownloadsResponse {
        pub embedded: Option<ReportDownloadListEmbedded> => "_embedded",
        pub links: Option<PageLinks> => "_links",
        pub current_count: Option<i64> => "current_count",
        pub filter_applied: Option<String> => "filter_applied",
        pub limit: Option<i64> => "limit",
        pub start: Option<String> => "start",
        pub total_count: Option<i64> => "total_count",
    }
}

clumio_model! {
    pub struct CreateReportDownloadRequest {
        pub report_type: Option<String> => "type",
        pub file_name: Option<String> => "file_name",
        pub filters: Option<String> => "filters",
    }
}

impl RequestBody for CreateReportDownloadRequest {}

clumio_model! {
    /// Clumio always returns the id of the task generating the report.
    pub struct CreateReportDownloadResponse {
        pub task_id: String => "task_id",
    }
}
