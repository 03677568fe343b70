//
//  clumio-sdk
//  models/aws_connections.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Connections between Clumio and AWS account/region pairs.

use serde_json::Value;

use super::common::{HateoasLink, PageLinks};
use crate::model::RequestBody;

clumio_model! {
    pub struct AwsConnectionLinks {
        pub self_link: Option<HateoasLink> => "_self",
        pub delete_aws_connection: Option<HateoasLink> => "delete-aws-connection",
        pub update_aws_connection: Option<HateoasLink> => "update-aws-connection",
        pub read_organizational_unit: Option<HateoasLink> => "read-organizational-unit",
    }
}

clumio_model! {
    pub struct AwsConnection {
        pub embedded: Option<Value> => "_embedded",
        pub links: Option<AwsConnectionLinks> => "_links",
        pub id: Option<String> => "id",
        pub account_name: Option<String> => "account_name",
        pub account_native_id: Option<String> => "account_native_id",
        pub aws_region: Option<String> => "aws_region",
        pub description: Option<String> => "description",
        /// `connecting`, `connected` or `unlinked`.
        pub connection_status: Option<String> => "connection_status",
        pub organizational_unit_id: Option<String> => "organizational_unit_id",
        pub protect_asset_types_enabled: Option<Vec<String>> => "protect_asset_types_enabled",
        pub services_enabled: Option<Vec<String>> => "services_enabled",
        pub stack_name: Option<String> => "stack_name",
        pub created_timestamp: Option<String> => "created_timestamp",
    }
}

clumio_model! {
    pub struct AwsConnectionListEmbedded {
        pub items: Option<Vec<AwsConnection>> => "items",
    }
}

clumio_model! {
    pub struct ListAwsConnectionsResponse {
        pub embedded: Option<AwsConnectionListEmbedded> => "_embedded",
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
    pub struct CreateAwsConnectionRequest {
        pub account_native_id: Option<String> => "account_native_id",
        pub aws_region: Option<String> => "aws_region",
        pub description: Option<String> => "description",
        pub organizational_unit_id: Option<String> => "organizational_unit_id",
        pub protect_asset_types_enabled: Option<Vec<String>> => "protect_asset_types_enabled",
        pub services_enabled: Option<Vec<String>> => "services_enabled",
    }
}

impl RequestBody for CreateAwsConnectionRequest {}

clumio_model! {
    /// Partial update of a connection.
    pub struct UpdateAwsConnectionRequest {
        pub description: Option<String> => "description",
        pub protect_asset_types_enabled: Option<Vec<String>> => "protect_asset_types_enabled",
        pub services_enabled: Option<Vec<String>> => "services_enabled",
    }
}

impl RequestBody for UpdateAwsConnectionRequest {}
