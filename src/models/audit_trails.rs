//
//  clumio-sdk
//  models/audit_trails.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Audit trail entries.

use serde_json::Value;

use super::common::{HateoasLink, PageLinks};

clumio_model! {
    pub struct AuditTrailLinks {
        pub self_link: Option<HateoasLink> => "_self",
    }
}

clumio_model! {
    pub struct AuditEntity {
        pub id: Option<String> => "id",
        pub entity_type: Option<String> => "type",
        pub value: Option<String> => "value",
    }
}

clumio_model! {
    /// The user who performed an audited action.
    pub struct AuditUser {
        pub id: Option<String> => "id",
        pub email: Option<String> => "email",
        pub full_name: Option<String> => "full_name",
    }
}

clumio_model! {
    pub struct AuditTrail {
        pub links: Option<AuditTrailLinks> => "_links",
        pub id: Option<String> => "id",
        pub action: Option<String> => "action",
        pub category: Option<String> => "category",
        /// `success`, `failure` or `partial_success`.
        pub status: Option<String> => "status",
        pub timestamp: Option<String> => "timestamp",
        pub ip_address: Option<String> => "ip_address",
        pub user: Option<AuditUser> => "user",
        pub primary_entity: Option<AuditEntity> => "primary_entity",
        pub parent_entity: Option<AuditEntity> => "parent_entity",
        pub entities: Option<Vec<AuditEntity>> => "entities",
        /// Action-specific details, passed through untouched.
        pub details: Option<Value> => "details",
    }
}

clumio_model! {
    pub struct AuditTrailListEmbedded {
        pub items: Option<Vec<AuditTrail>> => "items",
    }
}

clumio_model! {
    pub struct ListAuditTrailsResponse {
        pub embedded: Option<AuditTrailListEmbedded> => "_embedded",
        pub links: Option<PageLinks> => "_links",
        pub current_count: Option<i64> => "current_count",
        pub filter_applied: Option<String> => "filter_applied",
        pub limit: Option<i64> => "limit",
        pub start: Option<String> => "start",
        pub total_count: Option<i64> => "total_count",
        pub total_pages_count: Option<i64> => "total_pages_count",
    }
}
