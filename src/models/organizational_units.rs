//
//  clumio-sdk
//  models/organizational_units.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organizational units.
//!
//! Creating or changing an OU answers `200` with the unit when the change is immediate, or
//! `202` with an [`OrganizationalUnitTaskResponse`] when assets and users have to be moved
//! first.

use serde_json::Value;

use super::common::{HateoasLink, PageLinks};
use crate::model::RequestBody;

clumio_model! {
    pub struct OrganizationalUnitLinks {
        pub self_link: Option<HateoasLink> => "_self",
        pub delete_organizational_unit: Option<HateoasLink> => "delete-organizational-unit",
        pub patch_organizational_unit: Option<HateoasLink> => "patch-organizational-unit",
    }
}

clumio_model! {
    pub struct OrganizationalUnit {
        pub embedded: Option<Value> => "_embedded",
        pub links: Option<OrganizationalUnitLinks> => "_links",
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub parent_id: Option<String> => "parent_id",
        /// Ancestor path, e.g. `/root-id/parent-id`.
        pub path: Option<String> => "path",
        pub children_count: Option<i64> => "children_count",
        pub user_count: Option<i64> => "user_count",
        pub descendant_ids: Option<Vec<String>> => "descendant_ids",
        pub configured_datasource_types: Option<Vec<String>> => "configured_datasource_types",
    }
}

clumio_model! {
    pub struct OrganizationalUnitListEmbedded {
        pub items: Option<Vec<OrganizationalUnit>> => "items",
    }
}

clumio_model! {
    pub struct ListOrganizationalUnitsResponse {
        pub embedded: Option<OrganizationalUnitListEmbedded> => "_embedded",
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
    pub struct CreateOrganizationalUnitRequest {
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        /// Parent OU; the caller's current OU when unset.
        pub parent_id: Option<String> => "parent_id",
        pub users: Option<Vec<String>> => "users",
    }
}

impl RequestBody for CreateOrganizationalUnitRequest {}

clumio_model! {
    /// Partial update; only the fields that are set are changed.
    pub struct PatchOrganizationalUnitRequest {
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub add_users: Option<Vec<String>> => "add_users",
        pub remove_users: Option<Vec<String>> => "remove_users",
    }
}

impl RequestBody for PatchOrganizationalUnitRequest {}

clumio_model! {
    /// The unit being created or changed, and the task doing it.
    pub struct OrganizationalUnitTaskResponse {
        pub embedded: Option<Value> => "_embedded",
        pub links: Option<OrganizationalUnitLinks> => "_links",
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub parent_id: Option<String> => "parent_id",
        pub path: Option<String> => "path",
        pub task_id: Option<String> => "task_id",
    }
}
