//
//  clumio-sdk
//  models/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Clumio users and their role assignments.

use super::common::{HateoasLink, PageLinks};
use crate::model::RequestBody;

clumio_model! {
    pub struct UserLinks {
        pub self_link: Option<HateoasLink> => "_self",
        pub delete_user: Option<HateoasLink> => "delete-user",
        pub partial_update_user: Option<HateoasLink> => "partial-update-user",
    }
}

clumio_model! {
    /// A role granted on a set of organizational units.
    pub struct RoleForOrganizationalUnits {
        pub role_id: Option<String> => "role_id",
        pub organizational_unit_ids: Option<Vec<String>> => "organizational_unit_ids",
    }
}

clumio_model! {
    pub struct User {
        pub links: Option<UserLinks> => "_links",
        pub id: Option<String> => "id",
        pub email: Option<String> => "email",
        pub full_name: Option<String> => "full_name",
        pub inviter: Option<String> => "inviter",
        pub is_confirmed: Option<bool> => "is_confirmed",
        pub is_enabled: Option<bool> => "is_enabled",
        pub last_activity_timestamp: Option<String> => "last_activity_timestamp",
        pub organizational_unit_count: Option<i64> => "organizational_unit_count",
        pub access_control_configuration: Option<Vec<RoleForOrganizationalUnits>>
            => "access_control_configuration",
    }
}

clumio_model! {
    pub struct UserListEmbedded {
        pub items: Option<Vec<User>> => "items",
    }
}

clumio_model! {
    pub struct ListUsersResponse {
        pub embedded: Option<UserListEmbedded> => "_embedded",
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
    /// Invites a user by email.
    pub struct CreateUserRequest {
        pub email: Option<String> => "email",
        pub full_name: Option<String> => "full_name",
        pub access_control_configuration: Option<Vec<RoleForOrganizationalUnits>>
            => "access_control_configuration",
    }
}

impl RequestBody for CreateUserRequest {}

clumio_model! {
    pub struct PatchUserRequest {
        pub full_name: Option<String> => "full_name",
        pub is_enabled: Option<bool> => "is_enabled",
        pub access_control_configuration: Option<Vec<RoleForOrganizationalUnits>>
            => "access_control_configuration",
    }
}

impl RequestBody for PatchUserRequest {}
