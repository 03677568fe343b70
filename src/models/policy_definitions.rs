//
//  clumio-sdk
//  models/policy_definitions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Protection policy definitions.
//!
//! A policy is a list of operations (one per protected data source type), each with a backup
//! window and one or more SLAs. An SLA pairs a retention duration with an RPO frequency:
//!
//! ```json
//! {
//!   "type": "aws_ebs_volume_backup",
//!   "action_setting": "immediate",
//!   "slas": [{
//!     "retention_duration": {"unit": "days", "value": 30},
//!     "rpo_frequency": {"unit": "days", "value": 1}
//!   }]
//! }
//! ```

use serde_json::Value;

use super::common::{HateoasLink, PageLinks, TaskLinks};
use crate::model::{NullPolicy, RequestBody};

clumio_model! {
    pub struct PolicyLinks {
        pub self_link: Option<HateoasLink> => "_self",
        pub delete_policy_definition: Option<HateoasLink> => "delete-policy-definition",
        pub update_policy_definition: Option<HateoasLink> => "update-policy-definition",
        pub read_organizational_unit: Option<HateoasLink> => "read-organizational-unit",
    }
}

clumio_model! {
    /// A retention duration. Both fields are always present.
    pub struct RetentionBackupSlaParam {
        /// `hours`, `days`, `weeks`, `months` or `years`.
        pub unit: String => "unit",
        pub value: i64 => "value",
    }
}

clumio_model! {
    /// How often a backup is taken.
    pub struct RpoBackupSlaParam {
        pub unit: String => "unit",
        pub value: i64 => "value",
        /// Day offsets for weekly and monthly schedules.
        pub offsets: Option<Vec<i64>> => "offsets",
    }
}

clumio_model! {
    pub struct BackupSla {
        pub retention_duration: Option<RetentionBackupSlaParam> => "retention_duration",
        pub rpo_frequency: Option<RpoBackupSlaParam> => "rpo_frequency",
    }
}

clumio_model! {
    /// Time-of-day window (`HH:MM`) in which backups may start.
    pub struct BackupWindow {
        pub start_time: Option<String> => "start_time",
        pub end_time: Option<String> => "end_time",
    }
}

clumio_model! {
    /// One protection operation of a policy.
    pub struct PolicyOperation {
        /// Operation type, e.g. `aws_ebs_volume_backup` or `mssql_database_backup`.
        pub operation_type: Option<String> => "type",
        /// `immediate` or `window`.
        pub action_setting: Option<String> => "action_setting",
        pub backup_window_tz: Option<BackupWindow> => "backup_window_tz",
        pub slas: Option<Vec<BackupSla>> => "slas",
        pub backup_aws_region: Option<String> => "backup_aws_region",
        /// Operation-specific settings, passed through untouched.
        pub advanced_settings: Option<Value> => "advanced_settings",
    }
}

clumio_model! {
    /// A protection policy.
    pub struct PolicyDefinition {
        pub embedded: Option<Value> => "_embedded",
        pub links: Option<PolicyLinks> => "_links",
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        /// `activated` or `deactivated`.
        pub activation_status: Option<String> => "activation_status",
        /// `unlocked` or `updating`.
        pub lock_status: Option<String> => "lock_status",
        pub operations: Option<Vec<PolicyOperation>> => "operations",
        pub organizational_unit_id: Option<String> => "organizational_unit_id",
        pub timezone: Option<String> => "timezone",
        pub created_timestamp: Option<String> => "created_timestamp",
        pub updated_timestamp: Option<String> => "updated_timestamp",
    }
}

clumio_model! {
    pub struct PolicyListEmbedded {
        pub items: Option<Vec<PolicyDefinition>> => "items",
    }
}

clumio_model! {
    pub struct ListPoliciesResponse {
        pub embedded: Option<PolicyListEmbedded> => "_embedded",
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
    pub struct CreatePolicyDefinitionRequest {
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub activation_status: Option<String> => "activation_status",
        pub operations: Option<Vec<PolicyOperation>> => "operations",
        pub organizational_unit_id: Option<String> => "organizational_unit_id",
        pub timezone: Option<String> => "timezone",
    }
}

impl RequestBody for CreatePolicyDefinitionRequest {}

clumio_model! {
    /// Full replacement of a policy. Unset fields are sent as `null` and cleared.
    pub struct UpdatePolicyDefinitionRequest {
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub activation_status: Option<String> => "activation_status",
        pub operations: Option<Vec<PolicyOperation>> => "operations",
        pub organizational_unit_id: Option<String> => "organizational_unit_id",
        pub timezone: Option<String> => "timezone",
    }
}

impl RequestBody for UpdatePolicyDefinitionRequest {
    const NULL_POLICY: NullPolicy = NullPolicy::Explicit;
}

impl From<&PolicyDefinition> for UpdatePolicyDefinitionRequest {
    fn from(policy: &PolicyDefinition) -> Self {
        Self {
            name: policy.name.clone(),
            description: policy.description.clone(),
            activation_status: policy.activation_status.clone(),
            operations: policy.operations.clone(),
            organizational_unit_id: policy.organizational_unit_id.clone(),
            timezone: policy.timezone.clone(),
        }
    }
}

clumio_model! {
    /// The updated policy and the task applying it to protected assets.
    pub struct UpdatePolicyResponse {
        pub embedded: Option<Value> => "_embedded",
        pub links: Option<PolicyLinks> => "_links",
        pub id: Option<String> => "id",
        pub name: Option<String> => "name",
        pub description: Option<String> => "description",
        pub activation_status: Option<String> => "activation_status",
        pub lock_status: Option<String> => "lock_status",
        pub operations: Option<Vec<PolicyOperation>> => "operations",
        pub organizational_unit_id: Option<String> => "organizational_unit_id",
        pub timezone: Option<String> => "timezone",
        pub task_id: Option<String> => "task_id",
    }
}

clumio_model! {
    pub struct DeletePolicyResponse {
        pub links: Option<TaskLinks> => "_links",
        pub task_id: Option<String> => "task_id",
    }
}
