//
//  clumio-sdk
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Models
//!
//! Typed request and response payloads for every resource family, each declared with
//! `clumio_model!` so that it carries its own field-mapping table.
//!
//! | Module | Resource |
//! |--------|----------|
//! | [`common`] | HATEOAS links, task envelopes |
//! | [`policy_definitions`] | Protection policies |
//! | [`policy_rules`] | Policy assignment rules |
//! | [`organizational_units`] | Organizational units |
//! | [`tasks`] | Long-running tasks |
//! | [`report_downloads`] | Generated reports |
//! | [`aws_connections`] | AWS account connections |
//! | [`users`] | Users and role assignments |
//! | [`audit_trails`] | Audit trail entries |
//!
//! Every optional field is `Option<T>`; hydrating `{}` yields a model with every optional field
//! set to `None`.

pub mod audit_trails;
pub mod aws_connections;
pub mod common;
pub mod organizational_units;
pub mod policy_definitions;
pub mod policy_rules;
pub mod report_downloads;
pub mod tasks;
pub mod users;

pub use audit_trails::*;
pub use aws_connections::*;
pub use common::*;
pub use organizational_units::*;
pub use policy_definitions::*;
pub use policy_rules::*;
pub use report_downloads::*;
pub use tasks::*;
pub use users::*;

use crate::model::{Model, Schema};

/// Returns the field tables of every model, sorted by model name.
pub fn schemas() -> Vec<Schema> {
    let mut schemas = vec![
        // common
        HateoasLink::schema(),
        PageLinks::schema(),
        TaskLinks::schema(),
        AsyncTaskResponse::schema(),
        EmptyResponse::schema(),
        // policy definitions
        PolicyLinks::schema(),
        RetentionBackupSlaParam::schema(),
        RpoBackupSlaParam::schema(),
        BackupSla::schema(),
        BackupWindow::schema(),
        PolicyOperation::schema(),
        PolicyDefinition::schema(),
        PolicyListEmbedded::schema(),
        ListPoliciesResponse::schema(),
        CreatePolicyDefinitionRequest::schema(),
        UpdatePolicyDefinitionRequest::schema(),
        UpdatePolicyResponse::schema(),
        DeletePolicyResponse::schema(),
        // policy rules
        RuleLinks::schema(),
        AssignPolicyAction::schema(),
        RuleAction::schema(),
        RulePriority::schema(),
        Rule::schema(),
        RuleListEmbedded::schema(),
        ListRulesResponse::schema(),
        CreateRuleRequest::schema(),
        UpdateRuleRequest::schema(),
        RuleTaskResponse::schema(),
        PreviewRulesRequest::schema(),
        PreviewAsset::schema(),
        PreviewRulesEmbedded::schema(),
        PreviewRulesResponse::schema(),
        // organizational units
        OrganizationalUnitLinks::schema(),
        OrganizationalUnit::schema(),
        OrganizationalUnitListEmbedded::schema(),
        ListOrganizationalUnitsResponse::schema(),
        CreateOrganizationalUnitRequest::schema(),
        PatchOrganizationalUnitRequest::schema(),
        OrganizationalUnitTaskResponse::schema(),
        // tasks
        TaskEntity::schema(),
        Task::schema(),
        TaskListEmbedded::schema(),
        ListTasksResponse::schema(),
        UpdateTaskRequest::schema(),
        // report downloads
        ReportDownloadLinks::schema(),
        ReportDownload::schema(),
        ReportDownloadListEmbedded::schema(),
        ListReportDownloadsResponse::schema(),
        CreateReportDownloadRequest::schema(),
        CreateReportDownloadResponse::schema(),
        // aws connections
        AwsConnectionLinks::schema(),
        AwsConnection::schema(),
        AwsConnectionListEmbedded::schema(),
        ListAwsConnectionsResponse::schema(),
        CreateAwsConnectionRequest::schema(),
        UpdateAwsConnectionRequest::schema(),
        // users
        UserLinks::schema(),
        RoleForOrganizationalUnits::schema(),
        User::schema(),
        UserListEmbedded::schema(),
        ListUsersResponse::schema(),
        CreateUserRequest::schema(),
        PatchUserRequest::schema(),
        // audit trails
        AuditTrailLinks::schema(),
        AuditEntity::schema(),
        AuditUser::schema(),
        AuditTrail::schema(),
        AuditTrailListEmbedded::schema(),
        ListAuditTrailsResponse::schema(),
    ];
    schemas.sort_by_key(|schema| schema.name);
    schemas
}

/// Looks up a model's field table by type name (case-insensitive).
pub fn find_schema(name: &str) -> Option<Schema> {
    schemas()
        .into_iter()
        .find(|schema| schema.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldKind, HydrationError, NullPolicy, RequestBody};
    use serde_json::{json, Map, Value};
    use std::collections::HashSet;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_report_download_scenario() {
        let map = object(json!({
            "id": "abc123",
            "name": "My Report",
            "_links": {"_self": {"href": "/x", "templated": false, "type": "GET"}}
        }));

        let report = ReportDownload::from_map(&map).unwrap();
        assert_eq!(report.id.as_deref(), Some("abc123"));
        assert_eq!(report.name.as_deref(), Some("My Report"));

        let self_link = report.links.unwrap().self_link.unwrap();
        assert_eq!(self_link.href, "/x");
        assert_eq!(self_link.templated, Some(false));
        assert_eq!(self_link.method.as_deref(), Some("GET"));
    }

    #[test]
    fn test_empty_report_download() {
        let report = ReportDownload::from_map(&Map::new()).unwrap();
        assert!(report.id.is_none());
        assert!(report.name.is_none());
        assert!(report.links.is_none());
        assert!(report.report_type.is_none());
        assert!(report.download_link.is_none());
        assert!(report.expiration_timestamp.is_none());
        assert_eq!(report, ReportDownload::default());
    }

    #[test]
    fn test_every_field_table_is_a_bijection() {
        let all = schemas();
        let mut model_names = HashSet::new();

        for schema in &all {
            assert!(model_names.insert(schema.name), "duplicate model {}", schema.name);

            let mut names = HashSet::new();
            let mut wires = HashSet::new();
            for field in schema.fields {
                assert!(
                    names.insert(field.name),
                    "{}: duplicate field {}",
                    schema.name,
                    field.name
                );
                assert!(
                    wires.insert(field.wire),
                    "{}: duplicate wire key {}",
                    schema.name,
                    field.wire
                );
            }
        }

        // Every nested model is itself registered.
        for schema in &all {
            for field in schema.fields {
                if let Some(nested) = field.kind.schema() {
                    assert!(
                        model_names.contains(nested.name),
                        "{}.{} refers to unregistered {}",
                        schema.name,
                        field.name,
                        nested.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_lenient_models_hydrate_from_empty_object() {
        let strict: Vec<&str> = schemas()
            .iter()
            .filter(|schema| schema.fields.iter().any(|f| f.required))
            .map(|schema| schema.name)
            .collect();

        assert_eq!(
            strict,
            vec![
                "AssignPolicyAction",
                "CreateReportDownloadResponse",
                "HateoasLink",
                "RetentionBackupSlaParam",
                "RpoBackupSlaParam",
            ]
        );

        assert_eq!(Task::from_map(&Map::new()).unwrap(), Task::default());
        assert_eq!(
            ListPoliciesResponse::from_map(&Map::new()).unwrap(),
            ListPoliciesResponse::default()
        );
        assert_eq!(
            OrganizationalUnitTaskResponse::from_map(&Map::new()).unwrap(),
            OrganizationalUnitTaskResponse::default()
        );
        assert!(matches!(
            CreateReportDownloadResponse::from_map(&Map::new()),
            Err(HydrationError::MissingField { field: "task_id", .. })
        ));
    }

    #[test]
    fn test_policy_round_trip() {
        let policy = PolicyDefinition {
            id: Some("p-1".to_string()),
            name: Some("Gold".to_string()),
            activation_status: Some("activated".to_string()),
            operations: Some(vec![PolicyOperation {
                operation_type: Some("aws_ebs_volume_backup".to_string()),
                action_setting: Some("window".to_string()),
                backup_window_tz: Some(BackupWindow {
                    start_time: Some("05:00".to_string()),
                    end_time: Some("07:00".to_string()),
                }),
                slas: Some(vec![BackupSla {
                    retention_duration: Some(RetentionBackupSlaParam {
                        unit: "days".to_string(),
                        value: 30,
                    }),
                    rpo_frequency: Some(RpoBackupSlaParam {
                        unit: "days".to_string(),
                        value: 1,
                        offsets: None,
                    }),
                }]),
                advanced_settings: Some(json!({
                    "aws_ebs_volume_backup": {"backup_tier": "standard"}
                })),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let wire = policy.to_wire();
        assert_eq!(wire["operations"][0]["type"], json!("aws_ebs_volume_backup"));
        assert_eq!(
            wire["operations"][0]["slas"][0]["retention_duration"],
            json!({"unit": "days", "value": 30})
        );
        assert!(!wire.contains_key("timezone"));
        assert_eq!(PolicyDefinition::from_map(&wire).unwrap(), policy);
    }

    #[test]
    fn test_strict_sla_inside_list() {
        let err = PolicyDefinition::from_value(json!({
            "operations": [{"slas": [{"retention_duration": {"unit": "days"}}]}]
        }))
        .unwrap_err();

        match err {
            HydrationError::MissingField { model, path, .. } => {
                assert_eq!(model, "RetentionBackupSlaParam");
                assert_eq!(path, "operations[0].slas[0].retention_duration.value");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_list_response_preserves_order_and_ignores_unknown_keys() {
        let map = object(json!({
            "_embedded": {"items": [
                {"id": "t-3", "status": "queued", "future_field": 1},
                {"id": "t-1", "status": "completed"},
                {"id": "t-2", "status": "failed"}
            ]},
            "_links": {"_next": {"href": "/tasks?start=2", "templated": false, "type": "get"}},
            "current_count": 3,
            "total_count": 30,
            "start": "1"
        }));

        let list = ListTasksResponse::from_map(&map).unwrap();
        let items = list.embedded.unwrap().items.unwrap();
        let ids: Vec<_> = items.iter().filter_map(|t| t.id.as_deref()).collect();
        assert_eq!(ids, vec!["t-3", "t-1", "t-2"]);
        assert!(!items[0].is_finished());
        assert!(items[1].is_finished());
        assert_eq!(list.links.unwrap().next.unwrap().href, "/tasks?start=2");
        assert_eq!(list.total_count, Some(30));
    }

    #[test]
    fn test_request_null_policies() {
        let update = UpdateRuleRequest {
            name: Some("prod volumes".to_string()),
            ..Default::default()
        };
        assert_eq!(UpdateRuleRequest::NULL_POLICY, NullPolicy::Explicit);
        assert_eq!(
            update.to_body(),
            json!({"name": "prod volumes", "action": null, "condition": null, "priority": null})
        );

        let create = CreateRuleRequest::assign(
            "prod volumes",
            "p-1",
            r#"{"entity_type":{"$eq":"aws_ebs_volume"}}"#,
        );
        assert_eq!(
            create.to_body(),
            json!({
                "name": "prod volumes",
                "action": {"assign_policy": {"policy_id": "p-1"}},
                "condition": "{\"entity_type\":{\"$eq\":\"aws_ebs_volume\"}}"
            })
        );

        assert_eq!(
            UpdateTaskRequest::abort().to_body(),
            json!({"status": "aborted"})
        );
    }

    #[test]
    fn test_rule_accessors() {
        let rule = Rule::from_value(json!({
            "id": "r-1",
            "action": {"assign_policy": {"policy_id": "p-9"}},
            "priority": {"before_rule_id": "r-0"}
        }))
        .unwrap();
        assert_eq!(rule.policy_id(), Some("p-9"));
        assert_eq!(rule.priority.unwrap().before_rule_id.as_deref(), Some("r-0"));
    }

    #[test]
    fn test_find_schema() {
        let schema = find_schema("reportdownload").unwrap();
        assert_eq!(schema.name, "ReportDownload");
        assert_eq!(schema.field("report_type").unwrap().wire, "type");
        assert_eq!(
            schema.field("links").unwrap().kind,
            FieldKind::Model(ReportDownloadLinks::schema())
        );
        assert!(find_schema("Repository").is_none());
    }
}
