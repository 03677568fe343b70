//
//  clumio-sdk
//  tests/controllers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;

use clumio_sdk::api::{ApiError, ApiResponse, ClumioClient, Filter, ListParams, OperationResult};
use clumio_sdk::auth::ApiToken;
use clumio_sdk::controllers::{
    OrganizationalUnitResult, POLICY_DEFINITIONS_MEDIA_TYPE, POLICY_RULES_MEDIA_TYPE,
    TASKS_MEDIA_TYPE,
};
use clumio_sdk::models::{
    CreateOrganizationalUnitRequest, PatchUserRequest, PreviewRulesRequest,
    UpdatePolicyDefinitionRequest,
};

fn client(server: &Server) -> ClumioClient {
    ClumioClient::new(&server.url())
        .unwrap()
        .with_auth(ApiToken::new("test-token"))
}

#[tokio::test]
async fn test_read_policy_sends_expected_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/policies/definitions/p-1")
        .match_header("accept", POLICY_DEFINITIONS_MEDIA_TYPE)
        .match_header("authorization", "Bearer test-token")
        .match_header("x-clumio-organizationalunit-context", "ou-7")
        .match_header("x-clumio-sdk-version", Matcher::Regex("^clumio-rust-sdk:".to_string()))
        .match_query(Matcher::UrlEncoded(
            "embed".to_string(),
            "read-policy-aws-ebs-volumes-compliance-stats,read-organizational-unit".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "p-1",
                "name": "gold",
                "activation_status": "activated",
                "_links": {"_self": {"href": "/policies/definitions/p-1", "templated": false}}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client(&server).with_organizational_unit("ou-7").unwrap();
    let response = client
        .policy_definitions()
        .read(
            "p-1",
            &["read-policy-aws-ebs-volumes-compliance-stats", "read-organizational-unit"],
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!response.is_raw());
    let policy = response.into_data().unwrap();
    assert_eq!(policy.id.as_deref(), Some("p-1"));
    assert_eq!(policy.name.as_deref(), Some("gold"));
    assert_eq!(
        policy.links.unwrap().self_link.unwrap().href,
        "/policies/definitions/p-1"
    );
}

#[tokio::test]
async fn test_list_tasks_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks")
        .match_header("accept", TASKS_MEDIA_TYPE)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".to_string(), "2".to_string()),
            Matcher::UrlEncoded("start".to_string(), "3".to_string()),
            Matcher::UrlEncoded(
                "filter".to_string(),
                r#"{"status":{"$eq":"failed"}}"#.to_string(),
            ),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "_embedded": {"items": [
                    {"id": "t-1", "status": "failed"},
                    {"id": "t-2", "status": "failed"}
                ]},
                "_links": {"_next": {"href": "/tasks?limit=2&start=4", "templated": false}},
                "current_count": 2,
                "total_count": 9
            })
            .to_string(),
        )
        .create_async()
        .await;

    let params = ListParams::new()
        .limit(2)
        .start("3")
        .filter(Filter::new().equals("status", "failed"));
    let page = client(&server)
        .tasks()
        .list(&params)
        .await
        .unwrap()
        .into_data()
        .unwrap();

    mock.assert_async().await;
    let items = page.embedded.unwrap().items.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id.as_deref(), Some("t-2"));
    assert_eq!(page.total_count, Some(9));
    assert!(page.links.unwrap().next.is_some());
}

#[tokio::test]
async fn test_update_policy_sends_explicit_nulls() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/policies/definitions/p-1")
        .match_body(Matcher::Json(json!({
            "name": "gold",
            "description": null,
            "activation_status": "deactivated",
            "operations": null,
            "organizational_unit_id": null,
            "timezone": null
        })))
        .with_status(200)
        .with_body(json!({"id": "p-1", "task_id": "t-5"}).to_string())
        .create_async()
        .await;

    let body = UpdatePolicyDefinitionRequest {
        name: Some("gold".to_string()),
        activation_status: Some("deactivated".to_string()),
        ..Default::default()
    };
    let updated = client(&server)
        .policy_definitions()
        .update("p-1", &body, &[])
        .await
        .unwrap()
        .into_data()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(updated.task_id.as_deref(), Some("t-5"));
}

#[tokio::test]
async fn test_patch_user_omits_unset_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/users/u-1")
        .match_body(Matcher::Json(json!({"is_enabled": false})))
        .with_status(200)
        .with_body(json!({"id": "u-1", "is_enabled": false}).to_string())
        .create_async()
        .await;

    let body = PatchUserRequest {
        is_enabled: Some(false),
        ..Default::default()
    };
    let user = client(&server)
        .users()
        .patch("u-1", &body)
        .await
        .unwrap()
        .into_data()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(user.is_enabled, Some(false));
}

#[tokio::test]
async fn test_create_organizational_unit_sync_and_async() {
    let body = CreateOrganizationalUnitRequest {
        name: Some("finance".to_string()),
        ..Default::default()
    };

    let mut server = Server::new_async().await;
    let sync = server
        .mock("POST", "/organizational-units")
        .match_body(Matcher::Json(json!({"name": "finance"})))
        .with_status(200)
        .with_body(json!({"id": "ou-1", "name": "finance"}).to_string())
        .create_async()
        .await;

    let result: OrganizationalUnitResult = client(&server)
        .organizational_units()
        .create(&body)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    sync.assert_async().await;
    assert!(!result.is_async());
    assert_eq!(result.sync().unwrap().name.as_deref(), Some("finance"));

    let mut server = Server::new_async().await;
    let accepted = server
        .mock("POST", "/organizational-units")
        .with_status(202)
        .with_body(json!({"id": "ou-2", "name": "finance", "task_id": "t-8"}).to_string())
        .create_async()
        .await;

    let result = client(&server)
        .organizational_units()
        .create(&body)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    accepted.assert_async().await;
    match result {
        OperationResult::Async(task) => assert_eq!(task.task_id.as_deref(), Some("t-8")),
        OperationResult::Sync(_) => panic!("202 must hydrate the task response"),
    }
}

#[tokio::test]
async fn test_preview_rules_returns_matches() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/policies/rules/preview")
        .match_header("accept", POLICY_RULES_MEDIA_TYPE)
        .match_body(Matcher::PartialJson(json!({"get_result": true})))
        .with_status(200)
        .with_body(
            json!({
                "_embedded": {"items": [{"id": "vol-1", "type": "aws_ebs_volume"}]},
                "current_count": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let body = PreviewRulesRequest {
        condition: Some(r#"{"entity_type":{"$eq":"aws_ebs_volume"}}"#.to_string()),
        get_result: Some(true),
    };
    let result = client(&server)
        .policy_rules()
        .preview(&body)
        .await
        .unwrap()
        .into_data()
        .unwrap();

    mock.assert_async().await;
    let page = result.sync().unwrap();
    let items = page.embedded.as_ref().unwrap().items.as_ref().unwrap();
    assert_eq!(items[0].asset_type.as_deref(), Some("aws_ebs_volume"));
}

#[tokio::test]
async fn test_error_status_maps_to_operation_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/tasks/missing")
        .with_status(404)
        .with_body(
            json!({"errors": [{"error_code": 404, "error_message": "Task not found."}]})
                .to_string(),
        )
        .create_async()
        .await;

    let err = client(&server).tasks().read("missing").await.unwrap_err();

    assert_eq!(err.operation(), "read_task");
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert!(err.is_not_found());
    match err {
        ApiError::Operation { message, body, .. } => {
            assert_eq!(message, "Task not found.");
            assert!(body.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_raw_mode_returns_error_responses() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/users/u-1")
        .with_status(500)
        .with_header("x-request-id", "req-42")
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let response = client(&server)
        .with_raw_response(true)
        .users()
        .read("u-1")
        .await
        .unwrap();

    assert!(response.is_raw());
    assert!(response.data().is_none());
    let raw = response.raw().unwrap();
    assert_eq!(raw.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(raw.body, "upstream unavailable");
    assert_eq!(raw.headers.get("x-request-id").unwrap(), "req-42");
}

#[tokio::test]
async fn test_raw_mode_hydrates_success() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/tasks/t-1")
        .with_status(200)
        .with_body(json!({"id": "t-1", "status": "in_progress"}).to_string())
        .create_async()
        .await;

    let response = client(&server)
        .with_raw_response(true)
        .tasks()
        .read("t-1")
        .await
        .unwrap();

    match response {
        ApiResponse::Raw { response, data } => {
            assert_eq!(response.status, StatusCode::OK);
            assert_eq!(data.unwrap().status.as_deref(), Some("in_progress"));
        }
        ApiResponse::Hydrated(_) => panic!("raw mode must return the raw response"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_hydration_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/tasks/t-1")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let err = client(&server).tasks().read("t-1").await.unwrap_err();
    assert!(matches!(err, ApiError::Hydration { operation: "read_task", .. }));
}

#[tokio::test]
async fn test_empty_path_parameter_is_rejected() {
    let server = Server::new_async().await;
    let err = client(&server).users().read("").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest { .. }));
    assert_eq!(err.operation(), "read_user");
}

#[tokio::test]
async fn test_network_error_names_operation() {
    let client = ClumioClient::new("http://127.0.0.1:1").unwrap();
    let err = client.tasks().read("t-1").await.unwrap_err();

    assert!(matches!(err, ApiError::Network { .. }));
    assert_eq!(err.operation(), "read_task");
    assert_eq!(err.status(), None);
}
