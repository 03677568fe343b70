//
//  clumio-sdk
//  controllers/aws_connections.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! AWS connection operations.

use crate::api::{ApiError, ApiResponse, ClumioClient, ListParams, Request};
use crate::models::{
    AwsConnection, CreateAwsConnectionRequest, EmptyResponse, ListAwsConnectionsResponse,
    UpdateAwsConnectionRequest,
};

pub const AWS_CONNECTIONS_MEDIA_TYPE: &str = "application/api.clumio.aws-connections=v1+json";

/// Operations on `/connections/aws`.
pub struct AwsConnections<'a> {
    client: &'a ClumioClient,
}

impl<'a> AwsConnections<'a> {
    pub(crate) fn new(client: &'a ClumioClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ListAwsConnectionsResponse>, ApiError> {
        let request = Request::get("list_aws_connections", "/connections/aws")
            .accept(AWS_CONNECTIONS_MEDIA_TYPE)
            .list_params(params);
        self.client.call(request).await
    }

    /// Registers an account/region pair. The connection stays `connecting` until the
    /// CloudFormation stack is deployed.
    pub async fn create(
        &self,
        body: &CreateAwsConnectionRequest,
    ) -> Result<ApiResponse<AwsConnection>, ApiError> {
        let request = Request::post("create_aws_connection", "/connections/aws")
            .accept(AWS_CONNECTIONS_MEDIA_TYPE)
            .body(body);
        self.client.call(request).await
    }

    pub async fn read(&self, connection_id: &str) -> Result<ApiResponse<AwsConnection>, ApiError> {
        let request = Request::get("read_aws_connection", "/connections/aws/{connection_id}")
            .accept(AWS_CONNECTIONS_MEDIA_TYPE)
            .path_param("connection_id", connection_id);
        self.client.call(request).await
    }

    pub async fn update(
        &self,
        connection_id: &str,
        body: &UpdateAwsConnectionRequest,
    ) -> Result<ApiResponse<AwsConnection>, ApiError> {
        let request = Request::patch("update_aws_connection", "/connections/aws/{connection_id}")
            .accept(AWS_CONNECTIONS_MEDIA_TYPE)
            .path_param("connection_id", connection_id)
            .body(body);
        self.client.call(request).await
    }

    pub async fn delete(
        &self,
        connection_id: &str,
    ) -> Result<ApiResponse<EmptyResponse>, ApiError> {
        let request = Request::delete("delete_aws_connection", "/connections/aws/{connection_id}")
            .accept(AWS_CONNECTIONS_MEDIA_TYPE)
            .path_param("connection_id", connection_id);
        self.client.call(request).await
    }
}
