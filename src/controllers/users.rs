//
//  clumio-sdk
//  controllers/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User operations.

use crate::api::{ApiError, ApiResponse, ClumioClient, ListParams, Request};
use crate::models::{CreateUserRequest, EmptyResponse, ListUsersResponse, PatchUserRequest, User};

pub const USERS_MEDIA_TYPE: &str = "application/api.clumio.users=v1+json";

/// Operations on `/users`.
pub struct Users<'a> {
    client: &'a ClumioClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a ClumioClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ListUsersResponse>, ApiError> {
        let request = Request::get("list_users", "/users")
            .accept(USERS_MEDIA_TYPE)
            .list_params(params);
        self.client.call(request).await
    }

    /// Invites a user. The user is unconfirmed until they accept the invitation.
    pub async fn create(&self, body: &CreateUserRequest) -> Result<ApiResponse<User>, ApiError> {
        let request = Request::post("create_user", "/users")
            .accept(USERS_MEDIA_TYPE)
            .body(body);
        self.client.call(request).await
    }

    pub async fn read(&self, user_id: &str) -> Result<ApiResponse<User>, ApiError> {
        let request = Request::get("read_user", "/users/{user_id}")
            .accept(USERS_MEDIA_TYPE)
            .path_param("user_id", user_id);
        self.client.call(request).await
    }

    pub async fn patch(
        &self,
        user_id: &str,
        body: &PatchUserRequest,
    ) -> Result<ApiResponse<User>, ApiError> {
        let request = Request::patch("patch_user", "/users/{user_id}")
            .accept(USERS_MEDIA_TYPE)
            .path_param("user_id", user_id)
            .body(body);
        self.client.call(request).await
    }

    pub async fn delete(&self, user_id: &str) -> Result<ApiResponse<EmptyResponse>, ApiError> {
        let request = Request::delete("delete_user", "/users/{user_id}")
            .accept(USERS_MEDIA_TYPE)
            .path_param("user_id", user_id);
        self.client.call(request).await
    }
}
