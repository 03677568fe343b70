//
//  clumio-sdk
//  controllers/tasks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Task operations.

use crate::api::{ApiError, ApiResponse, ClumioClient, ListParams, Request};
use crate::models::{ListTasksResponse, Task, UpdateTaskRequest};

pub const TASKS_MEDIA_TYPE: &str = "application/api.clumio.tasks=v1+json";

/// Operations on `/tasks`.
pub struct Tasks<'a> {
    client: &'a ClumioClient,
}

impl<'a> Tasks<'a> {
    pub(crate) fn new(client: &'a ClumioClient) -> Self {
        Self { client }
    }

    /// Lists tasks.
    ///
    /// Useful filters are `status`, `type`, `primary_entity.id` and `start_timestamp`:
    ///
    /// ```rust,no_run
    /// # use clumio_sdk::api::{ClumioClient, Filter, ListParams};
    /// # async fn example(client: &ClumioClient) -> anyhow::Result<()> {
    /// let running = ListParams::new()
    ///     .limit(50)
    ///     .filter(Filter::new().is_in("status", ["queued", "in_progress"]));
    /// let page = client.tasks().list(&running).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<ListTasksResponse>, ApiError> {
        let request = Request::get("list_tasks", "/tasks")
            .accept(TASKS_MEDIA_TYPE)
            .list_params(params);
        self.client.call(request).await
    }

    pub async fn read(&self, task_id: &str) -> Result<ApiResponse<Task>, ApiError> {
        let request = Request::get("read_task", "/tasks/{task_id}")
            .accept(TASKS_MEDIA_TYPE)
            .path_param("task_id", task_id);
        self.client.call(request).await
    }

    /// Requests that a running task be aborted.
    ///
    /// Only tasks with `is_abortable` set can be aborted; the API rejects the rest.
    pub async fn abort(&self, task_id: &str) -> Result<ApiResponse<Task>, ApiError> {
        let request = Request::put("abort_task", "/tasks/{task_id}")
            .accept(TASKS_MEDIA_TYPE)
            .path_param("task_id", task_id)
            .body(&UpdateTaskRequest::abort());
        self.client.call(request).await
    }
}
