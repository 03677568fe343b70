//
//  clumio-sdk
//  models/tasks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Long-running tasks (backups, restores, policy and rule updates, report generation).

use super::common::{PageLinks, TaskLinks};
use crate::model::RequestBody;

/// Task statuses after which a task no longer changes.
pub const TERMINAL_TASK_STATUSES: &[&str] = &[
    "completed",
    "completed_with_errors",
    "failed",
    "aborted",
];

clumio_model! {
    /// An entity a task acts on.
    pub struct TaskEntity {
        pub id: Option<String> => "id",
        /// Entity type, e.g. `aws_ebs_volume`.
        pub entity_type: Option<String> => "type",
        /// Human-readable value, usually a name.
        pub value: Option<String> => "value",
    }
}

clumio_model! {
    pub struct Task {
        pub links: Option<TaskLinks> => "_links",
        pub id: Option<String> => "id",
        /// Task type, e.g. `aws_ebs_volume_incremental_backup`.
        pub task_type: Option<String> => "type",
        pub category: Option<String> => "category",
        /// `queued`, `in_progress`, `completed`, `aborting`, `aborted`, `failed`, ...
        pub status: Option<String> => "status",
        pub progress_percentage: Option<i64> => "progress_percentage",
        pub is_abortable: Option<bool> => "is_abortable",
        pub created_timestamp: Option<String> => "created_timestamp",
        pub start_timestamp: Option<String> => "start_timestamp",
        pub end_timestamp: Option<String> => "end_timestamp",
        pub primary_entity: Option<TaskEntity> => "primary_entity",
        pub parent_entity: Option<TaskEntity> => "parent_entity",
        pub organizational_unit_id: Option<String> => "organizational_unit_id",
    }
}

impl Task {
    /// Returns true once the task has reached a final status.
    pub fn is_finished(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| TERMINAL_TASK_STATUSES.contains(&status))
    }
}

clumio_model! {
    pub struct TaskListEmbedded {
        pub items: Option<Vec<Task>> => "items",
    }
}

clumio_model! {
    pub struct ListTasksResponse {
        pub embedded: Option<TaskListEmbedded> => "_embedded",
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
    pub struct UpdateTaskRequest {
        /// The only supported transition is to `aborted`.
        pub status: Option<String> => "status",
    }
}

impl RequestBody for UpdateTaskRequest {}

impl UpdateTaskRequest {
    pub fn abort() -> Self {
        Self {
            status: Some("aborted".to_string()),
        }
    }
}
