//
//  clumio-sdk
//  cli/task.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Task commands.
//!
//! Writes that answer `202` hand back a task id. `clumio task wait` polls it until it
//! reaches a terminal status:
//!
//! ```bash
//! clumio task wait 12345 --interval 5
//! ```

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use tracing::debug;

use super::{listing, print_list, print_one, take_data, GlobalOptions, ListOptions};
use crate::models::{ListTasksResponse, Task};
use crate::output::{cell, format_bool, format_status, TableOutput};
use crate::util::{elapsed, format_relative_time};

listing!(ListTasksResponse => Task);

#[derive(Args, Debug)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub command: TaskSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TaskSubcommand {
    /// List tasks
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show a task
    View(IdArgs),

    /// Abort a running task
    Abort(IdArgs),

    /// Wait for a task to finish
    Wait(WaitArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub list: ListOptions,

    /// Only tasks with this status (repeatable): queued, in_progress, completed, failed, aborted
    #[arg(long)]
    pub status: Vec<String>,

    /// Only tasks of this type, e.g. aws_ebs_volume_incremental_backup
    #[arg(long = "type")]
    pub task_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Args, Debug)]
pub struct WaitArgs {
    pub id: String,

    /// Seconds between polls
    #[arg(long, default_value = "10")]
    pub interval: u64,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl TaskCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TaskSubcommand::List(args) => list(args, global).await,
            TaskSubcommand::View(args) => view(args, global).await,
            TaskSubcommand::Abort(args) => abort(args, global).await,
            TaskSubcommand::Wait(args) => wait(args, global).await,
        }
    }
}

async fn list(args: &ListArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let params = args.list.params(|mut filter| {
        if !args.status.is_empty() {
            filter = filter.is_in("status", args.status.iter().map(String::as_str));
        }
        if let Some(task_type) = &args.task_type {
            filter = filter.equals("type", task_type.as_str());
        }
        filter
    })?;

    let response = client.tasks().list(&params).await?;
    print_list(global, response, "tasks")
}

async fn view(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.tasks().read(&args.id).await?;
    print_one(global, response)?;
    Ok(())
}

async fn abort(args: &IdArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let response = client.tasks().abort(&args.id).await?;
    if let Some(task) = print_one(global, response)? {
        global.writer().write_success(&format!(
            "Abort requested for task {} ({})",
            args.id,
            cell(task.status.as_deref())
        ));
    }
    Ok(())
}

async fn wait(args: &WaitArgs, global: &GlobalOptions) -> Result<()> {
    if args.interval == 0 {
        bail!("--interval must be at least 1 second");
    }

    let client = global.client()?;
    let started = Instant::now();

    loop {
        let task = take_data(client.tasks().read(&args.id).await?)?
            .with_context(|| format!("Could not read task {}", args.id))?;
        debug!(task_id = %args.id, status = ?task.status, "polled task");

        if task.is_finished() {
            global.writer().write(&task)?;
            if task.status.as_deref() == Some("completed") {
                return Ok(());
            }
            bail!(
                "Task {} finished with status {}",
                args.id,
                cell(task.status.as_deref())
            );
        }

        if let Some(timeout) = args.timeout {
            if started.elapsed() >= Duration::from_secs(timeout) {
                bail!(
                    "Timed out after {}s; task {} is still {}",
                    timeout,
                    args.id,
                    cell(task.status.as_deref())
                );
            }
        }

        tokio::time::sleep(Duration::from_secs(args.interval)).await;
    }
}

impl TableOutput for Task {
    const HEADERS: &'static [&'static str] = &[
        "ID", "TYPE", "STATUS", "PROGRESS", "ENTITY", "ABORTABLE", "STARTED", "DURATION",
    ];

    fn row(&self, color: bool) -> Vec<String> {
        let entity = self
            .primary_entity
            .as_ref()
            .and_then(|e| e.value.as_deref().or(e.id.as_deref()));
        let duration = match (&self.start_timestamp, &self.end_timestamp) {
            (Some(start), Some(end)) => elapsed(start, end),
            _ => None,
        };

        vec![
            cell(self.id.as_deref()),
            cell(self.task_type.as_deref()),
            format_status(self.status.as_deref().unwrap_or("-"), color),
            cell(self.progress_percentage.map(|p| format!("{}%", p))),
            cell(entity),
            format_bool(self.is_abortable.unwrap_or(false), color),
            cell(self.start_timestamp.as_deref().map(format_relative_time)),
            cell(duration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn test_task_row() {
        let task = Task::from_value(serde_json::json!({
            "id": "t1",
            "type": "aws_ebs_volume_incremental_backup",
            "status": "completed",
            "progress_percentage": 100,
            "is_abortable": false,
            "primary_entity": {"id": "vol-1", "type": "aws_ebs_volume", "value": "data"},
            "start_timestamp": "2024-03-10T12:00:00Z",
            "end_timestamp": "2024-03-10T12:02:30Z"
        }))
        .unwrap();

        let row = task.row(false);
        assert_eq!(row.len(), Task::HEADERS.len());
        assert_eq!(row[2], "completed");
        assert_eq!(row[3], "100%");
        assert_eq!(row[4], "data");
        assert_eq!(row[5], "No");
        assert_eq!(row[7], "2m 30s");
    }
}
