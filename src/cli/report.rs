//
//  clumio-sdk
//  cli/report.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Report download commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use super::{listing, print_list, take_data, GlobalOptions, ListOptions};
use crate::models::{CreateReportDownloadRequest, ListReportDownloadsResponse, ReportDownload};
use crate::output::{cell, write_json, TableOutput};
use crate::util::format_timestamp;

listing!(ListReportDownloadsResponse => ReportDownload);

#[derive(Args, Debug)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub command: ReportSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReportSubcommand {
    /// List generated reports and their download links
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Start generating a report
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub list: ListOptions,

    /// Only reports of this type
    #[arg(long = "type")]
    pub report_type: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Report type: activity, compliance or audit
    #[arg(long = "type", short = 't')]
    pub report_type: String,

    /// Name of the generated file
    #[arg(long)]
    pub file_name: Option<String>,

    /// Report filter as JSON, sent as a string
    #[arg(long)]
    pub filters: Option<String>,
}

impl ReportCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ReportSubcommand::List(args) => list(args, global).await,
            ReportSubcommand::Create(args) => create(args, global).await,
        }
    }
}

async fn list(args: &ListArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let params = args.list.params(|filter| match &args.report_type {
        Some(report_type) => filter.equals("type", report_type.as_str()),
        None => filter,
    })?;

    let response = client.report_downloads().list(&params).await?;
    print_list(global, response, "reports")
}

async fn create(args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
    if let Some(filters) = &args.filters {
        serde_json::from_str::<serde_json::Value>(filters)
            .context("--filters is not valid JSON")?;
    }

    let body = CreateReportDownloadRequest {
        report_type: Some(args.report_type.clone()),
        file_name: args.file_name.clone(),
        filters: args.filters.clone(),
    };
    let client = global.client()?;
    let response = client.report_downloads().create(&body).await?;

    if let Some(created) = take_data(response)? {
        if global.json {
            write_json(&created)?;
        } else {
            let writer = global.writer();
            writer.write_success(&format!("Generating report in task {}", created.task_id));
            writer.write_info(&format!(
                "Run 'clumio task wait {}', then 'clumio report list' for the download link.",
                created.task_id
            ));
        }
    }
    Ok(())
}

impl TableOutput for ReportDownload {
    const HEADERS: &'static [&'static str] =
        &["ID", "TYPE", "FILE", "STARTED", "EXPIRES", "DOWNLOAD"];

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            cell(self.id.as_deref()),
            cell(self.report_type.as_deref()),
            cell(self.file_name.as_deref()),
            cell(self.start_timestamp.as_deref().map(format_timestamp)),
            cell(self.expiration_timestamp.as_deref().map(format_timestamp)),
            cell(self.download_link.as_deref()),
        ]
    }
}
