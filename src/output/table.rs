//
//  clumio-sdk
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Builder around `comfy_table` plus helpers that color Clumio status values.
//!
//! ```rust,ignore
//! use clumio_sdk::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "NAME", "STATUS"])
//!     .rows([["1b2c", "gold", "activated"]])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates an empty table with UTF-8 borders that wraps to the terminal width.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            let row: Vec<String> = row.into_iter().map(Into::into).collect();
            self.table.add_row(row);
        }
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a task, policy, connection or audit status.
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_lowercase().as_str() {
        "completed" | "activated" | "connected" | "success" | "enabled" => {
            style(status).green().to_string()
        }
        "queued" | "in_progress" | "connecting" | "updating" | "partial_success" => {
            style(status).yellow().to_string()
        }
        "failed" | "aborted" | "aborting" | "failure" | "disconnected" => {
            style(status).red().to_string()
        }
        "deactivated" | "disabled" => style(status).dim().to_string(),
        _ => status.to_string(),
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

/// Renders an optional cell, `-` when absent.
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_without_color() {
        assert_eq!(format_status("in_progress", false), "in_progress");
        assert_eq!(format_status("whatever", true), "whatever");
    }

    #[test]
    fn test_format_bool_without_color() {
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(format_bool(false, false), "No");
    }

    #[test]
    fn test_cell() {
        assert_eq!(cell(Some("abc")), "abc");
        assert_eq!(cell(Some(42)), "42");
        assert_eq!(cell::<&str>(None), "-");
    }

    #[test]
    fn test_builder_renders_rows() {
        let table = TableBuilder::new()
            .color(false)
            .headers(["ID", "NAME"])
            .rows([["p1", "gold"]])
            .build();
        let rendered = table.to_string();
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("gold"));
    }
}
