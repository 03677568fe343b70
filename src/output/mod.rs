//
//  clumio-sdk
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Formatting for the `clumio` binary. Resources print as tables on a terminal and as pretty
//! JSON with `--json`.
//!
//! - [`table`]: `comfy_table` helpers and status coloring
//! - [`json`]: JSON writers
//!
//! ## Example
//!
//! ```rust,ignore
//! use clumio_sdk::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Table);
//! writer.write_list(&tasks)?;
//! writer.write_success("Task aborted");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tables for interactive use.
    #[default]
    Table,
    /// Pretty-printed JSON for scripts.
    Json,
}

/// Types that render as one table row.
///
/// [`HEADERS`](TableOutput::HEADERS) and [`row`](TableOutput::row) must have the same length.
/// A single value prints as a two-column `field | value` table built from both.
pub trait TableOutput {
    const HEADERS: &'static [&'static str];

    fn row(&self, color: bool) -> Vec<String>;

    fn print_table(&self, color: bool) {
        let table = TableBuilder::new()
            .color(color)
            .rows(
                Self::HEADERS
                    .iter()
                    .zip(self.row(color))
                    .map(|(header, value)| [header.to_string(), value]),
            );
        table.print();
    }
}

/// Writes command results in the selected format.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Writes one value as JSON or as a `field | value` table.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes a list as a JSON array or as a table with one row per item.
    pub fn write_list<T: Serialize + TableOutput>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values)?,
            OutputFormat::Table => {
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::HEADERS.iter().copied())
                    .rows(values.iter().map(|value| value.row(self.color)))
                    .print();
            }
        }
        Ok(())
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.format == OutputFormat::Json {
            return;
        }
        if self.color {
            println!("{} {}", style("✓").green(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        use console::style;
        if self.format == OutputFormat::Json {
            return;
        }
        if self.color {
            println!("{}", style(msg).dim());
        } else {
            println!("{}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, u32);

    impl TableOutput for Pair {
        const HEADERS: &'static [&'static str] = &["NAME", "COUNT"];

        fn row(&self, _color: bool) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_default_format_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
        assert_eq!(OutputWriter::new(OutputFormat::Json).format(), OutputFormat::Json);
    }

    #[test]
    fn test_row_matches_headers() {
        let pair = Pair("rules", 3);
        assert_eq!(pair.row(false).len(), Pair::HEADERS.len());
    }
}
