//
//  clumio-sdk
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`write_json`] | Pretty-printed JSON on stdout |
//! | [`write_json_to`] | Pretty-printed JSON to any writer |
//! | [`write_body`] | A response body: pretty JSON if it parses, verbatim otherwise |

use serde::Serialize;
use std::io::{self, Write};

pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json_to(&mut io::stdout().lock(), value)
}

pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes an HTTP response body. Empty bodies write nothing.
pub fn write_body<W: Write>(writer: &mut W, body: &str) -> anyhow::Result<()> {
    if body.trim().is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => write_json_to(writer, &json),
        Err(_) => {
            writeln!(writer, "{}", body)?;
            Ok(())
        }
    }
}
