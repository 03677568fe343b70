//
//  clumio-sdk
//  cli/schema.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Prints model field tables: local names, wire keys and kinds.

use anyhow::{bail, Result};
use clap::Args;
use serde_json::{json, Value};

use super::GlobalOptions;
use crate::model::{FieldKind, ScalarType, Schema};
use crate::models::{find_schema, schemas};
use crate::output::{format_bool, write_json, TableBuilder};

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Model name, e.g. PolicyDefinition (case-insensitive). Lists all models when omitted
    pub name: Option<String>,
}

impl SchemaCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.name {
            Some(name) => {
                let Some(schema) = find_schema(name) else {
                    bail!("Unknown model '{}'. Run 'clumio schema' to list models.", name);
                };
                show(&schema, global)
            }
            None => list(global),
        }
    }
}

fn list(global: &GlobalOptions) -> Result<()> {
    let all = schemas();
    if global.json {
        let names: Vec<Value> = all
            .iter()
            .map(|s| json!({"name": s.name, "fields": s.fields.len()}))
            .collect();
        return write_json(&names);
    }

    TableBuilder::new()
        .headers(["MODEL", "FIELDS"])
        .rows(all.iter().map(|s| vec![s.name.to_string(), s.fields.len().to_string()]))
        .print();
    Ok(())
}

fn show(schema: &Schema, global: &GlobalOptions) -> Result<()> {
    if global.json {
        return write_json(&schema_json(schema));
    }

    let color = global.writer().color_enabled();
    println!("{}", schema.name);
    TableBuilder::new()
        .color(color)
        .headers(["FIELD", "WIRE KEY", "KIND", "REQUIRED"])
        .rows(schema.fields.iter().map(|f| {
            vec![
                f.name.to_string(),
                f.wire.to_string(),
                kind_label(&f.kind),
                format_bool(f.required, color),
            ]
        }))
        .print();
    Ok(())
}

fn schema_json(schema: &Schema) -> Value {
    let fields: Vec<Value> = schema
        .fields
        .iter()
        .map(|f| {
            json!({
                "name": f.name,
                "wire": f.wire,
                "kind": kind_label(&f.kind),
                "required": f.required,
            })
        })
        .collect();
    json!({"name": schema.name, "fields": fields})
}

fn scalar_label(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "string",
        ScalarType::Integer => "integer",
        ScalarType::Float => "float",
        ScalarType::Boolean => "boolean",
    }
}

fn kind_label(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Scalar(scalar) => scalar_label(*scalar).to_string(),
        FieldKind::Opaque => "any".to_string(),
        FieldKind::Model(schema) => schema.name.to_string(),
        FieldKind::ModelList(schema) => format!("[{}]", schema.name),
        FieldKind::ScalarList(scalar) => format!("[{}]", scalar_label(*scalar)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_label() {
        assert_eq!(kind_label(&FieldKind::Scalar(ScalarType::Integer)), "integer");
        assert_eq!(kind_label(&FieldKind::Opaque), "any");
        assert_eq!(kind_label(&FieldKind::ScalarList(ScalarType::String)), "[string]");

        let task = find_schema("Task").unwrap();
        assert_eq!(kind_label(&FieldKind::ModelList(task)), "[Task]");
    }

    #[test]
    fn test_schema_json() {
        let schema = find_schema("ReportDownload").unwrap();
        let value = schema_json(&schema);
        assert_eq!(value["name"], "ReportDownload");

        let fields = value["fields"].as_array().unwrap();
        let report_type = fields.iter().find(|f| f["name"] == "report_type").unwrap();
        assert_eq!(report_type["wire"], "type");
        assert_eq!(report_type["kind"], "string");
    }
}
