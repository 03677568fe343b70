//
//  clumio-sdk
//  model/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Model Layer
//!
//! Every Clumio payload (resource, request body, response envelope) is a *model*: a plain
//! struct plus a static field table that maps each local field name to the exact JSON key
//! used on the wire. The table is what drives hydration and serialization, so there is no
//! hand-written `from_dictionary`/`to_dictionary` logic per type.
//!
//! ## Overview
//!
//! - [`Field`] / [`FieldKind`] / [`Schema`]: the declarative field-mapping table
//! - [`Model`]: the generic hydrator ([`Model::from_map`], [`Model::hydrate`]) and
//!   serializer ([`Model::to_wire`], [`Model::to_wire_with`])
//! - [`Wire`]: compile-time classification of field types (scalar, nested, list, opaque)
//! - [`RequestBody`]: request models, each carrying its own [`NullPolicy`]
//! - [`HydrationError`]: failures while turning JSON into a model
//!
//! Models are declared with the crate-internal `clumio_model!` macro, which emits the struct,
//! the serde attributes and the field table from a single declaration.
//!
//! ## Lenient vs Strict Fields
//!
//! Strictness is a property of the field's type:
//!
//! | Declared type | Missing wire key | Present, wrong JSON type |
//! |---------------|------------------|--------------------------|
//! | `Option<T>` | `None` | [`HydrationError::InvalidValue`] |
//! | `T` | [`HydrationError::MissingField`] | [`HydrationError::InvalidValue`] |
//!
//! ## Example
//!
//! ```rust
//! use clumio_sdk::model::Model;
//! use clumio_sdk::models::ReportDownload;
//! use serde_json::json;
//!
//! let value = json!({
//!     "id": "abc123",
//!     "name": "My Report",
//!     "_links": {"_self": {"href": "/x", "templated": false, "type": "GET"}}
//! });
//!
//! let report = ReportDownload::from_value(value).unwrap();
//! assert_eq!(report.id.as_deref(), Some("abc123"));
//! assert_eq!(report.links.unwrap().self_link.unwrap().href, "/x");
//! ```

#[macro_use]
mod macros;
mod wire;

pub use wire::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// One entry of a model's field-mapping table.
///
/// `name` is the Rust field name, `wire` the JSON key. Wire keys are arbitrary strings and may
/// start with an underscore or contain hyphens (`_links`, `read-policy-definition`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Local (Rust) field name.
    pub name: &'static str,
    /// JSON key used in request and response payloads.
    pub wire: &'static str,
    /// Semantic type of the field.
    pub kind: FieldKind,
    /// Whether the wire key must be present when hydrating.
    pub required: bool,
}

/// Name and field table of a model, used for nested hydration checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// Model type name.
    pub name: &'static str,
    /// The model's field-mapping table.
    pub fields: &'static [Field],
}

impl Schema {
    /// Looks up a field by its local name.
    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a field by its wire key.
    pub fn wire_field(&self, wire: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.wire == wire)
    }
}

/// Semantic type of a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String, number or boolean, assigned as-is.
    Scalar(ScalarType),
    /// Untyped passthrough value (`serde_json::Value`).
    Opaque,
    /// A nested model, hydrated recursively.
    Model(Schema),
    /// An ordered sequence of nested models.
    ModelList(Schema),
    /// An ordered sequence of scalars.
    ScalarList(ScalarType),
}

/// The scalar types a field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Integer,
    Float,
    Boolean,
}

impl FieldKind {
    /// Kind of a `Vec<T>` whose element kind is `inner`.
    ///
    /// # Panics
    ///
    /// On a list of lists. Field tables are constants, so a model declaring such a field
    /// fails to compile.
    pub const fn list_of(inner: FieldKind) -> FieldKind {
        match inner {
            FieldKind::Model(schema) => FieldKind::ModelList(schema),
            FieldKind::Scalar(scalar) => FieldKind::ScalarList(scalar),
            FieldKind::Opaque => FieldKind::Opaque,
            FieldKind::ModelList(_) | FieldKind::ScalarList(_) => {
                panic!("nested lists are not supported as model fields")
            }
        }
    }

    /// Returns the nested schema for model and model-list fields.
    pub fn schema(&self) -> Option<Schema> {
        match self {
            FieldKind::Model(schema) | FieldKind::ModelList(schema) => Some(*schema),
            _ => None,
        }
    }
}

/// How a serialized model represents fields that hold no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// Absent fields are dropped from the output (partial-update semantics).
    #[default]
    Omit,
    /// Every declared wire key is written; absent fields become JSON `null`.
    Explicit,
}

/// Errors raised while hydrating a model from JSON.
///
/// These are never folded into [`ApiError::Operation`](crate::api::ApiError::Operation);
/// a controller surfaces them as [`ApiError::Hydration`](crate::api::ApiError::Hydration).
#[derive(Error, Debug)]
pub enum HydrationError {
    /// A strict field's wire key was absent.
    #[error("{model}: required field `{path}` is missing")]
    MissingField {
        /// Model that declares the field.
        model: &'static str,
        /// Local name of the missing field.
        field: &'static str,
        /// Dotted wire path from the payload root (e.g. `_links._self.href`).
        path: String,
    },

    /// The payload was not a JSON object.
    #[error("{model}: expected a JSON object, found {found}")]
    NotAnObject {
        /// Model being hydrated.
        model: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A field held a value of the wrong JSON type.
    #[error("{model}: invalid field value: {source}")]
    InvalidValue {
        /// Model being hydrated.
        model: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// A typed Clumio payload backed by a declarative field table.
///
/// Implemented by `clumio_model!`; the provided methods are the single generic hydrator and
/// serializer shared by every model.
pub trait Model: Serialize + DeserializeOwned + Default + Sized {
    /// Type name, used in error messages.
    const NAME: &'static str;

    /// Field-mapping table, in declaration order.
    const FIELDS: &'static [Field];

    /// Returns this model's schema.
    fn schema() -> Schema {
        Schema {
            name: Self::NAME,
            fields: Self::FIELDS,
        }
    }

    /// Hydrates a model from a parsed JSON object.
    ///
    /// Unknown keys are ignored. Strict fields (non-`Option` types), including those of
    /// nested models and list elements, must be present.
    ///
    /// # Errors
    ///
    /// - [`HydrationError::MissingField`] when a strict wire key is absent
    /// - [`HydrationError::InvalidValue`] when a present value has the wrong JSON type
    fn from_map(map: &Map<String, Value>) -> Result<Self, HydrationError> {
        check_required(Self::schema(), map, "")?;
        serde_json::from_value(Value::Object(map.clone())).map_err(|source| {
            HydrationError::InvalidValue {
                model: Self::NAME,
                source,
            }
        })
    }

    /// Hydrates a model from an owned JSON value, which must be an object.
    fn from_value(value: Value) -> Result<Self, HydrationError> {
        match value {
            Value::Object(map) => {
                check_required(Self::schema(), &map, "")?;
                serde_json::from_value(Value::Object(map)).map_err(|source| {
                    HydrationError::InvalidValue {
                        model: Self::NAME,
                        source,
                    }
                })
            }
            other => Err(HydrationError::NotAnObject {
                model: Self::NAME,
                found: json_type_name(&other),
            }),
        }
    }

    /// Hydrates an optional value: absent or `null` yields `Ok(None)`.
    ///
    /// An empty object is *not* treated as absent; it hydrates to a model whose optional
    /// fields are all `None`.
    fn hydrate(value: Option<&Value>) -> Result<Option<Self>, HydrationError> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Self::from_map(map).map(Some),
            Some(other) => Err(HydrationError::NotAnObject {
                model: Self::NAME,
                found: json_type_name(other),
            }),
        }
    }

    /// Serializes to a wire-keyed map, dropping absent fields.
    fn to_wire(&self) -> Map<String, Value> {
        self.to_wire_with(NullPolicy::Omit)
    }

    /// Serializes to a wire-keyed map using the given null policy.
    ///
    /// The policy applies to this model's own fields; nested models are always sparse.
    fn to_wire_with(&self, policy: NullPolicy) -> Map<String, Value> {
        let mut map = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        if policy == NullPolicy::Explicit {
            for field in Self::FIELDS {
                map.entry(field.wire).or_insert(Value::Null);
            }
        }
        map
    }
}

/// A model that can be sent as a JSON request body.
///
/// The null policy is chosen per request type: `PUT` bodies that replace a resource use
/// [`NullPolicy::Explicit`] so omitted optional fields are cleared, `POST`/`PATCH` bodies use
/// the sparse default.
pub trait RequestBody: Model {
    /// Null policy applied when this body is serialized.
    const NULL_POLICY: NullPolicy = NullPolicy::Omit;

    /// Serializes the body with its own null policy.
    fn to_body(&self) -> Value {
        Value::Object(self.to_wire_with(Self::NULL_POLICY))
    }
}

/// Walks `map` against `schema`, failing on the first absent strict field.
fn check_required(
    schema: Schema,
    map: &Map<String, Value>,
    path: &str,
) -> Result<(), HydrationError> {
    for field in schema.fields {
        let at = if path.is_empty() {
            field.wire.to_string()
        } else {
            format!("{}.{}", path, field.wire)
        };

        match (map.get(field.wire), field.kind) {
            (None, _) if field.required => {
                return Err(HydrationError::MissingField {
                    model: schema.name,
                    field: field.name,
                    path: at,
                });
            }
            (Some(Value::Object(inner)), FieldKind::Model(nested)) => {
                check_required(nested, inner, &at)?;
            }
            (Some(Value::Array(items)), FieldKind::ModelList(nested)) => {
                for (index, item) in items.iter().enumerate() {
                    if let Value::Object(inner) = item {
                        check_required(nested, inner, &format!("{}[{}]", at, index))?;
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Human-readable JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    clumio_model! {
        struct Leaf {
            code: String => "code",
            note: Option<String> => "note",
        }
    }

    clumio_model! {
        struct Branch {
            id: Option<String> => "id",
            read_leaf: Option<Leaf> => "read-leaf",
            leaves: Option<Vec<Leaf>> => "_leaves",
            tags: Option<Vec<String>> => "tags",
            size: Option<i64> => "size",
            extra: Option<Value> => "extra",
        }
    }

    impl RequestBody for Branch {}

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_field_table_tracks_kinds() {
        let schema = Branch::schema();
        assert_eq!(schema.name, "Branch");
        assert_eq!(schema.fields.len(), 6);

        let leaf = schema.field("read_leaf").unwrap();
        assert_eq!(leaf.wire, "read-leaf");
        assert!(!leaf.required);
        assert_eq!(leaf.kind, FieldKind::Model(Leaf::schema()));

        assert_eq!(
            schema.wire_field("_leaves").unwrap().kind,
            FieldKind::ModelList(Leaf::schema())
        );
        assert_eq!(
            schema.field("tags").unwrap().kind,
            FieldKind::ScalarList(ScalarType::String)
        );
        assert_eq!(schema.field("extra").unwrap().kind, FieldKind::Opaque);
        assert!(Leaf::schema().field("code").unwrap().required);
    }

    #[test]
    fn test_empty_map_is_lenient() {
        let branch = Branch::from_map(&Map::new()).unwrap();
        assert_eq!(branch, Branch::default());
        assert!(branch.id.is_none());
        assert!(branch.read_leaf.is_none());
    }

    #[test]
    fn test_absent_or_null_is_sentinel() {
        assert!(Branch::hydrate(None).unwrap().is_none());
        assert!(Branch::hydrate(Some(&Value::Null)).unwrap().is_none());
        assert!(Branch::hydrate(Some(&json!({}))).unwrap().is_some());
    }

    #[test]
    fn test_missing_nested_strict_field_reports_path() {
        let err = Branch::from_value(json!({"_leaves": [{"code": "a"}, {"note": "b"}]}))
            .unwrap_err();
        match err {
            HydrationError::MissingField { model, field, path } => {
                assert_eq!(model, "Leaf");
                assert_eq!(field, "code");
                assert_eq!(path, "_leaves[1].code");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_type_is_not_coerced() {
        let err = Branch::from_value(json!({"size": "12"})).unwrap_err();
        assert!(matches!(err, HydrationError::InvalidValue { model: "Branch", .. }));
    }

    #[test]
    fn test_not_an_object() {
        let err = Branch::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, HydrationError::NotAnObject { found: "array", .. }));
    }

    #[test]
    fn test_list_order_and_unknown_keys() {
        let with_extra = object(json!({
            "_leaves": [{"code": "c"}, {"code": "a"}, {"code": "b"}],
            "unexpected": {"deep": true},
            "id": "b1"
        }));
        let mut without_extra = with_extra.clone();
        without_extra.remove("unexpected");

        let a = Branch::from_map(&with_extra).unwrap();
        let b = Branch::from_map(&without_extra).unwrap();
        assert_eq!(a, b);

        let codes: Vec<_> = a.leaves.unwrap().into_iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sparse_serialization_round_trips() {
        let branch = Branch {
            id: Some("b1".to_string()),
            read_leaf: Some(Leaf {
                code: "x".to_string(),
                note: None,
            }),
            tags: Some(vec!["t1".to_string(), "t2".to_string()]),
            ..Default::default()
        };

        let wire = branch.to_wire();
        assert_eq!(
            Value::Object(wire.clone()),
            json!({"id": "b1", "read-leaf": {"code": "x"}, "tags": ["t1", "t2"]})
        );
        assert_eq!(Branch::from_map(&wire).unwrap(), branch);
    }

    #[test]
    fn test_explicit_nulls() {
        let branch = Branch {
            id: Some("b1".to_string()),
            ..Default::default()
        };
        let wire = branch.to_wire_with(NullPolicy::Explicit);
        assert_eq!(wire.len(), 6);
        assert_eq!(wire["id"], json!("b1"));
        assert_eq!(wire["read-leaf"], Value::Null);
        assert_eq!(wire["extra"], Value::Null);
        assert_eq!(branch.to_body(), json!({"id": "b1"}));
    }
}
