//
//  clumio-sdk
//  model/wire.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Compile-time classification of model field types.
//!
//! A field's [`FieldKind`] and strictness are derived from its Rust type through the [`Wire`]
//! trait, so a model declaration only has to name the type and the wire key.

use serde_json::Value;

use super::{FieldKind, ScalarType};

/// A type that can appear as a model field.
pub trait Wire {
    /// Semantic kind recorded in the field table.
    const KIND: FieldKind;

    /// Whether the wire key must be present on hydration.
    const REQUIRED: bool = true;

    /// Whether the value should be left out of a sparse serialization.
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! scalar_wire {
    ($($ty:ty => $scalar:ident),* $(,)?) => {
        $(
            impl Wire for $ty {
                const KIND: FieldKind = FieldKind::Scalar(ScalarType::$scalar);
            }
        )*
    };
}

scalar_wire! {
    String => String,
    bool => Boolean,
    i32 => Integer,
    i64 => Integer,
    u32 => Integer,
    u64 => Integer,
    f64 => Float,
}

impl Wire for Value {
    const KIND: FieldKind = FieldKind::Opaque;

    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: Wire> Wire for Option<T> {
    const KIND: FieldKind = T::KIND;
    const REQUIRED: bool = false;

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: Wire> Wire for Vec<T> {
    const KIND: FieldKind = FieldKind::list_of(T::KIND);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_is_lenient() {
        assert!(<String as Wire>::REQUIRED);
        assert!(!<Option<String> as Wire>::REQUIRED);
        assert!(None::<i64>.is_absent());
        assert!(!Some(0_i64).is_absent());
    }

    #[test]
    fn test_list_kinds() {
        assert_eq!(
            <Vec<String> as Wire>::KIND,
            FieldKind::ScalarList(ScalarType::String)
        );
        assert_eq!(<Option<Vec<f64>> as Wire>::KIND, FieldKind::ScalarList(ScalarType::Float));
        assert_eq!(<Vec<Value> as Wire>::KIND, FieldKind::Opaque);
        assert!(Value::Null.is_absent());
    }

    #[test]
    #[should_panic(expected = "nested lists are not supported")]
    fn test_nested_list_is_rejected() {
        FieldKind::list_of(<Vec<String> as Wire>::KIND);
    }
}
