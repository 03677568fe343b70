//
//  clumio-sdk
//  model/macros.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

/// Declares a Clumio model.
///
/// Each field is written as `name: Type => "wire-key"`. The macro emits:
///
/// - the struct, deriving `Debug`, `Clone`, `Default`, `PartialEq` and serde's traits
/// - `#[serde(rename = "wire-key", default)]` on every field, skipping absent values on output
/// - a [`Model`](crate::model::Model) impl whose `FIELDS` table mirrors the declaration
/// - a [`Wire`](crate::model::Wire) impl so the model can be nested in other models
///
/// `Option<T>` fields are lenient, bare `T` fields are strict.
///
/// ```rust,ignore
/// clumio_model! {
///     /// A HATEOAS link.
///     pub struct HateoasLink {
///         pub href: String => "href",
///         pub templated: Option<bool> => "templated",
///         pub method: Option<String> => "type",
///     }
/// }
/// ```
macro_rules! clumio_model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(
                    rename = $wire,
                    default,
                    skip_serializing_if = "crate::model::Wire::is_absent"
                )]
                $fvis $field: $ty,
            )*
        }

        impl $crate::model::Model for $name {
            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [$crate::model::Field] = &[
                $(
                    $crate::model::Field {
                        name: stringify!($field),
                        wire: $wire,
                        kind: <$ty as $crate::model::Wire>::KIND,
                        required: <$ty as $crate::model::Wire>::REQUIRED,
                    },
                )*
            ];
        }

        impl $crate::model::Wire for $name {
            const KIND: $crate::model::FieldKind =
                $crate::model::FieldKind::Model($crate::model::Schema {
                    name: stringify!($name),
                    fields: <$name as $crate::model::Model>::FIELDS,
                });
        }
    };
}
