//! Declarative macros generating the flat record types.
//!
//! Every string/boolean record follows the same shape: `Option` storage
//! keyed by the vendor's wire name, a getter that reads the default when
//! unset, a setter that overwrites unconditionally, and a [`Record`]
//! implementation driven by a static field table.
//!
//! # Usage
//! ```ignore
//! record! {
//!     /// One discovered network.
//!     pub struct WlanScanEntry => WlanScan {
//!         /// Network name.
//!         ssid / set_ssid: text = "wlanSSID", "SSID";
//!         password / set_password: text = "password", "Password", secret;
//!         hidden / set_hidden: flag = "isHidden", "Hidden";
//!     }
//! }
//! ```
//!
//! [`Record`]: crate::record::Record

/// Storage type for a field shape.
macro_rules! record_storage {
    (text) => { String };
    (flag) => { bool };
}

/// [`FieldType`](crate::field::FieldType) for a field shape.
macro_rules! record_field_type {
    (text) => { $crate::field::FieldType::Text };
    (flag) => { $crate::field::FieldType::Flag };
}

/// Secret marker; absent means the field is displayed as-is.
macro_rules! record_secret {
    () => { false };
    (secret) => { true };
}

/// Wrap a getter result into a [`FieldValue`](crate::field::FieldValue).
macro_rules! record_read {
    (text, $value:expr) => { $crate::field::FieldValue::Text($value.to_owned()) };
    (flag, $value:expr) => { $crate::field::FieldValue::Flag($value) };
}

/// Unwrap a [`FieldValue`](crate::field::FieldValue) into setter input.
macro_rules! record_take {
    (text, $value:ident, $wire:literal) => { $value.into_text($wire) };
    (flag, $value:ident, $wire:literal) => { $value.into_flag($wire) };
}

/// Getter/setter pair for one field.
macro_rules! record_accessors {
    (text, $field:ident, $setter:ident, $wire:literal, $(#[$doc:meta])*) => {
        $(#[$doc])*
        pub fn $field(&self) -> &str {
            self.$field.as_deref().unwrap_or_default()
        }

        #[doc = concat!("Overwrite `", $wire, "`.")]
        pub fn $setter(&mut self, value: impl Into<String>) {
            self.$field = Some(value.into());
        }
    };
    (flag, $field:ident, $setter:ident, $wire:literal, $(#[$doc:meta])*) => {
        $(#[$doc])*
        pub fn $field(&self) -> bool {
            self.$field.unwrap_or_default()
        }

        #[doc = concat!("Overwrite `", $wire, "`.")]
        pub fn $setter(&mut self, value: bool) {
            self.$field = Some(value);
        }
    };
}

/// Define a flat record type with accessors and its [`Record`] impl.
///
/// [`Record`]: crate::record::Record
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $kind:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident : $ty:ident = $wire:literal, $label:literal $(, $secret:ident)?;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: Option<record_storage!($ty)>,
            )+
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                record_accessors!($ty, $field, $setter, $wire, $(#[$fmeta])*);
            )+
        }

        impl $crate::record::Record for $name {
            const KIND: $crate::kind::RecordKind = $crate::kind::RecordKind::$kind;

            fn fields() -> &'static [$crate::field::FieldSpec] {
                const FIELDS: &[$crate::field::FieldSpec] = &[
                    $(
                        $crate::field::FieldSpec {
                            accessor: stringify!($field),
                            wire: $wire,
                            label: $label,
                            field_type: record_field_type!($ty),
                            secret: record_secret!($($secret)?),
                        },
                    )+
                ];
                FIELDS
            }

            fn field(&self, wire: &str) -> Option<$crate::field::FieldValue> {
                match wire {
                    $( $wire => Some(record_read!($ty, self.$field())), )+
                    _ => None,
                }
            }

            fn set_field(
                &mut self,
                wire: &str,
                value: $crate::field::FieldValue,
            ) -> Result<(), $crate::error::ModelError> {
                match wire {
                    $( $wire => self.$setter(record_take!($ty, value, $wire)?), )+
                    _ => {
                        return Err($crate::error::ModelError::UnknownField {
                            kind: Self::KIND,
                            field: wire.to_owned(),
                        });
                    }
                }
                ::tracing::trace!(kind = %Self::KIND, field = wire, "field updated");
                Ok(())
            }
        }
    };
}
