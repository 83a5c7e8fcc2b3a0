// ── The Record trait ──
//
// Dynamic, by-name access shared by every record type. The typed accessors
// on each struct remain the primary interface; this trait exists for
// consumers that only know a field's name at runtime (CLI assignments,
// generic renderers).

use std::fmt::Debug;

use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ModelError;
use crate::field::{FieldSpec, FieldValue};
use crate::kind::RecordKind;

pub trait Record:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Debug + Send + Sync + 'static
{
    const KIND: RecordKind;

    /// Field table in declaration order.
    fn fields() -> &'static [FieldSpec];

    /// Read a field by wire name. `None` if the record has no such field.
    fn field(&self, wire: &str) -> Option<FieldValue>;

    /// Overwrite a field by wire name.
    fn set_field(&mut self, wire: &str, value: FieldValue) -> Result<(), ModelError>;

    /// Look up a field by wire or accessor name.
    fn spec(name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.matches(name))
    }

    /// Parse `raw` for the named field and store it.
    fn assign(&mut self, name: &str, raw: &str) -> Result<(), ModelError> {
        let spec = Self::spec(name).ok_or_else(|| ModelError::UnknownField {
            kind: Self::KIND,
            field: name.to_owned(),
        })?;
        let value = spec.field_type.parse(spec.wire, raw)?;
        self.set_field(spec.wire, value)
    }

    /// Every field's current reading, keyed by wire name, unset fields
    /// included at their default.
    fn snapshot(&self) -> IndexMap<&'static str, FieldValue> {
        Self::fields()
            .iter()
            .filter_map(|spec| self.field(spec.wire).map(|v| (spec.wire, v)))
            .collect()
    }
}
