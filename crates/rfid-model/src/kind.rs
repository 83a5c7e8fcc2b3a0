// ── Record kinds ──
//
// `RecordKind` names every record type in the catalog; `AnyRecord` holds a
// value of any of them. Both are closed sets generated from one list so
// they cannot drift apart.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ModelError;
use crate::field::{FieldSpec, FieldValue};
use crate::model::{
    ActiveEndpoints, AddProfileConfig, CertificateEntry, ConnectedInterfaceEvent,
    EndpointConfig, EndpointListEntry, IotStatusEvent, WifiStatusInfo, WlanCertificates,
    WlanScanEntry,
};
use crate::record::Record;

/// Identifier of a record type, spelled in kebab-case (`endpoint-config`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    EndpointConfig,
    EndpointList,
    AddProfile,
    Certificate,
    ActiveEndpoints,
    WlanScan,
    WifiStatus,
    IotStatusEvent,
    WlanCertificates,
    ConnectedInterfaceEvent,
}

impl RecordKind {
    /// Resolve a kind from user input, mapping failures to [`ModelError`].
    pub fn lookup(name: &str) -> Result<Self, ModelError> {
        name.parse()
            .map_err(|_| ModelError::UnknownKind(name.to_owned()))
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::EndpointConfig => "Remote management/control/data endpoint configuration",
            Self::EndpointList => "Entry of the configured endpoint list",
            Self::AddProfile => "Wi-Fi profile to provision",
            Self::Certificate => "Metadata of one installed certificate",
            Self::ActiveEndpoints => "Active and backup endpoint per channel",
            Self::WlanScan => "Network discovered by a Wi-Fi scan",
            Self::WifiStatus => "Generic Wi-Fi status key/value bag",
            Self::IotStatusEvent => "Endpoint connectivity event",
            Self::WlanCertificates => "WLAN certificate bundle reference",
            Self::ConnectedInterfaceEvent => "Active transport interface report",
        }
    }

    /// Field table of this kind.
    pub fn fields(self) -> &'static [FieldSpec] {
        AnyRecord::fields_of(self)
    }

    /// Look up a field by wire or accessor name.
    pub fn spec(self, name: &str) -> Result<&'static FieldSpec, ModelError> {
        self.fields()
            .iter()
            .find(|f| f.matches(name))
            .ok_or_else(|| ModelError::UnknownField {
                kind: self,
                field: name.to_owned(),
            })
    }
}

macro_rules! any_record {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        /// A record of any kind.
        ///
        /// Serializes exactly like the wrapped record.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum AnyRecord {
            $( $variant($ty), )+
        }

        impl AnyRecord {
            pub fn kind(&self) -> RecordKind {
                match self {
                    $( Self::$variant(_) => <$ty as Record>::KIND, )+
                }
            }

            /// An all-unset record of `kind`.
            pub fn default_for(kind: RecordKind) -> Self {
                match kind {
                    $( RecordKind::$variant => Self::$variant(<$ty>::default()), )+
                }
            }

            pub fn fields_of(kind: RecordKind) -> &'static [FieldSpec] {
                match kind {
                    $( RecordKind::$variant => <$ty as Record>::fields(), )+
                }
            }

            /// Decode one record of `kind` from a JSON value.
            pub fn from_value(
                kind: RecordKind,
                value: serde_json::Value,
            ) -> Result<Self, serde_json::Error> {
                match kind {
                    $( RecordKind::$variant => serde_json::from_value::<$ty>(value).map(Self::$variant), )+
                }
            }

            /// Read a field by wire name.
            pub fn field(&self, wire: &str) -> Option<FieldValue> {
                match self {
                    $( Self::$variant(r) => r.field(wire), )+
                }
            }

            /// Overwrite a field by wire name.
            pub fn set_field(&mut self, wire: &str, value: FieldValue) -> Result<(), ModelError> {
                match self {
                    $( Self::$variant(r) => r.set_field(wire, value), )+
                }
            }

            /// Parse `raw` for the field named by wire or accessor name and store it.
            pub fn assign(&mut self, name: &str, raw: &str) -> Result<(), ModelError> {
                match self {
                    $( Self::$variant(r) => r.assign(name, raw), )+
                }
            }

            /// Every field's current reading, keyed by wire name.
            pub fn snapshot(&self) -> IndexMap<&'static str, FieldValue> {
                match self {
                    $( Self::$variant(r) => r.snapshot(), )+
                }
            }
        }

        $(
            impl From<$ty> for AnyRecord {
                fn from(record: $ty) -> Self {
                    Self::$variant(record)
                }
            }
        )+
    };
}

any_record! {
    EndpointConfig(EndpointConfig),
    EndpointList(EndpointListEntry),
    AddProfile(AddProfileConfig),
    Certificate(CertificateEntry),
    ActiveEndpoints(ActiveEndpoints),
    WlanScan(WlanScanEntry),
    WifiStatus(WifiStatusInfo),
    IotStatusEvent(IotStatusEvent),
    WlanCertificates(WlanCertificates),
    ConnectedInterfaceEvent(ConnectedInterfaceEvent),
}

impl AnyRecord {
    pub fn fields(&self) -> &'static [FieldSpec] {
        Self::fields_of(self.kind())
    }

    /// Value of the first field, used as the record's short identifier.
    pub fn headline(&self) -> String {
        self.fields()
            .first()
            .and_then(|spec| self.field(spec.wire))
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kinds_parse_from_kebab_case() {
        assert_eq!(
            RecordKind::lookup("endpoint-config").unwrap(),
            RecordKind::EndpointConfig
        );
        assert_eq!(
            RecordKind::lookup("IOT-STATUS-EVENT").unwrap(),
            RecordKind::IotStatusEvent
        );
        assert!(matches!(
            RecordKind::lookup("tag-report"),
            Err(ModelError::UnknownKind(_))
        ));
    }

    #[test]
    fn every_kind_round_trips_through_its_name() {
        for kind in RecordKind::iter() {
            assert_eq!(RecordKind::lookup(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn default_record_matches_kind() {
        for kind in RecordKind::iter() {
            let record = AnyRecord::default_for(kind);
            assert_eq!(record.kind(), kind);
            assert!(!record.fields().is_empty(), "{kind} has no fields");
            assert!(record.snapshot().values().all(FieldValue::is_default));
        }
    }

    #[test]
    fn wire_names_are_unique_within_a_kind() {
        for kind in RecordKind::iter() {
            let mut wires: Vec<_> = kind.fields().iter().map(|f| f.wire).collect();
            let total = wires.len();
            wires.sort_unstable();
            wires.dedup();
            assert_eq!(wires.len(), total, "{kind} repeats a wire name");
        }
    }

    #[test]
    fn assign_dispatches_to_the_wrapped_record() {
        let mut record = AnyRecord::default_for(RecordKind::WlanScan);
        record.assign("ssid", "warehouse").unwrap();
        let AnyRecord::WlanScan(entry) = &record else {
            panic!("expected a scan entry");
        };
        assert_eq!(entry.ssid(), "warehouse");
        assert_eq!(record.headline(), "warehouse");
    }

    #[test]
    fn spec_lookup_reports_unknown_field() {
        let err = RecordKind::Certificate.spec("certOwner").unwrap_err();
        assert_eq!(err.to_string(), "certificate records have no field 'certOwner'");
    }

    #[test]
    fn serializes_like_the_wrapped_record() {
        let mut cert = CertificateEntry::new();
        cert.set_name("root.pem");
        let any = AnyRecord::from(cert.clone());
        assert_eq!(
            serde_json::to_value(&any).unwrap(),
            serde_json::to_value(&cert).unwrap()
        );
    }
}
