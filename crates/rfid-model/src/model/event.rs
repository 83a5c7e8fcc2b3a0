// ── Status event records ──

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ModelError;
use crate::field::{FieldSpec, FieldType, FieldValue};
use crate::kind::RecordKind;
use crate::record::Record;

record! {
    /// Connectivity change reported for one IoT endpoint.
    pub struct IotStatusEvent => IotStatusEvent {
        cause / set_cause: text = "Cause", "Cause";
        endpoint_type / set_endpoint_type: text = "EpType", "Endpoint Type";
        endpoint_name / set_endpoint_name: text = "EpName", "Endpoint Name";
        status / set_status: text = "Status", "Status";
        reason / set_reason: text = "Reason", "Reason";
    }
}

// ── Connected interface ──────────────────────────────────────────────

/// Transport the reader is currently attached through.
///
/// Serialized as the native integer code; decoding also accepts the
/// lowercase variant name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ConnectedInterfaceType {
    #[default]
    Unknown,
    Bluetooth,
    Usb,
    Wifi,
}

impl ConnectedInterfaceType {
    /// Native code used by the reader SDK.
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Bluetooth => 1,
            Self::Usb => 2,
            Self::Wifi => 3,
        }
    }
}

impl TryFrom<i32> for ConnectedInterfaceType {
    type Error = ModelError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Bluetooth),
            2 => Ok(Self::Usb),
            3 => Ok(Self::Wifi),
            other => Err(ModelError::UnknownInterfaceCode(other)),
        }
    }
}

impl Serialize for ConnectedInterfaceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for ConnectedInterfaceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(i32),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Self::try_from(code).map_err(serde::de::Error::custom),
            Raw::Name(name) => name
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("unknown interface type '{name}'"))),
        }
    }
}

const INTERFACE_WIRE: &str = "Conneted_Interface_Type";

/// Reports which transport interface the reader switched to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedInterfaceEvent {
    // Vendor spelling.
    #[serde(
        rename = "Conneted_Interface_Type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    interface_type: Option<ConnectedInterfaceType>,
}

impl ConnectedInterfaceEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reported interface; [`ConnectedInterfaceType::Unknown`] when unset.
    pub fn interface_type(&self) -> ConnectedInterfaceType {
        self.interface_type.unwrap_or_default()
    }

    /// Overwrite `Conneted_Interface_Type`.
    pub fn set_interface_type(&mut self, value: ConnectedInterfaceType) {
        self.interface_type = Some(value);
    }
}

impl Record for ConnectedInterfaceEvent {
    const KIND: RecordKind = RecordKind::ConnectedInterfaceEvent;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec {
            accessor: "interface_type",
            wire: INTERFACE_WIRE,
            label: "Interface Type",
            field_type: FieldType::Interface,
            secret: false,
        }];
        FIELDS
    }

    fn field(&self, wire: &str) -> Option<FieldValue> {
        (wire == INTERFACE_WIRE).then(|| FieldValue::Interface(self.interface_type()))
    }

    fn set_field(&mut self, wire: &str, value: FieldValue) -> Result<(), ModelError> {
        if wire != INTERFACE_WIRE {
            return Err(ModelError::UnknownField {
                kind: Self::KIND,
                field: wire.to_owned(),
            });
        }
        self.set_interface_type(value.into_interface(INTERFACE_WIRE)?);
        tracing::trace!(kind = %Self::KIND, field = wire, "field updated");
        Ok(())
    }
}
