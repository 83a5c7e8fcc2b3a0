//! Typed configuration and status records for RFID reader SDK runtimes.
//!
//! Every record in this crate is a flat property bag mirroring one data
//! object exchanged with a reader SDK: endpoint configuration, Wi-Fi profile
//! provisioning, installed certificates, scan results and status events.
//!
//! - **Typed accessors**: each field has a getter that reads its default
//!   (`""`, `false`, or the zero variant) when unset, and a setter that
//!   overwrites unconditionally. Accessors never fail.
//!
//! - **[`Record`]**: the dynamic view shared by every type: a static field
//!   table ([`FieldSpec`]) keyed by the vendor's wire names, plus by-name
//!   reads and writes through [`FieldValue`].
//!
//! - **[`AnyRecord`] / [`RecordKind`]**: the closed set of record kinds, for
//!   consumers that pick the kind at runtime.
//!
//! - **[`codec`]**: JSON, YAML and TOML documents holding one or many
//!   records, marshaled with the vendor's field names.

#[macro_use]
mod macros;

pub mod codec;
pub mod error;
pub mod field;
pub mod kind;
pub mod model;
pub mod record;

// ── Primary re-exports ──────────────────────────────────────────────
pub use codec::DocumentFormat;
pub use error::ModelError;
pub use field::{FieldSpec, FieldType, FieldValue};
pub use kind::{AnyRecord, RecordKind};
pub use record::Record;

pub use model::{
    ActiveEndpoints, AddProfileConfig, CertificateEntry, ConnectedInterfaceEvent,
    ConnectedInterfaceType, EndpointConfig, EndpointListEntry, IotStatusEvent, MacAddress,
    StatusMap, StatusValue, WifiStatusInfo, WlanCertificates, WlanScanEntry,
};
