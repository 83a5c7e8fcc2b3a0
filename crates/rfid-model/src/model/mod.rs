// ── Record catalog ──
//
// Every type in this module mirrors one data object of the reader SDK.
// The records are independent leaves: none references another, and none
// validates its fields. Wire names are the vendor's instance-variable
// names with any `m_` prefix stripped.

pub mod certificate;
pub mod endpoint;
pub mod event;
pub mod mac;
pub mod wlan;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use rfid_model::model::*` gives you everything.

// Endpoints
pub use endpoint::{ActiveEndpoints, EndpointConfig, EndpointListEntry};

// Wi-Fi / WLAN
pub use wlan::{
    AddProfileConfig, StatusMap, StatusValue, WifiStatusInfo, WlanCertificates, WlanScanEntry,
};

// Certificates
pub use certificate::CertificateEntry;

// Events
pub use event::{ConnectedInterfaceEvent, ConnectedInterfaceType, IotStatusEvent};

// Identity helpers
pub use mac::MacAddress;
