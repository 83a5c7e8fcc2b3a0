// ── Wi-Fi / WLAN records ──

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::mac::MacAddress;
use crate::error::ModelError;
use crate::field::{FieldSpec, FieldType, FieldValue};
use crate::kind::RecordKind;
use crate::record::Record;

record! {
    /// Wi-Fi profile to provision on the reader.
    ///
    /// Certificate and key fields hold references to files already installed
    /// on the reader, not the PEM contents.
    pub struct AddProfileConfig => AddProfile {
        ssid / set_ssid: text = "SSID", "SSID";
        protocol / set_protocol: text = "protocol", "Protocol";
        /// EAP method, for enterprise networks.
        eap / set_eap: text = "EAP", "EAP";
        ca_certificate / set_ca_certificate: text = "CA_Certificate", "CA Certificate";
        identity / set_identity: text = "identity", "Identity";
        anonymous_identity / set_anonymous_identity: text = "anonimous_Identity", "Anonymous Identity";
        private_key / set_private_key: text = "private_Key", "Private Key";
        password / set_password: text = "password", "Password", secret;
        private_key_password / set_private_key_password: text = "private_Password", "Private Key Password", secret;
        client_certificate / set_client_certificate: text = "client_Certificate", "Client Certificate";
        hidden_ssid / set_hidden_ssid: flag = "isHidden", "Hidden SSID";
    }
}

record! {
    /// One network seen by the reader's Wi-Fi scan.
    pub struct WlanScanEntry => WlanScan {
        ssid / set_ssid: text = "wlanSSID", "SSID";
        protocol / set_protocol: text = "wlanProtocol", "Protocol";
        /// Signal level, verbatim from the reader.
        level / set_level: text = "wlanLevel", "Level";
        mac_address / set_mac_address: text = "wlanMacAddress", "MAC Address";
    }
}

impl WlanScanEntry {
    /// The MAC address parsed into octets, or `None` if unset or malformed.
    ///
    /// The stored value is left as the reader reported it.
    pub fn normalized_mac(&self) -> Option<MacAddress> {
        self.mac_address.as_deref().and_then(MacAddress::parse)
    }
}

record! {
    /// Certificate bundle installed for WLAN authentication.
    pub struct WlanCertificates => WlanCertificates {
        /// File name or path of the bundle.
        file / set_file: text = "wlanFile", "File";
    }
}

// ── Wi-Fi status ─────────────────────────────────────────────────────

/// One untyped status value.
///
/// Integers decode as `Integer` when they fit an `i64` and as `Unsigned`
/// above `i64::MAX`, so counters never round through `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusValue {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for StatusValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for StatusValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u64> for StatusValue {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::Unsigned(n), Self::Integer)
    }
}

impl From<f64> for StatusValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<String> for StatusValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for StatusValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// Status entries in the order the reader reported them.
pub type StatusMap = IndexMap<String, StatusValue>;

const STATUS_WIRE: &str = "statusDictionary";

/// Generic Wi-Fi status bag. Keys and value kinds are whatever the reader
/// firmware reports; nothing here interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WifiStatusInfo {
    #[serde(
        rename = "statusDictionary",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    status: Option<StatusMap>,
}

impl WifiStatusInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries; empty when unset.
    pub fn status(&self) -> &StatusMap {
        static EMPTY: std::sync::LazyLock<StatusMap> = std::sync::LazyLock::new(StatusMap::new);
        self.status.as_ref().unwrap_or(&EMPTY)
    }

    /// Overwrite `statusDictionary`.
    pub fn set_status(&mut self, entries: StatusMap) {
        self.status = Some(entries);
    }

    pub fn get(&self, key: &str) -> Option<&StatusValue> {
        self.status.as_ref().and_then(|m| m.get(key))
    }

    /// Insert or replace one entry, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<StatusValue>,
    ) -> Option<StatusValue> {
        self.status
            .get_or_insert_with(StatusMap::new)
            .insert(key.into(), value.into())
    }

    /// Remove one entry, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<StatusValue> {
        self.status.as_mut().and_then(|m| m.shift_remove(key))
    }
}

impl Record for WifiStatusInfo {
    const KIND: RecordKind = RecordKind::WifiStatus;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec {
            accessor: "status",
            wire: STATUS_WIRE,
            label: "Status",
            field_type: FieldType::Entries,
            secret: false,
        }];
        FIELDS
    }

    fn field(&self, wire: &str) -> Option<FieldValue> {
        (wire == STATUS_WIRE).then(|| FieldValue::Entries(self.status().clone()))
    }

    fn set_field(&mut self, wire: &str, value: FieldValue) -> Result<(), ModelError> {
        if wire != STATUS_WIRE {
            return Err(ModelError::UnknownField {
                kind: Self::KIND,
                field: wire.to_owned(),
            });
        }
        self.set_status(value.into_entries(STATUS_WIRE)?);
        tracing::trace!(kind = %Self::KIND, field = wire, "field updated");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn profile_round_trips_every_field() {
        let mut p = AddProfileConfig::new();
        p.set_ssid("corp");
        p.set_protocol("WPA2");
        p.set_eap("PEAP");
        p.set_ca_certificate("ca.pem");
        p.set_identity("reader01");
        p.set_anonymous_identity("anon");
        p.set_private_key("reader.key");
        p.set_password("hunter2");
        p.set_private_key_password("keypass");
        p.set_client_certificate("reader.pem");
        p.set_hidden_ssid(true);

        assert_eq!(p.ssid(), "corp");
        assert_eq!(p.protocol(), "WPA2");
        assert_eq!(p.eap(), "PEAP");
        assert_eq!(p.ca_certificate(), "ca.pem");
        assert_eq!(p.identity(), "reader01");
        assert_eq!(p.anonymous_identity(), "anon");
        assert_eq!(p.private_key(), "reader.key");
        assert_eq!(p.password(), "hunter2");
        assert_eq!(p.private_key_password(), "keypass");
        assert_eq!(p.client_certificate(), "reader.pem");
        assert!(p.hidden_ssid());
    }

    #[test]
    fn hidden_ssid_defaults_to_false() {
        assert!(!AddProfileConfig::new().hidden_ssid());
    }

    #[test]
    fn profile_secrets_are_marked() {
        let secrets: Vec<_> = AddProfileConfig::fields()
            .iter()
            .filter(|f| f.secret)
            .map(|f| f.wire)
            .collect();
        assert_eq!(secrets, ["password", "private_Password"]);
    }

    #[test]
    fn scan_entry_keeps_raw_mac() {
        let mut entry = WlanScanEntry::new();
        entry.set_mac_address("AA-BB-CC-DD-EE-FF");
        assert_eq!(entry.mac_address(), "AA-BB-CC-DD-EE-FF");
        assert_eq!(
            entry.normalized_mac().unwrap().to_string(),
            "aa:bb:cc:dd:ee:ff"
        );
    }

    #[test]
    fn scan_entry_without_mac_has_no_normalized_form() {
        assert!(WlanScanEntry::new().normalized_mac().is_none());
        let mut entry = WlanScanEntry::new();
        entry.set_mac_address("");
        assert!(entry.normalized_mac().is_none());
        entry.set_mac_address("not-a-mac");
        assert!(entry.normalized_mac().is_none());
    }

    #[test]
    fn status_defaults_to_empty() {
        let info = WifiStatusInfo::new();
        assert!(info.status().is_empty());
        assert!(info.get("anything").is_none());
    }

    #[test]
    fn status_insert_preserves_order() {
        let mut info = WifiStatusInfo::new();
        info.insert("ssid", "corp");
        info.insert("connected", true);
        info.insert("rssi", -58_i64);
        let keys: Vec<_> = info.status().keys().cloned().collect();
        assert_eq!(keys, ["ssid", "connected", "rssi"]);
        assert_eq!(info.insert("ssid", "guest"), Some(StatusValue::from("corp")));
        assert_eq!(info.remove("connected"), Some(StatusValue::Bool(true)));
        let keys: Vec<_> = info.status().keys().cloned().collect();
        assert_eq!(keys, ["ssid", "rssi"]);
    }

    #[test]
    fn status_values_decode_by_kind() {
        let info: WifiStatusInfo = serde_json::from_str(
            r#"{"statusDictionary": {"up": true, "channel": 11, "quality": 0.75, "band": "5GHz"}}"#,
        )
        .unwrap();
        assert_eq!(info.get("up"), Some(&StatusValue::Bool(true)));
        assert_eq!(info.get("channel"), Some(&StatusValue::Integer(11)));
        assert_eq!(info.get("quality"), Some(&StatusValue::Float(0.75)));
        assert_eq!(info.get("band"), Some(&StatusValue::Text("5GHz".into())));
    }

    #[test]
    fn large_counters_keep_full_precision() {
        let info: WifiStatusInfo = serde_json::from_str(
            r#"{"statusDictionary": {"rxBytes": 18446744073709551615, "txBytes": 42}}"#,
        )
        .unwrap();
        assert_eq!(info.get("rxBytes"), Some(&StatusValue::Unsigned(u64::MAX)));
        assert_eq!(info.get("txBytes"), Some(&StatusValue::Integer(42)));
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"statusDictionary":{"rxBytes":18446744073709551615,"txBytes":42}}"#
        );
        assert_eq!(StatusValue::from(7_u64), StatusValue::Integer(7));
        assert_eq!(info.get("rxBytes").unwrap().to_string(), "18446744073709551615");
    }

    #[test]
    fn status_set_field_requires_entries() {
        let mut info = WifiStatusInfo::new();
        assert!(
            info.set_field(STATUS_WIRE, FieldValue::Text("x".into()))
                .is_err()
        );
        assert!(
            info.set_field("other", FieldValue::Entries(StatusMap::new()))
                .is_err()
        );
        info.assign("status", r#"{"state": "associated"}"#).unwrap();
        assert_eq!(info.get("state"), Some(&StatusValue::from("associated")));
    }
}
