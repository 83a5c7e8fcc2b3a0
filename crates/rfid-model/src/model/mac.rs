// ── Hardware addresses ──
//
// Readers report BSSIDs in whatever spelling the platform hands them
// (`AA-BB-..`, `aa:bb:..`, bare hex). `MacAddress` is the parsed six-octet
// form; it never replaces the stored text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// Six-octet hardware address, displayed as `aa:bb:cc:dd:ee:ff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const fn from_octets(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Parse colon- or dash-separated pairs, or 12 bare hex digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let digits: String = if raw.len() == 12 {
            raw.to_owned()
        } else {
            let parts: Vec<&str> = raw.split([':', '-']).collect();
            if parts.len() != 6 || parts.iter().any(|p| p.len() != 2) {
                return None;
            }
            parts.concat()
        };
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let mut octets = [0u8; 6];
        for (slot, pair) in octets.iter_mut().zip(digits.as_bytes().chunks(2)) {
            let pair = std::str::from_utf8(pair).ok()?;
            *slot = u8::from_str_radix(pair, 16).ok()?;
        }
        Some(Self(octets))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl FromStr for MacAddress {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ModelError::InvalidValue {
            field: "MAC address".into(),
            reason: format!("'{s}' is not six hex octets"),
        })
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_spellings() {
        let expected = MacAddress::from_octets([0xaa, 0xbb, 0xcc, 0x0d, 0xee, 0xff]);
        for raw in ["AA-BB-CC-0D-EE-FF", "aa:bb:cc:0d:ee:ff", "AABBCC0DEEFF", " aa:BB:cc:0d:EE:ff "] {
            assert_eq!(MacAddress::parse(raw), Some(expected), "{raw}");
        }
        assert_eq!(expected.to_string(), "aa:bb:cc:0d:ee:ff");
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in ["", "aa:bb:cc", "aa:bb:cc:dd:ee:fg", "aabbccddeeff00", "a:bb:cc:dd:ee:fff"] {
            assert_eq!(MacAddress::parse(raw), None, "{raw}");
        }
        assert!("zz".parse::<MacAddress>().is_err());
    }

    #[test]
    fn serializes_as_text() {
        let mac: MacAddress = "84248D0A1B2C".parse().unwrap();
        assert_eq!(serde_json::to_string(&mac).unwrap(), r#""84:24:8d:0a:1b:2c""#);
        let back: MacAddress = serde_json::from_str(r#""84-24-8d-0a-1b-2c""#).unwrap();
        assert_eq!(back, mac);
    }
}
