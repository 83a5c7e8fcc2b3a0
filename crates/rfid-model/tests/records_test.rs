//! Catalog-wide accessor contract checks.
//!
//! Every kind, every field: a written value reads back unchanged, unset
//! fields read as defaults, and a write touches only its own field.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use rfid_model::codec::{self, DocumentFormat};
use rfid_model::{
    AnyRecord, CertificateEntry, ConnectedInterfaceType, EndpointConfig, FieldSpec, FieldType,
    FieldValue, RecordKind, StatusMap, StatusValue,
};

// ── Helpers ─────────────────────────────────────────────────────────

/// A non-default sample value for a field, distinct per field.
fn sample_for(spec: &FieldSpec) -> FieldValue {
    match spec.field_type {
        FieldType::Text => FieldValue::Text(format!("sample-{}", spec.wire)),
        FieldType::Flag => FieldValue::Flag(true),
        FieldType::Interface => FieldValue::Interface(ConnectedInterfaceType::Wifi),
        FieldType::Entries => {
            let mut map = StatusMap::new();
            map.insert(spec.wire.to_owned(), StatusValue::Integer(7));
            FieldValue::Entries(map)
        }
    }
}

// ── Contract ────────────────────────────────────────────────────────

#[test]
fn every_field_round_trips() {
    for kind in RecordKind::iter() {
        for spec in kind.fields() {
            let mut record = AnyRecord::default_for(kind);
            let value = sample_for(spec);
            record.set_field(spec.wire, value.clone()).unwrap();
            assert_eq!(record.field(spec.wire), Some(value), "{kind}.{}", spec.wire);
        }
    }
}

#[test]
fn every_unset_field_reads_as_default() {
    for kind in RecordKind::iter() {
        let record = AnyRecord::default_for(kind);
        for spec in kind.fields() {
            let value = record.field(spec.wire).unwrap();
            assert!(value.is_default(), "{kind}.{} = {value}", spec.wire);
            assert_eq!(value.field_type(), spec.field_type);
        }
    }
}

#[test]
fn writes_do_not_leak_into_other_fields() {
    for kind in RecordKind::iter() {
        for target in kind.fields() {
            let mut record = AnyRecord::default_for(kind);
            let before = record.snapshot();
            record.set_field(target.wire, sample_for(target)).unwrap();
            let after = record.snapshot();
            for (wire, value) in &after {
                if *wire != target.wire {
                    assert_eq!(Some(value), before.get(wire), "{kind}: {} leaked", target.wire);
                }
            }
        }
    }
}

#[test]
fn documents_preserve_every_field() {
    for kind in RecordKind::iter() {
        let mut record = AnyRecord::default_for(kind);
        for spec in kind.fields() {
            record.set_field(spec.wire, sample_for(spec)).unwrap();
        }
        for format in DocumentFormat::iter() {
            let text = codec::encode(format, std::slice::from_ref(&record)).unwrap();
            let back = codec::decode(kind, format, &text).unwrap();
            assert_eq!(back, vec![record.clone()], "{kind} via {format}");
        }
    }
}

#[test]
fn unset_records_survive_every_format() {
    for kind in RecordKind::iter() {
        let record = AnyRecord::default_for(kind);
        for format in DocumentFormat::iter() {
            let text = codec::encode(format, std::slice::from_ref(&record)).unwrap();
            let back = codec::decode(kind, format, &text).unwrap();
            assert_eq!(back, vec![record.clone()], "{kind} via {format}: {text:?}");
        }
    }
}

// ── Worked examples ─────────────────────────────────────────────────

#[test]
fn endpoint_url_and_port_example() {
    let mut ep = EndpointConfig::new();
    ep.set_url("https://ep.example.com");
    ep.set_port("8080");
    assert_eq!(ep.url(), "https://ep.example.com");
    assert_eq!(ep.port(), "8080");
}

#[test]
fn certificate_dates_example() {
    let mut cert = CertificateEntry::new();
    cert.set_name("root.pem");
    cert.set_valid_from("2024-01-01");
    cert.set_valid_till("2025-01-01");
    assert_eq!(cert.name(), "root.pem");
    assert_eq!(cert.valid_from(), "2024-01-01");
    assert_eq!(cert.valid_till(), "2025-01-01");
}

#[test]
fn unknown_field_names_are_rejected() {
    let mut record = AnyRecord::default_for(RecordKind::AddProfile);
    let err = record.assign("bssid", "00:11:22:33:44:55").unwrap_err();
    assert_eq!(err.to_string(), "add-profile records have no field 'bssid'");
}
