// ── Certificate listing ──

record! {
    /// Metadata of one certificate installed on the reader.
    ///
    /// Dates, sizes and serials are kept exactly as the reader formats
    /// them; no parsing or validity check happens here.
    pub struct CertificateEntry => Certificate {
        name / set_name: text = "certName", "Name";
        size / set_size: text = "certSize", "Size";
        cert_type / set_cert_type: text = "certType", "Type";
        issuer_name / set_issuer_name: text = "certIssuerName", "Issuer";
        key_algorithm / set_key_algorithm: text = "certKeyAlg", "Key Algorithm";
        key / set_key: text = "certKey", "Key";
        serial_number / set_serial_number: text = "certSerialNo", "Serial Number";
        subject_name / set_subject_name: text = "certSubjectName", "Subject";
        valid_from / set_valid_from: text = "certValidFrom", "Valid From";
        valid_till / set_valid_till: text = "certValidTill", "Valid Till";
    }
}
