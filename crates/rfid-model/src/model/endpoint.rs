// ── Endpoint records ──

record! {
    /// One remote management, control, or data endpoint as configured on
    /// the reader.
    ///
    /// The trailing MDM fields name the certificates and topics used when
    /// the endpoint is provisioned by a device-management server.
    pub struct EndpointConfig => EndpointConfig {
        /// Endpoint name.
        name / set_name: text = "epname", "Name";
        /// Endpoint type (management, control, data, ...).
        endpoint_type / set_endpoint_type: text = "type", "Type";
        protocol / set_protocol: text = "protocol", "Protocol";
        url / set_url: text = "url", "URL";
        port / set_port: text = "port", "Port";
        keepalive / set_keepalive: text = "keepalive", "Keepalive";
        tenant_id / set_tenant_id: text = "tenantid", "Tenant ID";
        enable_clean_session / set_enable_clean_session: flag = "encleanss", "Enable Clean Session";
        disable_clean_session / set_disable_clean_session: flag = "dscleanss", "Disable Clean Session";
        /// Lower bound of the reconnect delay, as sent by the reader.
        reconnect_delay_min / set_reconnect_delay_min: text = "rcdelaymin", "Reconnect Delay Min";
        reconnect_delay_max / set_reconnect_delay_max: text = "rcdelaymax", "Reconnect Delay Max";
        host_verify / set_host_verify: text = "hostvfy", "Host Verify";
        username / set_username: text = "username", "Username";
        password / set_password: text = "password", "Password", secret;
        subject_name / set_subject_name: text = "subname", "Subject Name";
        publisher1_name / set_publisher1_name: text = "pub1name", "Publisher 1 Name";
        publisher2_name / set_publisher2_name: text = "pub2name", "Publisher 2 Name";
        ca_cert_name / set_ca_cert_name: text = "cacertname", "CA Cert Name";
        cert_name / set_cert_name: text = "certname", "Cert Name";
        key_name / set_key_name: text = "keyname", "Key Name";
    }
}

record! {
    /// One entry of the reader's configured endpoint list.
    pub struct EndpointListEntry => EndpointList {
        name / set_name: text = "endPointName", "Endpoint Name";
    }
}

record! {
    /// Snapshot of which endpoints are currently active, and which are
    /// standing by as backups, for each channel.
    pub struct ActiveEndpoints => ActiveEndpoints {
        active_mgmt / set_active_mgmt: text = "activemgmtep", "Active Mgmt";
        active_mgmt_event / set_active_mgmt_event: text = "activemgmtevtep", "Active Mgmt Event";
        active_control / set_active_control: text = "activectrlep", "Active Control";
        active_data1 / set_active_data1: text = "activedat1ep", "Active Data 1";
        active_data2 / set_active_data2: text = "activedat2ep", "Active Data 2";
        backup_mgmt / set_backup_mgmt: text = "backupmgmtep", "Backup Mgmt";
        backup_mgmt_event / set_backup_mgmt_event: text = "backupmgmtevtep", "Backup Mgmt Event";
        backup_control / set_backup_control: text = "backupctrlep", "Backup Control";
        backup_data1 / set_backup_data1: text = "backupdat1ep", "Backup Data 1";
        backup_data2 / set_backup_data2: text = "backupdat2ep", "Backup Data 2";
    }
}
