//! In-memory SNMP agents standing in for printers on the network.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;
use mksnmp_common::config::ProbeConfig;
use mksnmp_common::device::Field;
use mksnmp_common::error::QueryError;
use mksnmp_core::{DeviceProber, GetRequest, RangeScanner, SnmpClient};
use mksnmp_protocols::catalog;

pub struct FakeDevice {
    community: String,
    values: HashMap<Field, String>,
}

impl FakeDevice {
    pub fn new(community: &str) -> Self {
        Self {
            community: community.to_string(),
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, field: Field, value: &str) -> Self {
        self.values.insert(field, value.to_string());
        self
    }

    /// A device answering every catalog field.
    pub fn complete(community: &str, addr: Ipv4Addr) -> Self {
        Self::new(community)
            .with(Field::Model, "KONICA MINOLTA bizhub C360i")
            .with(Field::SerialNumber, "A7PU021012345")
            .with(Field::Location, "Floor 2, Copy Room")
            .with(Field::Firmware, "GC7-30")
            .with(Field::Hostname, "KMBT-C360I")
            .with(Field::Domain, "office.local")
            .with(Field::IpAddress, &addr.to_string())
            .with(Field::Subnet, "255.255.255.0")
            .with(Field::Gateway, "192.168.1.1")
            .with(Field::PrimaryDns, "192.168.1.2")
            .with(Field::SecondaryDns, "8.8.8.8")
    }
}

/// Hosts not in the table, and requests with the wrong community, go
/// unanswered the way a real agent drops them.
#[derive(Default)]
pub struct FakeNetwork {
    devices: HashMap<Ipv4Addr, FakeDevice>,
}

impl FakeNetwork {
    pub fn with_device(mut self, addr: Ipv4Addr, device: FakeDevice) -> Self {
        self.devices.insert(addr, device);
        self
    }
}

#[async_trait]
impl SnmpClient for FakeNetwork {
    async fn get(&self, request: &GetRequest<'_>) -> Result<String, QueryError> {
        let IpAddr::V4(addr) = request.target.ip() else {
            return Err(QueryError::Transport("not an IPv4 target".into()));
        };
        let Some(device) = self.devices.get(&addr) else {
            return Err(QueryError::Timeout);
        };
        if device.community != request.community {
            return Err(QueryError::Timeout);
        }

        catalog::field_for(request.oid)
            .and_then(|field| device.values.get(&field).cloned())
            .ok_or(QueryError::NoSuchObject)
    }
}

pub fn probe_config(community: &str) -> ProbeConfig {
    ProbeConfig {
        community: community.to_string(),
        timeout: Duration::from_millis(100),
        retries: 0,
        ..ProbeConfig::default()
    }
}

pub fn scanner(network: FakeNetwork, community: &str) -> RangeScanner {
    RangeScanner::new(DeviceProber::new(Arc::new(network), probe_config(community)))
}

/// A scratch directory, removed when the returned guard drops.
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn csv_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(format!("{name}.csv"))
}
