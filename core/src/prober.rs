//! # Device Prober
//!
//! Queries every catalog field on one device and assembles a [`DeviceRecord`].
//!
//! Failures stay local to the field that caused them: a field the agent does
//! not know, or one whose request times out, is recorded as
//! [`FieldValue::Missing`] and the probe moves on. Only a host that never
//! answers at all is reported as [`ProbeOutcome::Unreachable`].
//!
//! The first catalog query doubles as a liveness check. If it gets no answer
//! after its retries, the remaining fields are not attempted.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tracing::{debug, trace};

use mksnmp_common::config::ProbeConfig;
use mksnmp_common::device::{DeviceRecord, Field, FieldValue};
use mksnmp_common::error::QueryError;
use mksnmp_protocols::{ObjectId, catalog};

use crate::network::snmp::{GetRequest, SnmpClient};

/// What probing one address produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Device(DeviceRecord),
    Unreachable,
}

impl ProbeOutcome {
    pub fn into_record(self) -> Option<DeviceRecord> {
        match self {
            ProbeOutcome::Device(record) => Some(record),
            ProbeOutcome::Unreachable => None,
        }
    }
}

pub struct DeviceProber {
    client: Arc<dyn SnmpClient>,
    cfg: ProbeConfig,
}

impl DeviceProber {
    pub fn new(client: Arc<dyn SnmpClient>, cfg: ProbeConfig) -> Self {
        Self { client, cfg }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.cfg
    }

    /// Queries every catalog field on `addr`.
    pub async fn probe(&self, addr: Ipv4Addr) -> ProbeOutcome {
        let target = SocketAddr::from((addr, self.cfg.port));
        let mut builder = DeviceRecord::builder(addr);
        let mut answered = false;

        for (field, oid) in catalog::entries() {
            match self.query(target, oid).await {
                Ok(value) => {
                    answered = true;
                    builder.set(field, FieldValue::Present(value));
                }
                Err(e) if e.is_transport() && !answered && field == Field::ALL[0] => {
                    debug!("{addr} did not answer the {field} query: {e}");
                    return ProbeOutcome::Unreachable;
                }
                Err(e) => {
                    answered |= !e.is_transport();
                    debug!("{addr}: {field} unavailable: {e}");
                    builder.set(field, FieldValue::Missing);
                }
            }
        }

        if !answered {
            return ProbeOutcome::Unreachable;
        }

        let record = builder.build();
        if let Some(reported) = record.get(Field::IpAddress).as_deref() {
            if reported != addr.to_string() {
                debug!("{addr} reports its address as {reported}");
            }
        }

        ProbeOutcome::Device(record)
    }

    /// One GET, bounded by the configured timeout and retried on silence.
    async fn query(&self, target: SocketAddr, oid: &ObjectId) -> Result<String, QueryError> {
        let request = GetRequest {
            target,
            community: &self.cfg.community,
            version: self.cfg.version,
            oid,
        };

        let mut attempt: u8 = 0;
        loop {
            let result = match tokio::time::timeout(self.cfg.timeout, self.client.get(&request)).await {
                Ok(result) => result,
                Err(_elapsed) => Err(QueryError::Timeout),
            };

            match result {
                Err(e) if e.is_transport() && attempt < self.cfg.retries => {
                    attempt += 1;
                    trace!("{target} {oid}: {e}, retry {attempt}/{}", self.cfg.retries);
                }
                other => return other,
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
