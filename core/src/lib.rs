//! Querying engine for `mksnmp`.
//!
//! * [`network::snmp`]: the [`SnmpClient`] seam and its UDP implementation.
//! * [`prober`]: turns one address into a [`DeviceRecord`](mksnmp_common::device::DeviceRecord).
//! * [`scanner`]: walks a range of addresses through the prober.
//! * [`export`]: writes the CSV report.

pub mod export;
pub mod network;
pub mod prober;
pub mod scanner;

pub use network::snmp::{GetRequest, SnmpClient, UdpSnmpClient};
pub use prober::{DeviceProber, ProbeOutcome};
pub use scanner::{ProgressCallback, RangeScanner, ScanReport};
