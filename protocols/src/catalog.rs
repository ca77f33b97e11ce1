//! # OID Catalog
//!
//! Fixed mapping from identity [`Field`]s to the objects that hold them on a
//! Konica Minolta MFP. Standard MIB-II / Printer-MIB objects are used where
//! they exist; the network settings live under the vendor's enterprise
//! subtree (`1.3.6.1.4.1.18334`).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use mksnmp_common::device::Field;

use crate::oid::ObjectId;

const ENTRIES: [(Field, &str); Field::COUNT] = [
    (Field::Model, ".1.3.6.1.2.1.1.1.0"),
    (Field::SerialNumber, ".1.3.6.1.2.1.43.5.1.1.17.1"),
    (Field::Location, ".1.3.6.1.2.1.1.6.0"),
    (Field::Firmware, ".1.3.6.1.4.1.18334.1.1.1.5.5.1.1.3.1"),
    (Field::Hostname, ".1.3.6.1.4.1.18334.1.1.2.1.5.7.1.1.1.12.1"),
    (Field::Domain, ".1.3.6.1.4.1.18334.1.1.2.1.5.7.1.1.1.13.1"),
    (Field::IpAddress, ".1.3.6.1.4.1.18334.1.1.2.1.5.7.1.1.1.3.1"),
    (Field::Subnet, ".1.3.6.1.4.1.18334.1.1.2.1.5.7.1.1.1.4.1"),
    (Field::Gateway, ".1.3.6.1.4.1.18334.1.1.2.1.5.7.1.1.1.5.1"),
    (Field::PrimaryDns, ".1.3.6.1.4.1.18334.1.1.2.1.5.7.1.2.1.3.1.1"),
    (Field::SecondaryDns, ".1.3.6.1.4.1.18334.1.1.2.1.5.7.1.2.1.3.1.2"),
];

static CATALOG: LazyLock<BTreeMap<Field, ObjectId>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|(field, oid)| {
            let oid = oid.parse::<ObjectId>().expect("catalog OIDs are valid constants");
            (*field, oid)
        })
        .collect()
});

/// Returns the OID queried for `field`.
pub fn lookup(field: Field) -> &'static ObjectId {
    &CATALOG[&field]
}

/// Every catalog entry, in query order.
pub fn entries() -> impl Iterator<Item = (Field, &'static ObjectId)> {
    Field::ALL.into_iter().map(|field| (field, lookup(field)))
}

/// Reverse lookup, used to label varbinds in agent responses.
pub fn field_for(oid: &ObjectId) -> Option<Field> {
    CATALOG
        .iter()
        .find_map(|(field, candidate)| (candidate == oid).then_some(*field))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
