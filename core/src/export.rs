//! CSV output for device records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use mksnmp_common::device::{DeviceRecord, Field};

/// Output columns. `ip_address` is the address that was probed.
pub const CSV_HEADER: [&str; 11] = [
    "ip_address",
    "model",
    "serialnumber",
    "location",
    "firmware",
    "hostname",
    "domain",
    "subnet",
    "gateway",
    "primary_dns",
    "secondary_dns",
];

const CSV_FIELDS: [Field; 10] = [
    Field::Model,
    Field::SerialNumber,
    Field::Location,
    Field::Firmware,
    Field::Hostname,
    Field::Domain,
    Field::Subnet,
    Field::Gateway,
    Field::PrimaryDns,
    Field::SecondaryDns,
];

/// Cells for one record, missing values as empty strings.
pub fn to_row(record: &DeviceRecord) -> Vec<String> {
    let mut row = Vec::with_capacity(CSV_HEADER.len());
    row.push(record.address().to_string());
    row.extend(
        CSV_FIELDS
            .iter()
            .map(|field| record.get(*field).as_deref().unwrap_or_default().to_string()),
    );
    row
}

/// Writes the header and one row per record.
pub fn write_records<W: Write>(writer: W, records: &[DeviceRecord]) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.write_record(to_row(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the report into it.
pub fn write_csv(path: &Path, records: &[DeviceRecord]) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_records(file, records).with_context(|| format!("writing {}", path.display()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
