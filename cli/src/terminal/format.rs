use crate::terminal::colors;
use colored::*;
use mksnmp_common::device::{DeviceRecord, Field, FieldValue};

const MISSING: &str = "-";

/// Name shown in a device's tree head.
pub fn headline(record: &DeviceRecord) -> String {
    let name = record
        .get(Field::Hostname)
        .as_deref()
        .or_else(|| record.get(Field::Model).as_deref())
        .unwrap_or("Unnamed device");
    format!("{} ({})", name, record.address())
}

pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Model => "Model",
        Field::SerialNumber => "Serial number",
        Field::Location => "Location",
        Field::Firmware => "Firmware",
        Field::Hostname => "Hostname",
        Field::Domain => "Domain",
        Field::IpAddress => "Reported IP",
        Field::Subnet => "Subnet",
        Field::Gateway => "Gateway",
        Field::PrimaryDns => "Primary DNS",
        Field::SecondaryDns => "Secondary DNS",
    }
}

pub fn record_to_details(record: &DeviceRecord) -> Vec<(String, ColoredString)> {
    record
        .fields()
        .map(|(field, value)| {
            let value = match value {
                FieldValue::Present(text) if is_address_field(field) => {
                    text.as_str().color(colors::IPV4_ADDR)
                }
                FieldValue::Present(text) => text.as_str().color(colors::TEXT_DEFAULT),
                FieldValue::Missing => MISSING.color(colors::MUTED).dimmed(),
            };
            (field_label(field).to_string(), value)
        })
        .collect()
}

fn is_address_field(field: Field) -> bool {
    matches!(
        field,
        Field::IpAddress | Field::Subnet | Field::Gateway | Field::PrimaryDns | Field::SecondaryDns
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
