use std::net::Ipv4Addr;

use mksnmp_common::error::QueryError;
use snmp2::Value;

/// Renders a varbind value as the text stored in a device record.
///
/// Exception values (`noSuchObject`, `noSuchInstance`, `endOfMibView`) are not
/// data and become [`QueryError::NoSuchObject`].
pub fn render(value: &Value<'_>) -> Result<String, QueryError> {
    let text = match value {
        Value::Integer(n) => n.to_string(),
        Value::Counter32(n) | Value::Unsigned32(n) | Value::Timeticks(n) => n.to_string(),
        Value::Counter64(n) => n.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::IpAddress(octets) => Ipv4Addr::from(*octets).to_string(),
        Value::OctetString(bytes) | Value::Opaque(bytes) => octets_to_text(bytes),
        Value::ObjectIdentifier(oid) => format!(".{oid}"),
        Value::Null => String::new(),
        Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView => {
            return Err(QueryError::NoSuchObject);
        }
        other => {
            // drop the type prefix from the debug form
            let raw = format!("{other:?}");
            match raw.split_once(':') {
                Some((_type, v)) => v.trim().to_owned(),
                None => raw,
            }
        }
    };
    Ok(text)
}

/// Printable payloads become text; anything else is shown as `aa:bb:cc` hex.
fn octets_to_text(bytes: &[u8]) -> String {
    let trimmed = match bytes.iter().rposition(|b| *b != 0) {
        Some(last) => &bytes[..=last],
        None => &[],
    };

    match std::str::from_utf8(trimmed) {
        Ok(text) if text.chars().all(|c| !c.is_control() || c.is_whitespace()) => {
            text.trim().to_string()
        }
        _ => trimmed
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<String>>()
            .join(":"),
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
