//! # Device Record Model
//!
//! The result of querying one printer: the probed address plus one slot per
//! identity field. Every field always has a slot, so rows built from records
//! keep their columns aligned whether or not the device answered for it.

use std::fmt;
use std::net::Ipv4Addr;

/// Identity fields queried on every device, in query order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Model,
    SerialNumber,
    Location,
    Firmware,
    Hostname,
    Domain,
    /// Address the device reports for its own network interface.
    IpAddress,
    Subnet,
    Gateway,
    PrimaryDns,
    SecondaryDns,
}

impl Field {
    pub const COUNT: usize = 11;

    pub const ALL: [Field; Field::COUNT] = [
        Field::Model,
        Field::SerialNumber,
        Field::Location,
        Field::Firmware,
        Field::Hostname,
        Field::Domain,
        Field::IpAddress,
        Field::Subnet,
        Field::Gateway,
        Field::PrimaryDns,
        Field::SecondaryDns,
    ];

    /// Column-style name, as used in output files.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Model => "model",
            Field::SerialNumber => "serialnumber",
            Field::Location => "location",
            Field::Firmware => "firmware",
            Field::Hostname => "hostname",
            Field::Domain => "domain",
            Field::IpAddress => "ip_address",
            Field::Subnet => "subnet",
            Field::Gateway => "gateway",
            Field::PrimaryDns => "primary_dns",
            Field::SecondaryDns => "secondary_dns",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single field query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    Present(String),
    #[default]
    Missing,
}

impl FieldValue {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            FieldValue::Present(value) => Some(value.as_str()),
            FieldValue::Missing => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, FieldValue::Present(_))
    }
}

/// Identity of one device, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    address: Ipv4Addr,
    fields: [FieldValue; Field::COUNT],
}

impl DeviceRecord {
    pub fn builder(address: Ipv4Addr) -> DeviceRecordBuilder {
        DeviceRecordBuilder {
            address,
            fields: Default::default(),
        }
    }

    /// Address the record was probed at.
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn get(&self, field: Field) -> &FieldValue {
        &self.fields[field.index()]
    }

    /// Fields paired with their values, in [`Field::ALL`] order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        Field::ALL.into_iter().zip(self.fields.iter())
    }

    pub fn present_count(&self) -> usize {
        self.fields.iter().filter(|value| value.is_present()).count()
    }
}

pub struct DeviceRecordBuilder {
    address: Ipv4Addr,
    fields: [FieldValue; Field::COUNT],
}

impl DeviceRecordBuilder {
    pub fn set(&mut self, field: Field, value: FieldValue) -> &mut Self {
        self.fields[field.index()] = value;
        self
    }

    pub fn build(self) -> DeviceRecord {
        DeviceRecord {
            address: self.address,
            fields: self.fields,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_field_in_declaration_order() {
        for (idx, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), idx);
        }
    }

    #[test]
    fn unset_fields_are_missing() {
        let addr = Ipv4Addr::new(192, 168, 1, 10);
        let mut builder = DeviceRecord::builder(addr);
        builder.set(Field::Model, FieldValue::Present("bizhub C360".into()));
        let record = builder.build();

        assert_eq!(record.address(), addr);
        assert_eq!(record.get(Field::Model).as_deref(), Some("bizhub C360"));
        assert_eq!(record.get(Field::Gateway), &FieldValue::Missing);
        assert_eq!(record.fields().count(), Field::COUNT);
        assert_eq!(record.present_count(), 1);
    }

    #[test]
    fn field_names_are_unique() {
        let mut names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Field::COUNT);
    }
}
