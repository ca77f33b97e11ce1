use std::fmt;
use std::str::FromStr;

use snmp2::Oid;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OidError {
    #[error("OID is empty")]
    Empty,

    #[error("invalid OID arc '{arc}' in '{oid}'")]
    InvalidArc { oid: String, arc: String },

    #[error("OID {0} cannot be BER encoded")]
    Unencodable(String),
}

/// An SNMP object identifier kept as its numeric arcs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    arcs: Vec<u64>,
}

impl ObjectId {
    pub fn arcs(&self) -> &[u64] {
        &self.arcs
    }

    /// Converts to the wire type used by `snmp2` sessions.
    pub fn to_snmp(&self) -> Result<Oid<'static>, OidError> {
        Oid::from(&self.arcs).map_err(|_| OidError::Unencodable(self.to_string()))
    }

    pub fn from_snmp(oid: &Oid<'_>) -> Result<Self, OidError> {
        oid.to_string().parse()
    }
}

impl FromStr for ObjectId {
    type Err = OidError;

    /// Parses dotted numeric form, with or without the leading dot.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('.');
        if trimmed.is_empty() {
            return Err(OidError::Empty);
        }

        let arcs = trimmed
            .split('.')
            .map(|arc| {
                arc.parse::<u64>().map_err(|_| OidError::InvalidArc {
                    oid: s.to_string(),
                    arc: arc.to_string(),
                })
            })
            .collect::<Result<Vec<u64>, _>>()?;

        Ok(Self { arcs })
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arc in &self.arcs {
            write!(f, ".{arc}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_leading_dot() {
        let a: ObjectId = ".1.3.6.1.2.1.1.1.0".parse().unwrap();
        let b: ObjectId = "1.3.6.1.2.1.1.1.0".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.arcs(), &[1, 3, 6, 1, 2, 1, 1, 1, 0]);
        assert_eq!(a.to_string(), ".1.3.6.1.2.1.1.1.0");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<ObjectId>(), Err(OidError::Empty));
        assert_eq!(".".parse::<ObjectId>(), Err(OidError::Empty));
        assert!("1.3.six.1".parse::<ObjectId>().is_err());
        assert!("1..3".parse::<ObjectId>().is_err());
    }

    #[test]
    fn converts_to_snmp_oid() {
        let oid: ObjectId = ".1.3.6.1.4.1.18334.1.1.1.5.5.1.1.3.1".parse().unwrap();
        let wire = oid.to_snmp().unwrap();
        assert_eq!(ObjectId::from_snmp(&wire).unwrap(), oid);
    }
}
