//! # Scan Target Model
//!
//! Defines what a single invocation is asked to query:
//! * A single IPv4 address (host).
//! * An inclusive IPv4 range (e.g., `192.168.1.1 192.168.1.100`, `192.168.1.1-100`
//!   or `192.168.1.0/24`).

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::TargetError;
use crate::network::range::ScanRange;

/// Represents a distinct target to be queried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Query a single specific host.
    Host { target_addr: Ipv4Addr },
    /// Scan a range of IPv4 addresses.
    Range { ipv4_range: ScanRange },
}

impl Target {
    /// Builds a range target from explicit bounds, rejecting `start > end`.
    pub fn from_bounds(start: Ipv4Addr, end: Ipv4Addr) -> Result<Self, TargetError> {
        if start > end {
            return Err(TargetError::InvertedRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Target::Range {
            ipv4_range: ScanRange::new(start, end),
        })
    }

    /// Builds a range target from a single range expression.
    pub fn from_expression(s: &str) -> Result<Self, TargetError> {
        let ipv4_range: ScanRange = s.parse()?;
        Self::from_bounds(ipv4_range.start_addr, ipv4_range.end_addr)
    }

    /// The addresses this target covers, as a range.
    pub fn to_range(&self) -> ScanRange {
        match self {
            Target::Host { target_addr } => ScanRange::single(*target_addr),
            Target::Range { ipv4_range } => *ipv4_range,
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Target::Host { .. })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Host { target_addr } => write!(f, "{target_addr}"),
            Target::Range { ipv4_range } => write!(f, "{ipv4_range}"),
        }
    }
}

impl FromStr for Target {
    type Err = TargetError;

    /// Parses a host address or any range expression understood by [`ScanRange`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(target_addr) = s.parse::<Ipv4Addr>() {
            return Ok(Target::Host { target_addr });
        }
        if s.contains('-') || s.contains('/') {
            return Self::from_expression(s);
        }
        Err(TargetError::InvalidAddress(s.to_string()))
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
    fn from_str_full_parsing() {
        assert!(matches!(
            Target::from_str("192.168.1.10"),
            Ok(Target::Host { .. })
        ));
        assert!(matches!(
            Target::from_str("10.0.0.1-10.0.0.255"),
            Ok(Target::Range { .. })
        ));
        assert!(matches!(
            Target::from_str("192.168.1.1-2.255"),
            Ok(Target::Range { .. })
        ));
        assert!(matches!(
            Target::from_str("10.0.0.0/24"),
            Ok(Target::Range { .. })
        ));

        assert!(Target::from_str("not.an.ip").is_err());
        assert!(Target::from_str("::1").is_err());
        assert!(Target::from_str("10.0.0.1/33").is_err());
    }

    #[test]
    fn from_bounds_rejects_inverted_range() {
        let start = Ipv4Addr::new(192, 168, 1, 20);
        let end = Ipv4Addr::new(192, 168, 1, 10);

        let err = Target::from_bounds(start, end).unwrap_err();
        assert_eq!(
            err,
            TargetError::InvertedRange {
                start: "192.168.1.20".into(),
                end: "192.168.1.10".into()
            }
        );
        assert!(Target::from_expression("192.168.1.20-10").is_err());
    }

    #[test]
    fn host_target_is_single_address_range() {
        let addr = Ipv4Addr::new(192, 168, 1, 10);
        let target = Target::Host { target_addr: addr };
        assert!(target.is_single());
        assert_eq!(target.to_range(), ScanRange::single(addr));
        assert_eq!(target.to_string(), "192.168.1.10");
    }
}
