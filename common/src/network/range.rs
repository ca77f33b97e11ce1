//! # IPv4 Scan Range
//!
//! An inclusive, continuous block of IPv4 addresses.
//!
//! Addresses are walked as 32-bit integers and only turned back into
//! [`Ipv4Addr`] values as they are handed out, so octet rollovers
//! (`192.168.1.255` -> `192.168.2.0`) come for free.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use pnet::ipnetwork::Ipv4Network;

use crate::error::TargetError;

/// Represents a continuous range of IPv4 addresses, inclusive.
///
/// A range whose `start_addr` is greater than its `end_addr` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanRange {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl ScanRange {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn single(addr: Ipv4Addr) -> Self {
        Self::new(addr, addr)
    }

    /// Iterates every address in ascending numeric order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone + use<> {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    /// Number of addresses covered. A full `0.0.0.0/0` does not fit in a `u32`.
    pub fn len(&self) -> u64 {
        let start: u64 = u32::from(self.start_addr).into();
        let end: u64 = u32::from(self.end_addr).into();
        if start > end { 0 } else { end - start + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.start_addr > self.end_addr
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.start_addr <= addr && addr <= self.end_addr
    }
}

impl fmt::Display for ScanRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_addr, self.end_addr)
    }
}

impl FromStr for ScanRange {
    type Err = TargetError;

    /// Parses a range expression.
    ///
    /// Supported formats:
    /// * **Full**: `192.168.1.1-192.168.2.50`
    /// * **Abbreviated**: `192.168.1.1-50`, `192.168.1.1-2.50`
    /// * **CIDR**: `192.168.1.0/24`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some((ip_str, prefix_str)) = s.split_once('/') {
            let ip = parse_addr(ip_str)?;
            let prefix = prefix_str
                .parse::<u8>()
                .map_err(|_| TargetError::InvalidPrefix(prefix_str.to_string()))?;
            return cidr_range(ip, prefix);
        }

        let Some((start_str, end_str)) = s.split_once('-') else {
            return Err(TargetError::InvalidRange(s.to_string()));
        };

        let start_addr = parse_addr(start_str)?;
        let end_addr = parse_range_end_addr(end_str.trim(), &start_addr, s)?;

        Ok(Self::new(start_addr, end_addr))
    }
}

fn parse_addr(s: &str) -> Result<Ipv4Addr, TargetError> {
    s.trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| TargetError::InvalidAddress(s.trim().to_string()))
}

/// Parses the end of a range, filling omitted leading octets from the start.
///
/// `50` after `192.168.1.1` means `192.168.1.50`, `2.66` means `192.168.2.66`.
fn parse_range_end_addr(
    end_str: &str,
    start_addr: &Ipv4Addr,
    original_s: &str,
) -> Result<Ipv4Addr, TargetError> {
    if let Ok(full_addr) = end_str.parse::<Ipv4Addr>() {
        return Ok(full_addr);
    }

    if end_str.is_empty() {
        return Err(TargetError::InvalidRange(original_s.to_string()));
    }

    let partial_octets: Vec<u8> = end_str
        .split('.')
        .map(|octet_str| octet_str.parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| TargetError::InvalidRange(original_s.to_string()))?;

    if partial_octets.len() > 4 {
        return Err(TargetError::InvalidRange(original_s.to_string()));
    }

    let mut end_octets = start_addr.octets();
    let start_index = 4 - partial_octets.len();
    end_octets[start_index..].copy_from_slice(&partial_octets);

    Ok(Ipv4Addr::from(end_octets))
}

/// Creates a range covering the whole network block of `ip/prefix`,
/// network and broadcast addresses included.
pub fn cidr_range(ip: Ipv4Addr, prefix: u8) -> Result<ScanRange, TargetError> {
    let network = Ipv4Network::new(ip, prefix)
        .map_err(|_| TargetError::InvalidPrefix(prefix.to_string()))?;

    Ok(ScanRange::new(network.network(), network.broadcast()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
