use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_COMMUNITY: &str = "public";
pub const DEFAULT_PORT: u16 = 161;
pub const DEFAULT_TIMEOUT_MS: u64 = 1_000;
pub const DEFAULT_RETRIES: u8 = 1;
pub const DEFAULT_JOBS: usize = 1;
pub const DEFAULT_OUTPUT: &str = "Device_data.csv";

/// SNMP protocol versions that authenticate with a community string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SnmpVersion {
    V1,
    #[default]
    V2c,
}

impl FromStr for SnmpVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1" | "v1" => Ok(SnmpVersion::V1),
            "2c" | "v2c" | "2" | "v2" => Ok(SnmpVersion::V2c),
            _ => Err(format!("unsupported SNMP version '{s}' (expected v1 or v2c)")),
        }
    }
}

impl fmt::Display for SnmpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnmpVersion::V1 => f.write_str("v1"),
            SnmpVersion::V2c => f.write_str("v2c"),
        }
    }
}

/// Settings for querying a single device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Community string sent with every request.
    pub community: String,
    pub version: SnmpVersion,
    /// UDP port of the agent.
    pub port: u16,
    /// Upper bound on one request attempt.
    pub timeout: Duration,
    /// Extra attempts after a request got no answer.
    pub retries: u8,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            community: DEFAULT_COMMUNITY.to_string(),
            version: SnmpVersion::default(),
            port: DEFAULT_PORT,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            retries: DEFAULT_RETRIES,
        }
    }
}

/// Settings for a whole run.
#[derive(Debug, Clone)]
pub struct Config {
    pub probe: ProbeConfig,
    /// Number of hosts probed at the same time during a range scan.
    pub jobs: usize,
    /// Where the CSV report is written.
    pub output: PathBuf,
    pub no_banner: bool,
    /// 0 prints everything, 1 drops decorations, 2 also drops per-device output.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe: ProbeConfig::default(),
            jobs: DEFAULT_JOBS,
            output: PathBuf::from(DEFAULT_OUTPUT),
            no_banner: false,
            quiet: 0,
        }
    }
}
