pub mod query;

use std::ffi::OsString;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{ArgAction, ArgGroup, CommandFactory, Parser};

use mksnmp_common::config::{
    Config, DEFAULT_COMMUNITY, DEFAULT_JOBS, DEFAULT_OUTPUT, DEFAULT_PORT, DEFAULT_RETRIES,
    DEFAULT_TIMEOUT_MS, ProbeConfig, SnmpVersion,
};
use mksnmp_common::error::TargetError;
use mksnmp_common::network::target::Target;

#[derive(Parser, Debug)]
#[command(name = "mksnmp", version)]
#[command(about = "Collect identity data from Konica Minolta MFPs over SNMP into a CSV file.")]
#[command(after_help = "EXAMPLES:\n  mksnmp -ip 192.168.1.10\n  mksnmp -ipr 192.168.1.1 192.168.1.255\n  mksnmp --community private --ip_address 192.168.1.10")]
#[command(group(ArgGroup::new("mode").required(true).args(["ip_address", "ip_range"])))]
pub struct CommandLine {
    /// Query a single device [legacy: -ip]
    #[arg(long = "ip_address", alias = "ip", value_name = "ADDR")]
    pub ip_address: Option<Ipv4Addr>,

    /// Scan every address from START to END inclusive; also takes a single
    /// range such as 10.0.0.1-50 or 10.0.0.0/24 [legacy: -ipr]
    #[arg(long = "ip_range", alias = "ipr", value_names = ["START", "END"], num_args = 1..=2)]
    pub ip_range: Option<Vec<String>>,

    /// SNMP community name
    #[arg(short, long, default_value = DEFAULT_COMMUNITY, value_parser = parse_community)]
    pub community: String,

    /// CSV file to write
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Time to wait for each SNMP answer, in milliseconds
    #[arg(short, long = "timeout", value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: u64,

    /// Extra attempts for a request that got no answer
    #[arg(short, long, default_value_t = DEFAULT_RETRIES)]
    pub retries: u8,

    /// UDP port of the SNMP agent
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SNMP version, v1 or v2c
    #[arg(long = "snmp-version", value_name = "VERSION", default_value = "v2c")]
    pub snmp_version: SnmpVersion,

    /// Devices queried at the same time during a range scan
    #[arg(short, long, default_value_t = DEFAULT_JOBS as u64,
          value_parser = clap::value_parser!(u64).range(1..=1024))]
    pub jobs: u64,

    /// Less terminal output; repeat to hide per-device details
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output; repeat for request-level tracing
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Skip the start-up banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Everything `main` needs, validated.
#[derive(Debug)]
pub struct Invocation {
    pub target: Target,
    pub cfg: Config,
    pub verbose: u8,
}

impl CommandLine {
    /// Parses the process arguments, exiting with a usage error on bad input.
    pub fn parse_invocation() -> Invocation {
        match Self::try_parse_invocation(std::env::args_os()) {
            Ok(invocation) => invocation,
            Err(e) => e.exit(),
        }
    }

    pub fn try_parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let cli = Self::try_parse_from(normalize_args(args))?;
        cli.into_invocation()
            .map_err(|e| Self::command().error(ErrorKind::ValueValidation, e))
    }

    fn into_invocation(self) -> Result<Invocation, TargetError> {
        let target = self.target()?;
        let cfg = Config {
            probe: ProbeConfig {
                community: self.community,
                version: self.snmp_version,
                port: self.port,
                timeout: Duration::from_millis(self.timeout_ms),
                retries: self.retries,
            },
            jobs: self.jobs as usize,
            output: self.output,
            no_banner: self.no_banner,
            quiet: self.quiet,
        };

        Ok(Invocation {
            target,
            cfg,
            verbose: self.verbose,
        })
    }

    fn target(&self) -> Result<Target, TargetError> {
        if let Some(target_addr) = self.ip_address {
            return Ok(Target::Host { target_addr });
        }

        match self.ip_range.as_deref() {
            Some([start, end]) => Target::from_bounds(parse_addr(start)?, parse_addr(end)?),
            Some([expression]) => Target::from_expression(expression),
            _ => Err(TargetError::InvalidRange(
                self.ip_range.as_deref().unwrap_or_default().join(" "),
            )),
        }
    }
}

fn parse_addr(s: &str) -> Result<Ipv4Addr, TargetError> {
    s.parse()
        .map_err(|_| TargetError::InvalidAddress(s.to_string()))
}

fn parse_community(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("community must not be empty".into());
    }
    Ok(s.to_string())
}

/// Rewrites the single-dash long flags (`-ip`, `-ipr`) and `/?` into forms
/// clap understands. Flag names are matched case-insensitively.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            match text.to_ascii_lowercase().as_str() {
                "-ip" | "--ip_address" => "--ip_address".into(),
                "-ipr" | "--ip_range" => "--ip_range".into(),
                "--community" => "--community".into(),
                "/?" | "--help" => "--help".into(),
                _ => arg,
            }
        })
        .collect()
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
    use mksnmp_common::network::range::ScanRange;

    fn parse(args: &[&str]) -> Result<Invocation, clap::Error> {
        CommandLine::try_parse_invocation(std::iter::once("mksnmp").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn legacy_single_address_flag() {
        let inv = parse(&["-ip", "192.168.1.10"]).unwrap();
        assert_eq!(
            inv.target,
            Target::Host {
                target_addr: Ipv4Addr::new(192, 168, 1, 10)
            }
        );
        assert_eq!(inv.cfg.probe.community, "public");
        assert_eq!(inv.cfg.output, PathBuf::from("Device_data.csv"));
    }

    #[test]
    fn legacy_range_flag_takes_two_addresses() {
        let inv = parse(&["-IPR", "192.168.1.1", "192.168.1.3"]).unwrap();
        assert_eq!(
            inv.target,
            Target::Range {
                ipv4_range: ScanRange::new(
                    Ipv4Addr::new(192, 168, 1, 1),
                    Ipv4Addr::new(192, 168, 1, 3)
                )
            }
        );
    }

    #[test]
    fn range_flag_takes_an_expression() {
        let inv = parse(&["--ip_range", "10.0.0.0/30"]).unwrap();
        assert_eq!(inv.target.to_range().len(), 4);
    }

    #[test]
    fn community_override() {
        let inv = parse(&["-c", "private", "-ip", "192.168.1.10"]).unwrap();
        assert_eq!(inv.cfg.probe.community, "private");

        let inv = parse(&["--community", "private", "--ip_address", "192.168.1.10"]).unwrap();
        assert_eq!(inv.cfg.probe.community, "private");
    }

    #[test]
    fn tuning_flags() {
        let inv = parse(&[
            "-ip", "10.0.0.1", "-t", "250", "-r", "0", "-p", "1161", "--snmp-version", "v1", "-j",
            "4", "-o", "out.csv", "-qq",
        ])
        .unwrap();
        assert_eq!(inv.cfg.probe.timeout, Duration::from_millis(250));
        assert_eq!(inv.cfg.probe.retries, 0);
        assert_eq!(inv.cfg.probe.port, 1161);
        assert_eq!(inv.cfg.probe.version, SnmpVersion::V1);
        assert_eq!(inv.cfg.jobs, 4);
        assert_eq!(inv.cfg.output, PathBuf::from("out.csv"));
        assert_eq!(inv.cfg.quiet, 2);
    }

    #[test]
    fn malformed_address_is_rejected() {
        let err = parse(&["-ip", "not.an.ip"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = parse(&["-ipr", "192.168.1.20", "192.168.1.10"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        assert!(parse(&["-ipr", "192.168.1.1", "banana"]).is_err());
    }

    #[test]
    fn exactly_one_mode_is_required() {
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["-ip", "10.0.0.1", "-ipr", "10.0.0.1", "10.0.0.2"])
                .unwrap_err()
                .kind(),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn empty_community_is_rejected() {
        assert!(parse(&["-c", "", "-ip", "10.0.0.1"]).is_err());
    }

    #[test]
    fn help_aliases() {
        assert_eq!(parse(&["/?"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse(&["--HELP"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }
}
