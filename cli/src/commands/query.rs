use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use colored::*;
use tracing::{Instrument, Span, info_span, warn};

use mksnmp_common::config::Config;
use mksnmp_common::device::DeviceRecord;
use mksnmp_common::network::target::Target;
use mksnmp_common::success;
use mksnmp_core::{DeviceProber, RangeScanner, ScanReport, UdpSnmpClient, export};

use crate::mprint;
use crate::terminal::{colors, format, print, progress};

const FORCE_QUIT_PRESSES: u8 = 2;
const EXIT_INTERRUPTED: i32 = 130;

pub async fn query(target: Target, cfg: &Config) -> anyhow::Result<()> {
    let heading = if target.is_single() { "querying device" } else { "scanning range" };
    print::section(heading, cfg.quiet);
    print_settings(&target, cfg);

    let span: Span = if target.is_single() {
        info_span!("probe")
    } else {
        info_span!("scan", indicatif.pb_show = true)
    };
    if !target.is_single() {
        progress::attach(&span, target.to_range().len());
    }

    let prober = DeviceProber::new(Arc::new(UdpSnmpClient), cfg.probe.clone());
    let pb_span = span.clone();
    let scanner = RangeScanner::new(prober)
        .with_jobs(cfg.jobs)
        .with_progress(Arc::new(move |addr: Ipv4Addr, answered: bool| {
            progress::advance(&pb_span, addr, answered)
        }));

    let stop = scanner.stop_handle();
    let interrupt_watch = tokio::spawn(watch_interrupts(stop));

    let start_time: Instant = Instant::now();
    let report: ScanReport = scanner.run(&target).instrument(span).await;

    query_ends(&target, &report, start_time.elapsed(), cfg);

    let written = export::write_csv(&cfg.output, &report.records);
    interrupt_watch.abort();
    written?;
    success!(
        "Wrote {} device row(s) to {}",
        report.records.len(),
        cfg.output.display()
    );
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InterruptAction {
    Stop,
    ForceQuit,
}

/// First Ctrl-C asks the scan to stop; any later one exits immediately.
fn interrupt_action(presses: u8) -> InterruptAction {
    if presses >= FORCE_QUIT_PRESSES {
        InterruptAction::ForceQuit
    } else {
        InterruptAction::Stop
    }
}

async fn watch_interrupts(stop: Arc<AtomicBool>) {
    let mut presses: u8 = 0;
    while tokio::signal::ctrl_c().await.is_ok() {
        presses = presses.saturating_add(1);
        match interrupt_action(presses) {
            InterruptAction::Stop => {
                warn!("Interrupted, stopping after the current device (Ctrl-C again to quit now)");
                stop.store(true, Ordering::Relaxed);
            }
            InterruptAction::ForceQuit => {
                warn!("Interrupted again, quitting without writing the report");
                std::process::exit(EXIT_INTERRUPTED);
            }
        }
    }
}

fn print_settings(target: &Target, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    let probe = &cfg.probe;
    let rows: [(&str, String); 6] = [
        ("Target", target.to_string()),
        ("Community", probe.community.clone()),
        ("SNMP", format!("{} on udp/{}", probe.version, probe.port)),
        ("Timeout", format!("{} ms x {} attempt(s)", probe.timeout.as_millis(), u16::from(probe.retries) + 1)),
        ("Jobs", cfg.jobs.to_string()),
        ("Output", cfg.output.display().to_string()),
    ];
    print::set_setting_width(rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0));
    for (key, value) in rows {
        print::setting(key, &value);
    }
}

fn query_ends(target: &Target, report: &ScanReport, total_time: Duration, cfg: &Config) {
    if report.interrupted {
        warn!(
            "Scan interrupted after {} of {} addresses",
            report.probed,
            target.to_range().len()
        );
    }

    if report.records.is_empty() {
        no_devices_found(target, cfg);
        return;
    }

    if cfg.quiet > 0 {
        mprint!();
    }

    print::section("Device Report", cfg.quiet);
    print_devices(&report.records, cfg);
    print_summary(report, total_time, cfg);
}

fn no_devices_found(target: &Target, cfg: &Config) {
    print::section("NO DEVICES ANSWERED", cfg.quiet);
    print::no_answer(cfg.quiet);
    if target.is_single() {
        warn!("{target} did not answer SNMP requests for community '{}'", cfg.probe.community);
    }
}

fn print_devices(records: &[DeviceRecord], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }
    for (idx, record) in records.iter().enumerate() {
        print_device_tree(record, idx);
        if idx + 1 != records.len() {
            mprint!();
        }
    }
}

fn print_device_tree(record: &DeviceRecord, idx: usize) {
    print::device_head(idx, &format::headline(record));
    print::device_fields(format::record_to_details(record));
}

fn print_summary(report: &ScanReport, total_time: Duration, cfg: &Config) {
    let devices: ColoredString = format!("{} devices", report.records.len()).bold().green();
    let silent: ColoredString = format!("{} silent", report.unreachable).bold().color(colors::MUTED);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Query Complete: {devices} answered, {silent}, in {total_time}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::heavy_rule();
            print::centered(&output.to_string());
        }
        _ => {
            mprint!();
            success!("{}", output)
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
