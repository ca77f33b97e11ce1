//! # Range Scanner
//!
//! Walks a [`ScanRange`] in ascending address order and probes every address
//! with a [`DeviceProber`]. Hosts that never answer are counted and dropped;
//! everything else ends up in the [`ScanReport`] in address order.
//!
//! By default one probe is in flight at a time. With more than one job the
//! scanner keeps up to that many probes running, tallies each one as soon as
//! it finishes, and sorts the results back into address order before
//! returning them.

use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, warn};

use mksnmp_common::device::DeviceRecord;
use mksnmp_common::network::range::ScanRange;
use mksnmp_common::network::target::Target;

use crate::prober::{DeviceProber, ProbeOutcome};

/// Invoked after each address is probed with whether it answered.
pub type ProgressCallback = Arc<dyn Fn(Ipv4Addr, bool) + Send + Sync>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Answering devices, ascending by address.
    pub records: Vec<DeviceRecord>,
    pub probed: u64,
    pub unreachable: u64,
    /// Set when the scan was stopped before the end of the range.
    pub interrupted: bool,
}

pub struct RangeScanner {
    prober: Arc<DeviceProber>,
    jobs: usize,
    on_progress: Option<ProgressCallback>,
    stop: Arc<AtomicBool>,
}

impl RangeScanner {
    pub fn new(prober: DeviceProber) -> Self {
        Self {
            prober: Arc::new(prober),
            jobs: 1,
            on_progress: None,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Number of probes allowed in flight; zero is treated as one.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Flag that, once set, stops the scan before the next address.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// Probes every address the target covers.
    pub async fn run(&self, target: &Target) -> ScanReport {
        self.scan(target.to_range()).await
    }

    pub async fn scan(&self, range: ScanRange) -> ScanReport {
        if range.is_empty() {
            warn!("Range {range} is empty, nothing to scan");
            return ScanReport::default();
        }

        debug!("Scanning {} addresses in {range} with {} job(s)", range.len(), self.jobs);

        let mut report = if self.jobs == 1 {
            self.scan_sequential(range).await
        } else {
            self.scan_pooled(range).await
        };

        report.records.sort_by_key(DeviceRecord::address);
        report
    }

    async fn scan_sequential(&self, range: ScanRange) -> ScanReport {
        let mut report = ScanReport::default();

        for addr in range.iter() {
            if self.stopped() {
                report.interrupted = true;
                break;
            }
            let outcome = self.prober.probe(addr).await;
            self.tally(&mut report, addr, outcome);
        }

        report
    }

    async fn scan_pooled(&self, range: ScanRange) -> ScanReport {
        let mut report = ScanReport::default();
        let mut tasks: JoinSet<(Ipv4Addr, ProbeOutcome)> = JoinSet::new();

        for addr in range.iter() {
            if self.stopped() {
                report.interrupted = true;
                break;
            }

            while tasks.len() >= self.jobs {
                if let Some(joined) = tasks.join_next().await {
                    self.reap(&mut report, joined);
                }
            }

            let prober = self.prober.clone();
            tasks.spawn(async move { (addr, prober.probe(addr).await) });

            while let Some(joined) = tasks.try_join_next() {
                self.reap(&mut report, joined);
            }
        }

        while let Some(joined) = tasks.join_next().await {
            self.reap(&mut report, joined);
        }

        report
    }

    fn reap(&self, report: &mut ScanReport, joined: Result<(Ipv4Addr, ProbeOutcome), JoinError>) {
        match joined {
            Ok((addr, outcome)) => self.tally(report, addr, outcome),
            Err(e) => error!("Probe task failed: {e}"),
        }
    }

    fn tally(&self, report: &mut ScanReport, addr: Ipv4Addr, outcome: ProbeOutcome) {
        report.probed += 1;
        let answered = match outcome {
            ProbeOutcome::Device(record) => {
                debug!("{addr} answered with {} field(s)", record.present_count());
                report.records.push(record);
                true
            }
            ProbeOutcome::Unreachable => {
                report.unreachable += 1;
                false
            }
        };

        if let Some(cb) = &self.on_progress {
            cb(addr, answered);
        }
    }

    fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
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
