//! # Network Discovery Service
//!
//! Implements the end-to-end "sweep" use case.
//!
//! The service owns one run: it expands the target, drives the
//! [`WorkPool`], feeds its outcomes to the [`ResultCollector`] and keeps the
//! injected [`ScanObserver`] informed along the way.

use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use sweepr_common::config::Config;
use sweepr_common::error::InputError;
use sweepr_common::network::target::Target;
use sweepr_common::report::ScanReport;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::network;
use crate::prober::Prober;
use crate::scanner::collector::ResultCollector;
use crate::scanner::pool::WorkPool;
use crate::scanner::{NoopObserver, ScanObserver};

/// Application Service for host discovery.
///
/// Orchestrates a sweep by:
/// 1. delegating each liveness check to the [`Prober`] trait.
/// 2. bounding and collecting those checks through the pool and collector.
pub struct DiscoveryService {
    prober: Arc<dyn Prober>,
    observer: Arc<dyn ScanObserver>,
    concurrency: NonZeroUsize,
    probe_timeout: Duration,
}

impl DiscoveryService {
    pub fn new(prober: Arc<dyn Prober>, cfg: &Config) -> Self {
        Self {
            prober,
            observer: Arc::new(NoopObserver),
            concurrency: cfg.concurrency,
            probe_timeout: cfg.probe_timeout,
        }
    }

    /// Uses the prober selected by `cfg.method`.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(network::prober_for(cfg.method), cfg)
    }

    pub fn with_observer(mut self, observer: Arc<dyn ScanObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Parses `input` as a CIDR block and sweeps its usable hosts.
    ///
    /// Only malformed or oversized input is an error; nothing is probed then.
    pub async fn discover(
        &self,
        input: &str,
        cancel: CancellationToken,
    ) -> Result<ScanReport, InputError> {
        let target: Target = input.parse()?;
        let addresses: Vec<IpAddr> = target.to_addresses()?;
        let unit: &str = if addresses.len() == 1 { "host" } else { "hosts" };
        info!("Sweeping {target}, {} {unit} to probe", addresses.len());

        Ok(self.run(addresses, cancel).await)
    }

    /// Sweeps `addresses` and returns the ranked responders.
    ///
    /// Individual probe failures never fail the run. When `cancel` fires the
    /// report holds whatever arrived before it and is flagged as cancelled.
    pub async fn run(&self, addresses: Vec<IpAddr>, cancel: CancellationToken) -> ScanReport {
        let start_time: Instant = Instant::now();
        let total: usize = addresses.len();
        self.observer.on_start(total);

        let mut report: ScanReport = if addresses.is_empty() {
            ScanReport::new(0)
        } else {
            let observer = Arc::clone(&self.observer);
            let pool = WorkPool::new(Arc::clone(&self.prober), self.concurrency, self.probe_timeout)
                .with_progress(Box::new(move |done, total| observer.on_progress(done, total)));

            let outcomes = pool.run(addresses, cancel.clone());
            ResultCollector::new(total, Arc::clone(&self.observer))
                .consume(outcomes)
                .await
        };

        report.cancelled = cancel.is_cancelled() && report.completed < report.total;
        report.duration = start_time.elapsed();

        if report.cancelled {
            warn!(
                "Sweep interrupted after {} of {} probes",
                report.completed, report.total
            );
        }
        info!(
            "{} of {} hosts answered in {:.2}s",
            report.len(),
            report.total,
            report.duration.as_secs_f64()
        );

        self.observer.on_finish(&report);
        report
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
