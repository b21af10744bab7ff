use std::net::IpAddr;
use std::sync::Arc;

use sweepr_common::report::ScanReport;
use tracing::{debug, trace, warn};

use super::ScanObserver;
use super::pool::OutcomeReceiver;
use crate::prober::ProbeOutcome;

/// Folds the outcome stream into a [`ScanReport`].
///
/// The collector is the report's only writer. Responders are ranked in the
/// order their outcomes arrive; everything else is counted and dropped.
pub struct ResultCollector {
    report: ScanReport,
    observer: Arc<dyn ScanObserver>,
}

impl ResultCollector {
    pub fn new(total: usize, observer: Arc<dyn ScanObserver>) -> Self {
        Self {
            report: ScanReport::new(total),
            observer,
        }
    }

    /// Reads until the stream is exhausted and returns the finished report.
    pub async fn consume(mut self, mut outcomes: OutcomeReceiver) -> ScanReport {
        while let Some((addr, outcome)) = outcomes.recv().await {
            self.record(addr, outcome);
        }
        self.finish()
    }

    pub fn record(&mut self, addr: IpAddr, outcome: ProbeOutcome) {
        self.report.completed += 1;

        match outcome {
            ProbeOutcome::Alive { elapsed } => {
                let host = self.report.record_alive(addr, elapsed);
                debug!("#{} {addr} answered in {elapsed:?}", host.rank);
                self.observer.on_alive(&host);
            }
            ProbeOutcome::Unreachable => trace!("{addr} did not answer"),
            ProbeOutcome::ProbeError { cause } => {
                self.report.errors += 1;
                warn!("Probing {addr} failed: {cause}");
                self.observer.on_probe_error(addr, &cause);
            }
        }
    }

    pub fn finish(self) -> ScanReport {
        self.report
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
