//! Fan-out/fan-in machinery and the sink interface it reports through.

pub mod collector;
pub mod pool;

use std::net::IpAddr;

use sweepr_common::report::{AliveHost, ScanReport};

use crate::prober::ProbeFailure;

/// Receives live updates from a running sweep.
///
/// Every method has a no-op default so sinks only implement what they show.
/// Calls may arrive from worker threads.
pub trait ScanObserver: Send + Sync {
    fn on_start(&self, _total: usize) {}

    /// Called once per finished probe, whatever its outcome.
    fn on_progress(&self, _completed: usize, _total: usize) {}

    fn on_alive(&self, _host: &AliveHost) {}

    fn on_probe_error(&self, _addr: IpAddr, _cause: &ProbeFailure) {}

    fn on_finish(&self, _report: &ScanReport) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
