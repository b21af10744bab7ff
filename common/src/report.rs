//! # Scan Report
//!
//! The single output artifact of a sweep: every host that answered, ranked by
//! the order in which the answers arrived.

use std::net::IpAddr;
use std::time::Duration;

/// A host that answered its liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliveHost {
    /// 1-based position in arrival order.
    pub rank: usize,
    pub addr: IpAddr,
    /// Wall-clock time between sending the probe and seeing the reply.
    pub elapsed: Duration,
}

impl AliveHost {
    /// Response time in seconds with two decimals, e.g. `"0.05"`.
    pub fn elapsed_secs(&self) -> String {
        format!("{:.2}", self.elapsed.as_secs_f64())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    hosts: Vec<AliveHost>,
    /// Addresses handed to the pool.
    pub total: usize,
    /// Outcomes actually observed. Lower than `total` only after cancellation.
    pub completed: usize,
    /// Probes whose mechanism failed outright.
    pub errors: usize,
    pub cancelled: bool,
    pub duration: Duration,
}

impl ScanReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Appends a responder and returns the entry with its rank.
    pub fn record_alive(&mut self, addr: IpAddr, elapsed: Duration) -> AliveHost {
        let host = AliveHost {
            rank: self.hosts.len() + 1,
            addr,
            elapsed,
        };
        self.hosts.push(host);
        host
    }

    pub fn hosts(&self) -> &[AliveHost] {
        &self.hosts
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn into_hosts(self) -> Vec<AliveHost> {
        self.hosts
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
