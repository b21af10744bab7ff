//! Probers with scripted behaviour for unit tests.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::prober::{ProbeOutcome, Prober};

pub fn addr(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
}

pub fn addrs(lasts: RangeInclusive<u8>) -> Vec<IpAddr> {
    lasts.map(addr).collect()
}

/// Fixed outcome per address, `Alive` for anything not listed.
#[derive(Default)]
pub struct MockProber {
    outcomes: HashMap<IpAddr, ProbeOutcome>,
    delays: HashMap<IpAddr, Duration>,
    jitter: bool,
}

impl MockProber {
    pub fn with_outcome(mut self, addr: IpAddr, outcome: ProbeOutcome) -> Self {
        self.outcomes.insert(addr, outcome);
        self
    }

    pub fn with_delay(mut self, addr: IpAddr, delay: Duration) -> Self {
        self.delays.insert(addr, delay);
        self
    }

    /// Delays every probe by a few milliseconds derived from the address.
    pub fn with_jitter(mut self) -> Self {
        self.jitter = true;
        self
    }
}

#[async_trait]
impl Prober for MockProber {
    async fn probe(&self, addr: IpAddr, _timeout: Duration) -> ProbeOutcome {
        let delay = match (self.delays.get(&addr), self.jitter, addr) {
            (Some(delay), _, _) => Some(*delay),
            (None, true, IpAddr::V4(v4)) => Some(Duration::from_millis(u64::from(v4.octets()[3] % 7))),
            _ => None,
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.outcomes
            .get(&addr)
            .cloned()
            .unwrap_or(ProbeOutcome::Alive {
                elapsed: Duration::from_millis(1),
            })
    }
}

/// Blocks every probe until the test hands out permits, tracking concurrency.
pub struct GatedProber {
    gate: Semaphore,
    pub started: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub peak: AtomicUsize,
}

impl GatedProber {
    pub fn new() -> Self {
        Self {
            gate: Semaphore::new(0),
            started: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }
}

#[async_trait]
impl Prober for GatedProber {
    async fn probe(&self, _addr: IpAddr, _timeout: Duration) -> ProbeOutcome {
        self.started.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        self.gate.acquire().await.unwrap().forget();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        ProbeOutcome::Alive {
            elapsed: Duration::from_millis(1),
        }
    }
}

/// Panics when asked to probe one specific address.
pub struct PanickingProber {
    target: IpAddr,
}

impl PanickingProber {
    pub fn on(target: IpAddr) -> Self {
        Self { target }
    }
}

#[async_trait]
impl Prober for PanickingProber {
    async fn probe(&self, addr: IpAddr, _timeout: Duration) -> ProbeOutcome {
        if addr == self.target {
            panic!("probe for {addr} blew up");
        }
        ProbeOutcome::Unreachable
    }
}
