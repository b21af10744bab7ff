//! Bounded fan-out of probes.
//!
//! Each address becomes its own tokio task, but never more than
//! `concurrency` of them exist at once. Outcomes are pushed to the consumer
//! in the order the probes finish.

use std::collections::HashMap;
use std::net::IpAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{self, JoinSet};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::prober::{ProbeFailure, ProbeOutcome, Prober};

/// Invoked as `(completed, total)` after every finished probe.
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

pub type OutcomeReceiver = mpsc::Receiver<(IpAddr, ProbeOutcome)>;

pub struct WorkPool {
    prober: Arc<dyn Prober>,
    concurrency: NonZeroUsize,
    probe_timeout: Duration,
    on_complete: Option<ProgressCallback>,
}

impl WorkPool {
    pub fn new(prober: Arc<dyn Prober>, concurrency: NonZeroUsize, probe_timeout: Duration) -> Self {
        Self {
            prober,
            concurrency,
            probe_timeout,
            on_complete: None,
        }
    }

    pub fn with_progress(mut self, on_complete: ProgressCallback) -> Self {
        self.on_complete = Some(on_complete);
        self
    }

    /// Starts probing `addresses` in the background and returns the outcome stream.
    ///
    /// Every address yields exactly one item unless `cancel` fires first, in
    /// which case no new probe is started, in-flight probes are abandoned and
    /// the stream ends early. The stream also ends once all outcomes are sent.
    pub fn run(self, addresses: Vec<IpAddr>, cancel: CancellationToken) -> OutcomeReceiver {
        let (tx, rx) = mpsc::channel(self.concurrency.get());
        tokio::spawn(self.drive(addresses, tx, cancel));
        rx
    }

    async fn drive(
        self,
        addresses: Vec<IpAddr>,
        tx: mpsc::Sender<(IpAddr, ProbeOutcome)>,
        cancel: CancellationToken,
    ) {
        let total: usize = addresses.len();
        let limit: usize = self.concurrency.get();
        let mut pending = addresses.into_iter();
        let mut in_flight: JoinSet<ProbeOutcome> = JoinSet::new();
        let mut owners: HashMap<task::Id, IpAddr> = HashMap::with_capacity(limit);
        let mut completed: usize = 0;

        debug!("Probing {total} addresses, at most {limit} at a time");

        loop {
            while in_flight.len() < limit && !cancel.is_cancelled() {
                let Some(addr) = pending.next() else { break };
                let prober = Arc::clone(&self.prober);
                let wait = self.probe_timeout;
                let handle = in_flight.spawn(async move { prober.probe(addr, wait).await });
                owners.insert(handle.id(), addr);
            }

            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Sweep cancelled with {} probes in flight", in_flight.len());
                    break;
                }
                joined = in_flight.join_next_with_id() => joined,
            };

            // Nothing in flight and nothing left to submit.
            let Some(joined) = joined else { break };

            let (id, outcome) = match joined {
                Ok((id, outcome)) => (id, outcome),
                Err(e) => {
                    error!("Probe task failed: {e}");
                    (e.id(), ProbeOutcome::from(ProbeFailure::Panicked))
                }
            };

            let Some(addr) = owners.remove(&id) else {
                continue;
            };

            completed += 1;
            if let Some(on_complete) = &self.on_complete {
                on_complete(completed, total);
            }

            if tx.send((addr, outcome)).await.is_err() {
                debug!("Outcome consumer went away, stopping pool");
                break;
            }
        }

        in_flight.abort_all();
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
