use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use sweepr_core::prober::{ProbeOutcome, Prober};

/// Replays a fixed outcome per address after an optional delay.
/// Unlisted addresses are unreachable.
#[derive(Default)]
pub struct ScriptedProber {
    script: HashMap<IpAddr, (Duration, ProbeOutcome)>,
    calls: Mutex<Vec<IpAddr>>,
}

impl ScriptedProber {
    pub fn answer(mut self, addr: &str, after: Duration, outcome: ProbeOutcome) -> Self {
        self.script.insert(addr.parse().unwrap(), (after, outcome));
        self
    }

    pub fn calls(&self) -> Vec<IpAddr> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, addr: IpAddr, _timeout: Duration) -> ProbeOutcome {
        self.calls.lock().unwrap().push(addr);
        match self.script.get(&addr) {
            Some((after, outcome)) => {
                tokio::time::sleep(*after).await;
                outcome.clone()
            }
            None => ProbeOutcome::Unreachable,
        }
    }
}

pub fn alive(ms: u64) -> ProbeOutcome {
    ProbeOutcome::Alive {
        elapsed: Duration::from_millis(ms),
    }
}
