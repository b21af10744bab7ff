//! Concrete [`Prober`](crate::prober::Prober) implementations.

pub mod ping;
pub mod tcp;

use std::sync::Arc;

use sweepr_common::config::ProbeMethod;

use crate::prober::Prober;

pub use ping::PingProber;
pub use tcp::TcpProber;

/// Builds the prober matching the configured method.
pub fn prober_for(method: ProbeMethod) -> Arc<dyn Prober> {
    match method {
        ProbeMethod::Ping => Arc::new(PingProber::new()),
        ProbeMethod::Tcp { port } => Arc::new(TcpProber::new(port)),
    }
}
