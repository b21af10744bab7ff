//! The liveness-check capability.
//!
//! A [`Prober`] sends exactly one probe to one address and reports what
//! happened as data. It never retries and never returns `Err`: a broken probe
//! mechanism is just another [`ProbeOutcome`].

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The host answered after `elapsed`.
    Alive { elapsed: Duration },
    /// The probe ran to completion and nobody answered.
    Unreachable,
    /// The probe mechanism itself failed.
    ProbeError { cause: ProbeFailure },
}

impl ProbeOutcome {
    pub fn is_alive(&self) -> bool {
        matches!(self, ProbeOutcome::Alive { .. })
    }
}

impl From<ProbeFailure> for ProbeOutcome {
    fn from(cause: ProbeFailure) -> Self {
        ProbeOutcome::ProbeError { cause }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    #[error("failed to start probe: {0}")]
    Spawn(String),
    #[error("probe did not finish within {0:?}")]
    Deadline(Duration),
    #[error("probe exited abnormally: {0}")]
    Abnormal(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("probe task panicked")]
    Panicked,
}

/// Sends a single liveness probe.
///
/// Implementations hold no per-call state and must be safe to call
/// concurrently for distinct addresses.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, addr: IpAddr, timeout: Duration) -> ProbeOutcome;
}
