use std::num::NonZeroUsize;
use std::time::Duration;

pub const DEFAULT_CONCURRENCY: usize = 100;
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_TCP_PORT: u16 = 443;

/// How a single host is checked for liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// One echo request through the system `ping` binary.
    Ping,
    /// One TCP handshake attempt against `port`.
    Tcp { port: u16 },
}

pub struct Config {
    /// Upper bound on probes in flight at the same time.
    pub concurrency: NonZeroUsize,
    /// Wait applied to every single probe.
    pub probe_timeout: Duration,
    pub method: ProbeMethod,
    /// 0 prints everything, 1 drops headers, 2 prints the bare table.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: NonZeroUsize::new(DEFAULT_CONCURRENCY).unwrap_or(NonZeroUsize::MIN),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            method: ProbeMethod::Ping,
            quiet: 0,
            no_banner: false,
        }
    }
}
