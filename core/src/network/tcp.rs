use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use sweepr_common::config::DEFAULT_TCP_PORT;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

use crate::prober::{ProbeFailure, ProbeOutcome, Prober};

/// Liveness through a single TCP handshake.
///
/// Any answer from the host counts, so a refused connection is as good as an
/// accepted one.
#[derive(Debug, Clone, Copy)]
pub struct TcpProber {
    port: u16,
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new(DEFAULT_TCP_PORT)
    }
}

impl TcpProber {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, addr: IpAddr, probe_timeout: Duration) -> ProbeOutcome {
        let socket_addr: SocketAddr = SocketAddr::new(addr, self.port);
        let start: Instant = Instant::now();

        match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
            Ok(Ok(_)) => ProbeOutcome::Alive {
                elapsed: start.elapsed(),
            },
            Ok(Err(e)) => classify_connect_error(&e, start.elapsed()),
            Err(_elapsed) => {
                trace!("{socket_addr} silent for {probe_timeout:?}");
                ProbeOutcome::Unreachable
            }
        }
    }
}

fn classify_connect_error(err: &std::io::Error, elapsed: Duration) -> ProbeOutcome {
    match err.kind() {
        ErrorKind::ConnectionRefused | ErrorKind::ConnectionReset => ProbeOutcome::Alive { elapsed },
        ErrorKind::HostUnreachable
        | ErrorKind::NetworkUnreachable
        | ErrorKind::TimedOut
        | ErrorKind::ConnectionAborted => ProbeOutcome::Unreachable,
        _ => ProbeFailure::Transport(err.to_string()).into(),
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
