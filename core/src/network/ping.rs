//! ICMP echo through the operating system's `ping` binary.
//!
//! Raw ICMP sockets need elevated privileges on most systems, the `ping`
//! binary does not. One echo request is sent per probe.

use std::net::IpAddr;
use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

use crate::prober::{ProbeFailure, ProbeOutcome, Prober};

const PING_PROGRAM: &str = "ping";
/// Slack on top of the probe timeout before the child is considered hung.
const DEADLINE_GRACE: Duration = Duration::from_secs(1);
/// iputils and BSD ping both exit with 1 when no reply came back.
const NO_REPLY_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone)]
pub struct PingProber {
    program: String,
}

impl Default for PingProber {
    fn default() -> Self {
        Self::new()
    }
}

impl PingProber {
    pub fn new() -> Self {
        Self::with_program(PING_PROGRAM)
    }

    /// Uses `program` instead of the `ping` found on `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, addr: IpAddr, wait: Duration) -> Command {
        let mut cmd = Command::new(&self.program);

        #[cfg(target_os = "windows")]
        cmd.args(["-n", "1", "-w", &wait.as_millis().max(1).to_string()]);

        #[cfg(target_os = "macos")]
        cmd.args(["-c", "1", "-W", &wait.as_millis().max(1).to_string()]);

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        cmd.args(["-c", "1", "-W", &wait_secs(wait).to_string()]);

        cmd.arg(addr.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, addr: IpAddr, wait: Duration) -> ProbeOutcome {
        let start: Instant = Instant::now();
        let child = match self.command(addr, wait).spawn() {
            Ok(child) => child,
            Err(e) => return ProbeFailure::Spawn(format!("{}: {e}", self.program)).into(),
        };

        // Dropping the child on expiry kills it.
        let deadline: Duration = wait + DEADLINE_GRACE;
        let output = match timeout(deadline, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return ProbeFailure::Abnormal(e.to_string()).into(),
            Err(_elapsed) => return ProbeFailure::Deadline(deadline).into(),
        };

        let elapsed: Duration = start.elapsed();
        trace!("ping {addr} exited with {:?} after {elapsed:?}", output.status.code());
        classify(output.status.code(), &output.stdout, &output.stderr, elapsed)
    }
}

/// Maps the exit status and output of one `ping` run to an outcome.
///
/// A zero exit without a TTL in the reply still counts as unreachable: some
/// platforms report "destination host unreachable" with a success status.
fn classify(code: Option<i32>, stdout: &[u8], stderr: &[u8], elapsed: Duration) -> ProbeOutcome {
    match code {
        Some(0) if has_ttl(stdout) => ProbeOutcome::Alive { elapsed },
        Some(0) | Some(NO_REPLY_EXIT_CODE) => ProbeOutcome::Unreachable,
        Some(code) => {
            let reason = String::from_utf8_lossy(stderr);
            ProbeFailure::Abnormal(format!("exit code {code}: {}", reason.trim())).into()
        }
        None => ProbeFailure::Abnormal("terminated by signal".to_string()).into(),
    }
}

fn has_ttl(stdout: &[u8]) -> bool {
    String::from_utf8_lossy(stdout)
        .to_ascii_lowercase()
        .contains("ttl=")
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn wait_secs(wait: Duration) -> u64 {
    wait.as_secs_f64().ceil().max(1.0) as u64
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const REPLY: &[u8] = b"64 bytes from 10.0.0.1: icmp_seq=1 ttl=64 time=0.045 ms\n";
    const WINDOWS_REPLY: &[u8] = b"Reply from 10.0.0.1: bytes=32 time<1ms TTL=128\r\n";
    const UNREACHABLE: &[u8] = b"Reply from 10.0.0.9: Destination host unreachable.\r\n";

    #[test]
    fn classify_reply_with_ttl_is_alive() {
        let elapsed = Duration::from_millis(50);
        assert_eq!(
            classify(Some(0), REPLY, b"", elapsed),
            ProbeOutcome::Alive { elapsed }
        );
        assert!(classify(Some(0), WINDOWS_REPLY, b"", elapsed).is_alive());
    }

    #[test]
    fn classify_negative_results_are_not_errors() {
        assert_eq!(
            classify(Some(0), UNREACHABLE, b"", Duration::ZERO),
            ProbeOutcome::Unreachable
        );
        assert_eq!(
            classify(Some(1), b"", b"", Duration::ZERO),
            ProbeOutcome::Unreachable
        );
    }

    #[test]
    fn classify_abnormal_exit_is_probe_error() {
        let outcome = classify(Some(2), b"", b"ping: unknown host\n", Duration::ZERO);
        assert_eq!(
            outcome,
            ProbeOutcome::ProbeError {
                cause: ProbeFailure::Abnormal("exit code 2: ping: unknown host".to_string())
            }
        );
        assert!(matches!(
            classify(None, b"", b"", Duration::ZERO),
            ProbeOutcome::ProbeError { .. }
        ));
    }

    #[tokio::test]
    async fn missing_program_is_probe_error() {
        let prober = PingProber::with_program("sweepr-definitely-not-a-ping-binary");
        let outcome = prober
            .probe(IpAddr::V4(Ipv4Addr::LOCALHOST), Duration::from_millis(100))
            .await;
        assert!(matches!(
            outcome,
            ProbeOutcome::ProbeError {
                cause: ProbeFailure::Spawn(_)
            }
        ));
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    #[test]
    fn wait_is_rounded_up_to_whole_seconds() {
        assert_eq!(wait_secs(Duration::from_millis(1)), 1);
        assert_eq!(wait_secs(Duration::from_millis(1_500)), 2);
        assert_eq!(wait_secs(Duration::from_secs(3)), 3);
    }

    #[tokio::test]
    #[ignore]
    async fn ping_loopback_is_alive() {
        let outcome = PingProber::new()
            .probe(IpAddr::V4(Ipv4Addr::LOCALHOST), Duration::from_secs(1))
            .await;
        assert!(outcome.is_alive(), "unexpected outcome: {outcome:?}");
    }
}
