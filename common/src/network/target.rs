//! # Scan Target Model
//!
//! Turns user input into the block of addresses a sweep covers.
//!
//! Accepted forms:
//! * A CIDR block, IPv4 or IPv6 (e.g., `192.168.1.0/24`, `fd00::/120`).
//!   Host bits are allowed and masked off (`192.168.1.7/24` is `192.168.1.0/24`).
//! * A single address, treated as a one-host block.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;
use tracing::debug;

use crate::error::InputError;
use crate::network::range::{self, IpRange};

/// Largest number of hosts a single sweep will enumerate.
pub const MAX_SCAN_HOSTS: usize = 65_536;

/// A parsed, normalized address block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    network: IpNetwork,
}

impl FromStr for Target {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid(s, "input is empty"));
        }

        let (ip_str, prefix) = match trimmed.split_once('/') {
            Some((ip_str, prefix_str)) => {
                let prefix = prefix_str
                    .parse::<u8>()
                    .map_err(|e| invalid(s, format!("invalid prefix '{prefix_str}': {e}")))?;
                (ip_str, Some(prefix))
            }
            None => (trimmed, None),
        };

        let addr = ip_str
            .parse::<IpAddr>()
            .map_err(|e| invalid(s, format!("invalid address '{ip_str}': {e}")))?;
        let prefix = prefix.unwrap_or(max_prefix(&addr));

        let with_host_bits =
            IpNetwork::new(addr, prefix).map_err(|e| invalid(s, e.to_string()))?;
        let network = IpNetwork::new(with_host_bits.network(), prefix)
            .map_err(|e| invalid(s, e.to_string()))?;

        Ok(Self { network })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network.network(), self.network.prefix())
    }
}

impl Target {
    pub fn network(&self) -> IpNetwork {
        self.network
    }

    /// The usable hosts of this block, in address order.
    ///
    /// Fails when the block is larger than [`MAX_SCAN_HOSTS`].
    pub fn hosts(&self) -> Result<IpRange, InputError> {
        let hosts: IpRange = range::usable_hosts(self.network);
        let count: u128 = hosts.size();
        if count > MAX_SCAN_HOSTS as u128 {
            return Err(InputError::TooManyHosts {
                network: self.to_string(),
                count,
                limit: MAX_SCAN_HOSTS,
            });
        }
        debug!("{self} expands to {count} hosts");
        Ok(hosts)
    }

    /// Convenience for callers that want the addresses materialized.
    pub fn to_addresses(&self) -> Result<Vec<IpAddr>, InputError> {
        Ok(self.hosts()?.to_iter().collect())
    }
}

fn max_prefix(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}

fn invalid(input: &str, reason: impl Into<String>) -> InputError {
    InputError::InvalidCidr {
        input: input.to_string(),
        reason: reason.into(),
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
