pub mod discover;

use std::num::NonZeroUsize;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use sweepr_common::config::{Config, DEFAULT_TCP_PORT, ProbeMethod};

#[derive(Parser)]
#[command(name = "sweepr", version)]
#[command(about = "Finds the live hosts of a network, fast.")]
pub struct CommandLine {
    /// Network to sweep in CIDR notation (e.g. 192.168.1.0/24). Prompted for when omitted
    pub target: Option<String>,

    /// Maximum number of probes in flight at once
    #[arg(short, long, default_value = "100")]
    pub concurrency: NonZeroUsize,

    /// Time to wait for each probe, in milliseconds
    #[arg(short, long, value_name = "MS", default_value_t = 1_000, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// How hosts are probed
    #[arg(short, long, value_enum, default_value_t = Method::Ping)]
    pub method: Method,

    /// Port used by the tcp method
    #[arg(short, long, default_value_t = DEFAULT_TCP_PORT)]
    pub port: u16,

    /// Print less; repeat for bare output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// ICMP echo through the system ping binary
    Ping,
    /// TCP handshake, any answer counts
    Tcp,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let method = match self.method {
            Method::Ping => ProbeMethod::Ping,
            Method::Tcp => ProbeMethod::Tcp { port: self.port },
        };

        Config {
            concurrency: self.concurrency,
            probe_timeout: Duration::from_millis(self.timeout),
            method,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
