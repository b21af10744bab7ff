use crate::terminal::colors;
use colored::*;
use std::net::IpAddr;
use sweepr_common::report::AliveHost;

pub const RANK_WIDTH: usize = 6;
/// Wide enough for a fully expanded IPv6 address.
pub const ADDR_WIDTH: usize = 39;
pub const TIME_WIDTH: usize = 13;

// Pad first, colour second: escape codes would count towards the width.
pub fn rank_cell(rank: usize) -> ColoredString {
    format!("{:>width$}", rank, width = RANK_WIDTH).color(colors::ACCENT)
}

pub fn addr_cell(addr: &IpAddr) -> ColoredString {
    let padded: String = format!("{:<width$}", addr.to_string(), width = ADDR_WIDTH);
    match addr {
        IpAddr::V4(_) => padded.color(colors::IPV4_ADDR),
        IpAddr::V6(_) => padded.color(colors::IPV6_ADDR),
    }
}

pub fn elapsed_cell(host: &AliveHost) -> ColoredString {
    format!("{:>width$}", host.elapsed_secs(), width = TIME_WIDTH).color(colors::ELAPSED)
}
