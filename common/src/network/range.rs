use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use pnet::ipnetwork::IpNetwork;

/// An inclusive run of addresses of one family, iterated in address order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpRange {
    pub start_addr: IpAddr,
    pub end_addr: IpAddr,
}

impl IpRange {
    pub fn new(start_addr: IpAddr, end_addr: IpAddr) -> Self {
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn single(addr: IpAddr) -> Self {
        Self::new(addr, addr)
    }

    /// Number of addresses in the range. Mixed families or a reversed range count as zero.
    pub fn size(&self) -> u128 {
        match self.bounds() {
            Some((start, end, _)) => end - start + 1,
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn contains(&self, addr: &IpAddr) -> bool {
        let Some((start, end, is_v6)) = self.bounds() else {
            return false;
        };
        match (addr, is_v6) {
            (IpAddr::V4(v4), false) => (start..=end).contains(&u128::from(u32::from(*v4))),
            (IpAddr::V6(v6), true) => (start..=end).contains(&u128::from(*v6)),
            _ => false,
        }
    }

    pub fn to_iter(&self) -> impl Iterator<Item = IpAddr> + Send + use<> {
        let (start, end, is_v6) = self.bounds().unwrap_or((1, 0, false));
        (start..=end).map(move |n| match is_v6 {
            true => IpAddr::V6(Ipv6Addr::from(n)),
            false => IpAddr::V4(Ipv4Addr::from(n as u32)),
        })
    }

    fn bounds(&self) -> Option<(u128, u128, bool)> {
        let (start, end, is_v6) = match (self.start_addr, self.end_addr) {
            (IpAddr::V4(s), IpAddr::V4(e)) => {
                (u128::from(u32::from(s)), u128::from(u32::from(e)), false)
            }
            (IpAddr::V6(s), IpAddr::V6(e)) => (u128::from(s), u128::from(e), true),
            _ => return None,
        };
        (start <= end).then_some((start, end, is_v6))
    }
}

/// Usable host addresses of `network`.
///
/// IPv4 drops the network and broadcast addresses, IPv6 drops the
/// subnet-router anycast address. Point-to-point blocks (/31, /127) and
/// single-host blocks keep every address.
pub fn usable_hosts(network: IpNetwork) -> IpRange {
    match network {
        IpNetwork::V4(net) => {
            let prefix = u32::from(net.prefix());
            let first = u32::from(net.network());
            let last = first | u32::MAX.checked_shr(prefix).unwrap_or(0);
            let (start, end) = match prefix {
                32 | 31 => (first, last),
                _ => (first + 1, last - 1),
            };
            IpRange::new(Ipv4Addr::from(start).into(), Ipv4Addr::from(end).into())
        }
        IpNetwork::V6(net) => {
            let prefix = u32::from(net.prefix());
            let first = u128::from(net.network());
            let last = first | u128::MAX.checked_shr(prefix).unwrap_or(0);
            let start = match prefix {
                128 | 127 => first,
                _ => first + 1,
            };
            IpRange::new(Ipv6Addr::from(start).into(), Ipv6Addr::from(last).into())
        }
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
