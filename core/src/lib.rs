//! The sweep engine.
//!
//! Data flows one way: addresses go into the [`scanner::pool::WorkPool`],
//! which fans them out to a [`prober::Prober`] under a concurrency cap and
//! fans the outcomes back in, in completion order. The
//! [`scanner::collector::ResultCollector`] turns that stream into a ranked
//! [`ScanReport`](sweepr_common::report::ScanReport).
//! [`discovery::DiscoveryService`] wires the two together.

pub mod discovery;
pub mod network;
pub mod prober;
pub mod scanner;

#[cfg(test)]
pub(crate) mod testing;
