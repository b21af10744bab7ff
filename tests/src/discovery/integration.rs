use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use sweepr_common::config::{Config, ProbeMethod};
use sweepr_common::error::InputError;
use sweepr_core::discovery::DiscoveryService;
use sweepr_core::prober::{ProbeFailure, ProbeOutcome};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::utils::{ScriptedProber, alive};

fn config(concurrency: usize) -> Config {
    Config {
        concurrency: NonZeroUsize::new(concurrency).unwrap(),
        probe_timeout: Duration::from_millis(500),
        ..Config::default()
    }
}

/// A /30 has exactly two usable hosts; only the first answers.
#[tokio::test]
async fn discovery_reports_only_responders() {
    let prober = ScriptedProber::default()
        .answer("10.0.0.1", Duration::ZERO, alive(50))
        .answer("10.0.0.2", Duration::ZERO, ProbeOutcome::Unreachable);
    let service = DiscoveryService::new(Arc::new(prober), &config(8));

    let report = service
        .discover("10.0.0.0/30", CancellationToken::new())
        .await
        .expect("valid CIDR");

    assert_eq!(report.total, 2);
    assert_eq!(report.len(), 1);
    let host = report.hosts()[0];
    assert_eq!(host.rank, 1);
    assert_eq!(host.addr, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
    assert_eq!(host.elapsed_secs(), "0.05");
}

/// First to answer is ranked first, whatever its address.
#[tokio::test]
async fn discovery_ranks_by_response_order() {
    let prober = ScriptedProber::default()
        .answer("192.168.7.1", Duration::from_millis(80), alive(80))
        .answer("192.168.7.2", Duration::from_millis(40), alive(40))
        .answer("192.168.7.5", Duration::ZERO, alive(1));
    let service = DiscoveryService::new(Arc::new(prober), &config(8));

    let report = service
        .discover("192.168.7.0/29", CancellationToken::new())
        .await
        .unwrap();

    let order: Vec<String> = report.hosts().iter().map(|h| h.addr.to_string()).collect();
    assert_eq!(order, ["192.168.7.5", "192.168.7.2", "192.168.7.1"]);
    let ranks: Vec<usize> = report.hosts().iter().map(|h| h.rank).collect();
    assert_eq!(ranks, [1, 2, 3]);
    assert_eq!(report.completed, 6);
}

#[tokio::test]
async fn discovery_rejects_malformed_cidr_without_probing() {
    let prober = Arc::new(ScriptedProber::default());
    let service = DiscoveryService::new(prober.clone(), &config(8));

    let result = service.discover("not-a-cidr", CancellationToken::new()).await;

    assert!(matches!(result, Err(InputError::InvalidCidr { .. })));
    assert!(prober.calls().is_empty());
}

#[tokio::test]
async fn discovery_survives_probe_errors() {
    let prober = ScriptedProber::default()
        .answer("10.1.0.1", Duration::ZERO, alive(2))
        .answer(
            "10.1.0.2",
            Duration::ZERO,
            ProbeFailure::Spawn("ping: not found".to_string()).into(),
        )
        .answer("10.1.0.3", Duration::from_millis(20), alive(20));
    let prober = Arc::new(prober);
    let service = DiscoveryService::new(prober.clone(), &config(2));

    let report = service
        .discover("10.1.0.0/29", CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(prober.calls().len(), 6);
    assert_eq!(report.errors, 1);
    let ranked: Vec<(usize, String)> = report
        .hosts()
        .iter()
        .map(|h| (h.rank, h.addr.to_string()))
        .collect();
    assert_eq!(
        ranked,
        [(1, "10.1.0.1".to_string()), (2, "10.1.0.3".to_string())]
    );
}

/// Every usable address of the block is probed exactly once.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn discovery_probes_each_host_once() {
    let prober = Arc::new(ScriptedProber::default());
    let service = DiscoveryService::new(prober.clone(), &config(16));

    let report = service
        .discover("172.20.1.0/24", CancellationToken::new())
        .await
        .unwrap();

    let mut calls = prober.calls();
    calls.sort();
    calls.dedup();
    assert_eq!(calls.len(), 254);
    assert_eq!(prober.calls().len(), 254);
    assert_eq!(report.completed, 254);
    assert!(report.is_empty());
}

/// Real TCP prober against a listener on loopback.
#[tokio::test]
async fn tcp_discovery_single_loopback() {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let cfg = Config {
        method: ProbeMethod::Tcp { port },
        ..config(4)
    };
    let service = DiscoveryService::from_config(&cfg);

    let report = service
        .discover("127.0.0.1/32", CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.len(), 1, "No hosts found when sweeping localhost");
    assert_eq!(report.hosts()[0].addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
}

/// Needs the system `ping` binary and permission to use it.
#[tokio::test]
#[ignore]
async fn ping_discovery_single_loopback() {
    let service = DiscoveryService::from_config(&config(4));

    let report = service
        .discover("127.0.0.1", CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.len(), 1);
}
