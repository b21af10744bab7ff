use std::sync::Arc;

use colored::*;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info_span, warn};

use crate::terminal::{colors, print, progress::SweepProgress};
use sweepr_common::{config::Config, report::ScanReport};
use sweepr_core::discovery::DiscoveryService;

pub async fn discover(input: &str, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("sweep", indicatif.pb_show = true);
    let observer = Arc::new(SweepProgress::new(span.clone()));
    let service = DiscoveryService::from_config(cfg).with_observer(observer);

    let cancel = CancellationToken::new();
    let interrupt_handle = cancel_on_interrupt(cancel.clone());

    let result = service.discover(input, cancel).instrument(span).await;
    interrupt_handle.abort();

    // Release the last span handle so the progress bar is cleared before printing.
    drop(service);

    let report: ScanReport = result?;
    sweep_ends(&report, cfg);
    Ok(())
}

fn cancel_on_interrupt(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, wrapping up with the hosts found so far");
            cancel.cancel();
        }
    })
}

fn sweep_ends(report: &ScanReport, cfg: &Config) {
    if report.is_empty() {
        no_hosts_found(report, cfg);
        return;
    }

    print::header("live hosts", cfg.quiet);
    print_hosts(report, cfg);
    print_summary(report, cfg);
}

fn no_hosts_found(report: &ScanReport, cfg: &Config) {
    print::header("ZERO HOSTS DETECTED", cfg.quiet);
    print::no_results(cfg.quiet);
    print_warnings(report, cfg);
}

fn print_hosts(report: &ScanReport, cfg: &Config) {
    match cfg.quiet {
        2.. => report.hosts().iter().for_each(print::bare_row),
        _ => {
            print::table_head();
            report.hosts().iter().for_each(print::table_row);
        }
    }
}

fn print_summary(report: &ScanReport, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let active_hosts: ColoredString = format!("{} active hosts", report.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", report.duration.as_secs_f64()).bold().yellow();
    let output: String = format!("Sweep Complete: {active_hosts} identified in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    print::fat_separator();
    print::centerln(&output);
    print_warnings(report, cfg);
}

fn print_warnings(report: &ScanReport, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    if report.cancelled {
        print::print_status(format!(
            "Interrupted after {} of {} probes",
            report.completed, report.total
        ));
    }
    if report.errors > 0 {
        let unit: &str = if report.errors == 1 { "probe" } else { "probes" };
        print::print_status(format!("{} {unit} failed to run, see the log above", report.errors));
    }
}
