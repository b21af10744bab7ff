use colored::*;
use indicatif::ProgressStyle;
use sweepr_common::report::{AliveHost, ScanReport};
use sweepr_core::scanner::ScanObserver;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str = "{spinner:.blue} {msg} [{bar:32.green/bright_black}] {pos}/{len} ({elapsed})";
const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub fn sweep_style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICKS)
        .progress_chars("━╸ ")
}

fn alive_message(count: usize) -> String {
    format!("Identified {} so far...", format!("{count} hosts").green().bold())
}

/// Drives the progress bar attached to a tracing span.
pub struct SweepProgress {
    span: Span,
}

impl SweepProgress {
    pub fn new(span: Span) -> Self {
        span.pb_set_style(&sweep_style());
        span.pb_set_message(&alive_message(0));
        Self { span }
    }
}

impl ScanObserver for SweepProgress {
    fn on_start(&self, total: usize) {
        self.span.pb_set_length(total as u64);
    }

    fn on_progress(&self, completed: usize, _total: usize) {
        self.span.pb_set_position(completed as u64);
    }

    fn on_alive(&self, host: &AliveHost) {
        self.span.pb_set_message(&alive_message(host.rank));
    }

    fn on_finish(&self, report: &ScanReport) {
        self.span.pb_set_position(report.completed as u64);
    }
}
