use std::net::Ipv4Addr;

use colored::*;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::colors;

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

fn scan_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} [{bar:32.green/white}] {pos}/{len} {msg}")
        .map(|style| style.tick_strings(TICKS).progress_chars("█▓░"))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Turns `span` into a progress bar over `len` addresses.
pub fn attach(span: &Span, len: u64) {
    span.pb_set_style(&scan_style());
    span.pb_set_length(len);
}

pub fn advance(span: &Span, addr: Ipv4Addr, answered: bool) {
    span.pb_inc(1);
    let addr = addr.to_string().color(colors::IPV4_ADDR);
    let msg = if answered {
        format!("{} {}", addr, "answered".green().bold())
    } else {
        format!("{} {}", addr, "silent".color(colors::MUTED))
    };
    span.pb_set_message(&msg);
}
