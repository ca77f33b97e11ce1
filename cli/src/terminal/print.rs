//! Report rendering. Everything goes through the `mksnmp::print` log target
//! so output interleaves cleanly with log lines and the progress bar.

use std::cell::Cell;

use crate::terminal::{banner, colors};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const REPORT_WIDTH: usize = 64;

/// Events on this target are written verbatim, without a level symbol.
pub const PRINT_TARGET: &str = "mksnmp::print";

/// Width of the widest device field label ("Secondary DNS").
const FIELD_LABEL_WIDTH: usize = 13;

thread_local! {
    static SETTING_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

fn rule(ch: &str, width: usize) -> ColoredString {
    ch.repeat(width).color(colors::SEPARATOR)
}

/// Pads `label` with dots up to `width` and appends the colon.
fn dotted_label(label: ColoredString, plain_len: usize, width: usize) -> String {
    let dots = ".".repeat(width.saturating_sub(plain_len));
    format!("{}{}{}", label, dots.color(colors::SEPARATOR), ":".color(colors::SEPARATOR))
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!(" mksnmp v{} ", env!("CARGO_PKG_VERSION"));
    let side = REPORT_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str())) / 2;
    print(&format!(
        "{}{}{}",
        rule("═", side),
        title.bright_green().bold(),
        rule("═", side)
    ));
    banner::print();
}

/// A titled divider between report sections.
pub fn section(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title = format!("[ {} ]", title.to_uppercase());
    let fill = REPORT_WIDTH.saturating_sub(UnicodeWidthStr::width(title.as_str()));
    let left = fill / 2;
    print(&format!(
        "{}{}{}",
        rule("─", left),
        title.bright_green(),
        rule("─", fill - left)
    ));
}

pub fn heavy_rule() {
    print(&rule("═", REPORT_WIDTH).to_string());
}

/// Sets the label width [`setting`] pads to.
pub fn set_setting_width(width: usize) {
    SETTING_KEY_WIDTH.set(width);
}

/// One `key....: value` line of the run settings.
pub fn setting(key: &str, value: &str) {
    let label = dotted_label(key.color(colors::PRIMARY), key.len(), SETTING_KEY_WIDTH.get() + 1);
    print(&format!(
        "{} {} {}",
        ">".color(colors::SEPARATOR),
        label,
        value.color(colors::TEXT_DEFAULT)
    ));
}

pub fn device_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Field rows of one device, drawn as a single-level tree.
pub fn device_fields(rows: Vec<(String, ColoredString)>) {
    let count = rows.len();
    for (i, (label, value)) in rows.into_iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        let label = dotted_label(label.color(colors::TEXT_DEFAULT), label.len(), FIELD_LABEL_WIDTH);
        print(&format!(" {} {} {}", branch.bright_black(), label, value));
    }
}

pub fn centered(msg: &str) {
    let pad = " ".repeat(REPORT_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{pad}{msg}"));
}

const NO_ANSWER_ART: &str = r#"
         _   _  ___       _    _   _ ______        _______ ____
        | \ | |/ _ \     / \  | \ | / ___\ \      / / ____|  _ \
        |  \| | | | |   / _ \ |  \| \___ \\ \ /\ / /|  _| | |_) |
        | |\  | |_| |  / ___ \| |\  |___) |\ V  V / | |___|  _ <
        |_| \_|\___/  /_/   \_\_| \_|____/  \_/\_/  |_____|_| \_\
"#;

pub fn no_answer(q_level: u8) {
    if q_level > 1 {
        return;
    }
    print(&NO_ANSWER_ART.red().bold().to_string());
}

pub fn end_of_program(q_level: u8) {
    if q_level > 1 {
        return;
    }
    heavy_rule();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
