use std::collections::BTreeMap;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use ddragon_core::DdragonError;

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Print `value` as pretty JSON on stdout.
pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}

fn stderr() -> StandardStream {
    StandardStream::stderr(ColorChoice::Auto)
}

/// Stderr spinner; hidden in JSON mode.
pub fn spinner(msg: &str) -> anyhow::Result<ProgressBar> {
    if is_json() {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(msg.to_string());
    Ok(pb)
}

/// One red line per failed entity on stderr.
pub fn print_failures(failures: &BTreeMap<String, DdragonError>) -> io::Result<()> {
    if failures.is_empty() {
        return Ok(());
    }
    let mut err = stderr();
    for (name, e) in failures {
        err.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(err, "failed")?;
        err.reset()?;
        writeln!(err, " {name}: {e}")?;
    }
    Ok(())
}

/// A bold heading followed by `key: value` lines on stdout.
pub fn print_section(title: &str, rows: &[(&str, String)]) -> io::Result<()> {
    let mut out = stdout();
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{title}")?;
    out.reset()?;
    for (k, v) in rows {
        writeln!(out, "  {k:<14} {v}")?;
    }
    Ok(())
}

/// Failures keyed by name, rendered as message strings.
pub fn failure_messages(failures: &BTreeMap<String, DdragonError>) -> BTreeMap<String, String> {
    failures
        .iter()
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect()
}
