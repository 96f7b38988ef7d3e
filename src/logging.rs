//! Tracing initialization.
//! Builds a subscriber with EnvFilter and compact or JSON formatting.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - Logs go to stderr; stdout is reserved for `original -> final` lines.
//! - ANSI colors only when stderr is a TTY.

use anyhow::{Context, Result};
use chrono::Local;
use fn_clean::LogLevel;
use fn_clean::output as out;
use std::fmt as stdfmt;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn to_level_filter(lvl: LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Verbose => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Call once, before any file is processed.
pub fn init_tracing(lvl: LogLevel, json: bool) -> Result<()> {
    let env_filter = EnvFilter::default().add_directive(to_level_filter(lvl).into());

    if json {
        let layer = tsfmt::layer()
            .event_format(tsfmt::format().json())
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(true)
            .with_writer(std::io::stderr);
        registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .context("install JSON log subscriber")?;
    } else {
        let layer = tsfmt::layer()
            .with_timer(LocalHumanTime)
            .with_level(true)
            .with_target(false)
            .with_ansi(out::stderr_is_tty())
            .compact()
            .with_writer(std::io::stderr);
        registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .context("install log subscriber")?;
    }
    Ok(())
}
