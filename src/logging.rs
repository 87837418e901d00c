//! Diagnostic output on stderr; stdout is reserved for the JSON-LD document.

use std::io;

use exifcase_config::{LogConfig, LogFormat};
use exn::ResultExt;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{ErrorKind, Result};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when it is set and valid. Otherwise `log.level` is used,
/// with the global level replaced by `-v` (info), `-vv` (debug) or `-vvv` (trace).
pub fn init(config: &LogConfig, verbosity: u8) -> Result<()> {
    let filter = filter(config, verbosity)?;
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr).with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(io::stderr))
            .try_init(),
    };
    installed.or_raise(|| ErrorKind::Logging)
}

fn filter(config: &LogConfig, verbosity: u8) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let filter = EnvFilter::try_new(&config.level).or_raise(|| ErrorKind::Logging)?;
    Ok(match verbosity_level(verbosity) {
        Some(level) => filter.add_directive(level.into()),
        None => filter,
    })
}

fn verbosity_level(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::INFO),
        2 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}
