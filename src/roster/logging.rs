use crate::error::{Result, RosterError};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILENAME: &str = "log.txt";

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,roster=debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber.
/// - Respects `RUST_LOG` if set, otherwise `warn` (`warn,roster=debug` when verbose)
/// - Writes to stderr so stdout stays clean for record output
/// - With `log_dir`, also appends plain-text lines to `log.txt` there
///
/// Calling it twice is harmless; the second call leaves the first subscriber in place.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(RosterError::Io)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(LOG_FILENAME))
                .map_err(RosterError::Io)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}
