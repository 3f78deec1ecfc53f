//! Diagnostic logging for the `chatlens` binary.
//!
//! The library only emits `tracing` events. The binary installs a
//! `tracing-subscriber` formatter on stderr, so stdout stays reserved for the
//! dashboard or the export.
//!
//! Filtering comes from `RUST_LOG` when set, otherwise from the verbosity flag:
//!
//! | `-v` count | Level |
//! |------------|-------|
//! | 0 | `warn` |
//! | 1 | `debug` |
//! | 2+ | `trace` (logs every skipped line) |

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt};

/// Returns the default filter directive for a verbosity level.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global stderr subscriber.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
