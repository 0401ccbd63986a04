//! Logging bootstrap for the binary.
//!
//! Library code only talks to the `log` facade; the binary installs a
//! stderr logger once at startup. `RUST_LOG` overrides the verbosity flag.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Maps the `-v` count to a log level.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts the stderr logger.
///
/// The returned handle must be kept alive until the program exits.
pub fn init_logging(verbosity: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level_for(verbosity))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
}
