use std::ffi::OsString;
use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file
pub const LOG_ENV: &str = "TODOS_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `TODOS_LOG` names a file, so nothing is ever
/// written over the terminal UI. The level comes from `RUST_LOG`
/// (default `info`).
pub fn init_logging() {
    install_file_logger(std::env::var_os(LOG_ENV));
}

/// Install the file subscriber for `log_path`. Returns false when there is
/// no path or the file cannot be created; nothing is installed then.
fn install_file_logger(log_path: Option<OsString>) -> bool {
    let Some(log_path) = log_path else {
        return false;
    };

    let file = match File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "warning: could not create log file {}: {}",
                log_path.to_string_lossy(),
                e
            );
            return false;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A second init (e.g. from tests) is not an error worth reporting
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
    true
}
