//! Logging infrastructure for FitTrack.
//!
//! Provides centralized tracing setup for the binary. Output goes to stderr
//! so it never interleaves with shell output on stdout.

use crate::{Error, Result};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Level used until the configured one is applied
pub const DEFAULT_LEVEL: &str = "warn";

/// Handle for changing the filter after the subscriber is installed
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Initialize logging at [`DEFAULT_LEVEL`]
///
/// Call this before loading configuration so config loading is logged too,
/// then apply the configured level with [`LogHandle::set_level`].
/// RUST_LOG, when set, wins over both.
pub fn init() -> LogHandle {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let filter = env_filter.unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();

    LogHandle {
        filter: handle,
        from_env,
    }
}

impl LogHandle {
    /// Switch to `level` (debug, info, warn, error) unless RUST_LOG is set
    pub fn set_level(&self, level: &str) -> Result<()> {
        if self.from_env {
            return Ok(());
        }
        self.filter
            .reload(EnvFilter::new(level))
            .map_err(|e| Error::Config(format!("cannot apply log level '{}': {}", level, e)))
    }
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
