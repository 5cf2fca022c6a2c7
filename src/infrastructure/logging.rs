//! Logging initialization.
//!
//! Console output is always on; file output with daily rotation is enabled
//! by configuring a log directory. The non-blocking writer guard is returned
//! to the caller, which must hold it for the lifetime of the process.

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::LoggingConfig;

pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    // RUST_LOG wins over the configured default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, &config.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            Registry::default()
                .with(filter)
                .with(fmt::layer())
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init()?;

            Ok(Some(guard))
        }
        None => {
            Registry::default().with(filter).with(fmt::layer()).try_init()?;
            Ok(None)
        }
    }
}
