use tracing_subscriber::filter::LevelFilter;

use crate::error::{AppError, ConfigError};

/// Install a compact stderr subscriber at `level` ("off", "error", ... "trace").
pub fn setup_logging(level: &str) -> Result<(), AppError> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", level)))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
