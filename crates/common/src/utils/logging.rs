//! Tracing subscriber setup for the catalog binaries.
//!
//! `RUST_LOG` wins when set. Otherwise the filter depends on the configured
//! format: JSON output is meant for log shippers and also carries the
//! service-level `debug!` events (default template resolution, missed
//! updates).

use std::io;

use configs::LogFormat;
use tracing_subscriber::{fmt, EnvFilter};

const DRIVER_LEVELS: &str = "sea_orm=warn,sea_orm_migration=warn,sqlx=warn";

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(format: LogFormat) -> String {
    match format {
        LogFormat::Compact => format!("info,{DRIVER_LEVELS}"),
        LogFormat::Json => format!("info,service=debug,{DRIVER_LEVELS}"),
    }
}

/// Install the global subscriber for `format`. A second call is a no-op.
pub fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(format)));
    let builder = fmt().with_env_filter(env_filter).with_target(false).with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_filter_enables_service_debug_events() {
        let filter = default_filter(LogFormat::Json);
        assert!(filter.contains("service=debug"));
        assert!(filter.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn compact_filter_quiets_database_drivers() {
        let filter = default_filter(LogFormat::Compact);
        assert!(filter.starts_with("info,"));
        assert!(filter.contains("sqlx=warn"));
        assert!(!filter.contains("service=debug"));
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_logging(LogFormat::Compact);
        init_logging(LogFormat::Json);
        tracing::info!(event = "logging_ready", "subscriber installed");
    }
}
