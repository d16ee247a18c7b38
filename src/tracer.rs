/*!
 * Tracing Setup
 * Structured logging subscriber for binaries and tests embedding the pool
 */

use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    EnvFilter,
};

pub const TRACE_JSON_VAR: &str = "MSGPOOL_TRACE_JSON";

/// Log line layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraceFormat {
    /// Human-readable output for development
    #[default]
    Compact,
    /// JSON output for production/parsing
    Json,
}

impl TraceFormat {
    /// Interpret a `MSGPOOL_TRACE_JSON` value; only `1` and `true` select JSON
    pub fn from_flag(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("1") | Some("true") => Self::Json,
            _ => Self::Compact,
        }
    }

    /// Read the format from the process environment
    pub fn from_env() -> Self {
        Self::from_flag(std::env::var(TRACE_JSON_VAR).ok().as_deref())
    }
}

/// Install the global tracing subscriber
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - MSGPOOL_TRACE_JSON: Enable JSON output (default: false)
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    init_tracing_with(TraceFormat::from_env())
}

/// Install the global tracing subscriber with an explicit layout
pub fn init_tracing_with(format: TraceFormat) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        TraceFormat::Json => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_thread_names(true)
                        .with_current_span(true)
                        .with_span_list(true),
                )
                .try_init()?;
        }
        TraceFormat::Compact => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_thread_names(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .compact(),
                )
                .try_init()?;
        }
    }

    info!(format = ?format, "Structured tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flag() {
        assert_eq!(TraceFormat::from_flag(None), TraceFormat::Compact);
        assert_eq!(TraceFormat::from_flag(Some("1")), TraceFormat::Json);
        assert_eq!(TraceFormat::from_flag(Some(" true ")), TraceFormat::Json);
        assert_eq!(TraceFormat::from_flag(Some("0")), TraceFormat::Compact);
        assert_eq!(TraceFormat::from_flag(Some("yes")), TraceFormat::Compact);
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_tracing_with(TraceFormat::Json);
        assert!(init_tracing_with(TraceFormat::Compact).is_err());
    }
}
