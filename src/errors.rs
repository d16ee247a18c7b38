/*!
 * Error Types
 * Configuration errors with thiserror, miette, and serde support
 *
 * Pool operations themselves are total; only configuration can be rejected.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Pool configuration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: {reason}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Unset the variable to use the default, or provide a non-negative integer.")
    )]
    InvalidValue {
        var: String,
        value: String,
        reason: String,
    },

    #[error("Idle capacity must be greater than zero")]
    #[diagnostic(
        code(config::zero_capacity),
        help("Use `unbounded` to disable the idle limit instead of 0.")
    )]
    ZeroCapacity,

    #[error("Prefill of {prefill} exceeds idle capacity of {max_idle}")]
    #[diagnostic(
        code(config::prefill_exceeds_capacity),
        help("Lower the prefill count or raise the idle capacity.")
    )]
    PrefillExceedsCapacity { prefill: usize, max_idle: usize },
}
