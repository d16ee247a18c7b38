/*!
 * Pool Configuration
 *
 * Idle-capacity and prefill settings, loaded from the environment when the
 * global pool is first constructed.
 *
 * Environment variables:
 * - MSGPOOL_MAX_IDLE: maximum parked items, or `unbounded` (default: unbounded)
 * - MSGPOOL_PREFILL: items built up front at construction (default: 0)
 */

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

pub const MAX_IDLE_VAR: &str = "MSGPOOL_MAX_IDLE";
pub const PREFILL_VAR: &str = "MSGPOOL_PREFILL";

/// Pool configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Upper bound on parked items; `None` lets the free-list grow freely
    pub max_idle: Option<usize>,
    /// Items constructed and parked when the pool is built
    pub prefill: usize,
}

impl PoolConfig {
    /// Unbounded pool, no prefill
    pub const fn unbounded() -> Self {
        Self {
            max_idle: None,
            prefill: 0,
        }
    }

    /// Pool that parks at most `max_idle` items
    pub const fn bounded(max_idle: usize) -> Self {
        Self {
            max_idle: Some(max_idle),
            prefill: 0,
        }
    }

    /// Set the prefill count
    pub const fn with_prefill(mut self, prefill: usize) -> Self {
        self.prefill = prefill;
        self
    }

    /// Load from process environment, falling back to defaults for unset variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_IDLE_VAR) {
            let raw = raw.trim();
            config.max_idle = if raw.eq_ignore_ascii_case("unbounded") {
                None
            } else {
                Some(parse_count(MAX_IDLE_VAR, raw)?)
            };
        }

        if let Some(raw) = lookup(PREFILL_VAR) {
            config.prefill = parse_count(PREFILL_VAR, raw.trim())?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check settings for consistency
    pub fn validate(&self) -> ConfigResult<()> {
        match self.max_idle {
            Some(0) => Err(ConfigError::ZeroCapacity),
            Some(max_idle) if self.prefill > max_idle => Err(ConfigError::PrefillExceedsCapacity {
                prefill: self.prefill,
                max_idle,
            }),
            _ => Ok(()),
        }
    }
}

fn parse_count(var: &str, raw: &str) -> ConfigResult<usize> {
    raw.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
