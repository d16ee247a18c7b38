/*!
 * Message Pool Library
 * Process-wide, lazily constructed pool of reusable messages
 *
 * # Example
 *
 * ```
 * use msgpool::{init_tracing, instance};
 *
 * // Optional: structured logs (RUST_LOG, MSGPOOL_TRACE_JSON)
 * init_tracing().ok();
 *
 * let pool = instance();
 * let mut msg = pool.acquire();
 * msg.count = 5;
 * pool.release(msg);
 *
 * // Items come back as they were released
 * assert_eq!(pool.acquire().count, 5);
 * ```
 */

pub mod config;
pub mod core;
pub mod errors;
pub mod global;
pub mod message;
pub mod pool;
pub mod tracer;

// Re-exports
pub use config::PoolConfig;
pub use errors::{ConfigError, ConfigResult};
pub use global::{instance, MessagePool};
pub use message::Message;
pub use pool::{Pool, PoolStats, Pooled};
pub use tracer::{init_tracing, init_tracing_with, TraceFormat};
