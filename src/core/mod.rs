/*!
 * Core Module
 * Synchronization building blocks shared by the pool
 */

pub mod once;

// Re-export for convenience
pub use once::Singleton;
