/*!
 * Object Pool
 *
 * Concurrent free-list of reusable values with a fallback constructor.
 *
 * # Ownership
 *
 * - `acquire()` moves an item out to the caller
 * - `release(item)` moves it back; the caller's binding is consumed
 * - `checkout()` wraps the item in a guard that releases on drop
 *
 * # Performance
 *
 * - Free-list is lock-free (`SegQueue` unbounded, `ArrayQueue` bounded)
 * - Counters are relaxed atomics, off the critical ordering path
 * - No allocation when a parked item is available
 */

mod free_list;
mod guard;
mod stats;

pub use guard::Pooled;
pub use stats::PoolStats;

use crate::config::PoolConfig;
use crate::errors::ConfigResult;
use free_list::FreeList;
use stats::Counters;
use std::fmt;
use tracing::{debug, trace};

/// Thread-safe object pool
///
/// Hands out parked items in no particular order. Items are never reset on
/// release: a caller that needs a clean value must reset it before or after
/// the round trip.
pub struct Pool<T> {
    free: FreeList<T>,
    factory: fn() -> T,
    counters: Counters,
}

impl<T> Pool<T> {
    /// Create an unbounded, empty pool
    pub fn new(factory: fn() -> T) -> Self {
        Self {
            free: FreeList::new(None),
            factory,
            counters: Counters::default(),
        }
    }

    /// Create a pool from configuration, prefilling it if requested
    pub fn with_config(factory: fn() -> T, config: &PoolConfig) -> ConfigResult<Self> {
        config.validate()?;

        let pool = Self {
            free: FreeList::new(config.max_idle),
            factory,
            counters: Counters::default(),
        };

        for _ in 0..config.prefill {
            let item = pool.allocate();
            // Validation keeps prefill within capacity
            let _ = pool.free.push(item);
        }

        Ok(pool)
    }

    /// Take an item, constructing one if none are parked
    #[inline]
    pub fn acquire(&self) -> T {
        self.counters.record_acquire();
        match self.free.pop() {
            Some(item) => {
                trace!(idle = self.free.len(), "Acquired parked item");
                item
            }
            None => {
                trace!("Pool empty, constructing item");
                self.allocate()
            }
        }
    }

    /// Park an item for reuse
    ///
    /// The item is stored as-is and the caller's binding is consumed. On a
    /// bounded pool at capacity it is dropped instead.
    ///
    /// ```compile_fail
    /// let pool = msgpool::Pool::new(msgpool::Message::default);
    /// let mut msg = pool.acquire();
    /// pool.release(msg);
    /// msg.count = 1;
    /// ```
    #[inline]
    pub fn release(&self, item: T) {
        self.counters.record_release();
        match self.free.push(item) {
            Ok(()) => trace!(idle = self.free.len(), "Released item to pool"),
            Err(overflow) => {
                self.counters.record_discard();
                debug!(
                    capacity = self.free.capacity(),
                    "Pool at capacity, discarding released item"
                );
                drop(overflow);
            }
        }
    }

    /// Take an item wrapped in a guard that releases it on drop
    #[inline]
    pub fn checkout(&self) -> Pooled<'_, T> {
        Pooled::new(self.acquire(), self)
    }

    /// Number of parked items
    #[inline]
    pub fn idle(&self) -> usize {
        self.free.len()
    }

    /// Idle capacity, `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        self.free.capacity()
    }

    /// Snapshot of usage counters
    pub fn stats(&self) -> PoolStats {
        self.counters.snapshot(self.free.len())
    }

    fn allocate(&self) -> T {
        self.counters.record_allocation();
        (self.factory)()
    }
}

impl<T: Default> Default for Pool<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("idle", &self.idle())
            .field("capacity", &self.capacity())
            .field("stats", &self.stats())
            .finish()
    }
}
