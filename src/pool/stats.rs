/*!
 * Pool Statistics
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time pool statistics
///
/// Counters are sampled independently, so a snapshot taken while other
/// threads are active may be slightly inconsistent with `idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Items handed out by `acquire`/`checkout`
    pub acquired: u64,
    /// Items handed back by `release` or a dropped guard
    pub released: u64,
    /// Items built by the fallback constructor (prefill included)
    pub allocated: u64,
    /// Released items dropped because the pool was at capacity
    pub discarded: u64,
    /// Items currently parked
    pub idle: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    acquired: AtomicU64,
    released: AtomicU64,
    allocated: AtomicU64,
    discarded: AtomicU64,
}

impl Counters {
    #[inline]
    pub(crate) fn record_acquire(&self) {
        self.acquired.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_release(&self) {
        self.released.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_allocation(&self) {
        self.allocated.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_discard(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, idle: usize) -> PoolStats {
        PoolStats {
            acquired: self.acquired.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
            allocated: self.allocated.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            idle,
        }
    }
}
