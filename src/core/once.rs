/*!
 * Construct-Once Cell
 *
 * Lazily initialized process-wide value with exactly-once construction.
 *
 * # Semantics
 *
 * - **Lazy**: nothing is built until the first `get()`
 * - **Exactly once**: concurrent first callers race, one runs the constructor
 * - **Blocking only during construction**: late arrivals wait for the winner,
 *   every call after completion is a completion check plus a read
 *
 * The underlying cell is never exposed, so all writes funnel through the
 * guarded constructor.
 */

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Lazily constructed singleton value
///
/// # Example
///
/// ```
/// use msgpool::core::Singleton;
///
/// static ANSWER: Singleton<u64> = Singleton::new(|| 42);
///
/// assert!(!ANSWER.is_initialized());
/// assert_eq!(*ANSWER.get(), 42);
/// assert_eq!(ANSWER.constructions(), 1);
/// ```
pub struct Singleton<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
    constructions: AtomicUsize,
}

impl<T> Singleton<T> {
    /// Create an empty singleton that will be built by `init` on first use
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
            constructions: AtomicUsize::new(0),
        }
    }

    /// Get the value, constructing it if this is the first call
    #[inline]
    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| {
            self.constructions.fetch_add(1, Ordering::Relaxed);
            (self.init)()
        })
    }

    /// Get the value only if it has already been constructed
    #[inline]
    pub fn try_get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether construction has completed
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Number of times the constructor has been entered
    ///
    /// Stays at 1 for the life of the process once construction succeeds.
    /// A constructor that panics leaves the cell empty and counts as an
    /// attempt; the next caller runs it again.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::Relaxed)
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("value", &self.cell.get())
            .field("constructions", &self.constructions())
            .finish()
    }
}
