/*!
 * Scoped Checkout
 * RAII handle that returns its item to the pool on drop
 */

use super::Pool;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Item checked out of a [`Pool`], returned automatically when dropped
///
/// # Example
///
/// ```
/// use msgpool::{Message, Pool};
///
/// let pool = Pool::new(Message::default);
/// {
///     let mut msg = pool.checkout();
///     msg.count += 1;
/// } // returned here
/// assert_eq!(pool.idle(), 1);
/// ```
pub struct Pooled<'a, T> {
    item: Option<T>,
    pool: &'a Pool<T>,
}

impl<'a, T> Pooled<'a, T> {
    #[inline]
    pub(crate) fn new(item: T, pool: &'a Pool<T>) -> Self {
        Self {
            item: Some(item),
            pool,
        }
    }

    /// Take the item out without returning it to the pool
    #[inline]
    pub fn detach(mut self) -> T {
        // Only `detach` and `drop` empty the slot, and both consume the guard
        self.item.take().expect("pooled item taken twice")
    }
}

impl<T> Deref for Pooled<'_, T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        self.item.as_ref().expect("pooled item already returned")
    }
}

impl<T> DerefMut for Pooled<'_, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        self.item.as_mut().expect("pooled item already returned")
    }
}

impl<T> Drop for Pooled<'_, T> {
    fn drop(&mut self) {
        if let Some(item) = self.item.take() {
            self.pool.release(item);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Pooled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pooled").field(&self.item).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_returns_item() {
        let pool: Pool<Vec<u8>> = Pool::new(Vec::new);
        {
            let mut buf = pool.checkout();
            buf.extend_from_slice(b"payload");
            assert_eq!(pool.idle(), 0);
        }
        assert_eq!(pool.idle(), 1);
        assert_eq!(pool.acquire(), b"payload".to_vec());
    }

    #[test]
    fn test_detach_keeps_item_out() {
        let pool: Pool<u32> = Pool::new(|| 3);
        let item = pool.checkout().detach();

        assert_eq!(item, 3);
        assert_eq!(pool.idle(), 0);
        assert_eq!(pool.stats().released, 0);
    }
}
