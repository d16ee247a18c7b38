/*!
 * Message
 * Pooled value type handed out by the global pool
 */

use serde::{Deserialize, Serialize};

/// Reusable message slot
///
/// Carries no identity beyond its fields. The pool never inspects or
/// clears it, so a message comes back from `acquire()` exactly as it was
/// when released. Call [`Message::reset`] before release if the next
/// holder must see a clean value.
///
/// Not `Clone`: releasing a message gives up the only handle to it.
///
/// ```compile_fail
/// let pool = msgpool::Pool::new(msgpool::Message::default);
/// let msg = pool.acquire();
/// pool.release(msg.clone());
/// ```
#[derive(Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Usage/occupancy count
    pub count: i64,
}

impl Message {
    #[inline]
    pub const fn new(count: i64) -> Self {
        Self { count }
    }

    /// Restore the freshly constructed state
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Message::default().count, 0);
    }

    #[test]
    fn test_reset() {
        let mut msg = Message::new(12);
        msg.reset();
        assert_eq!(msg, Message::default());
    }
}
