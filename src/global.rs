/*!
 * Global Message Pool
 *
 * Process-wide pool of [`Message`]s reached only through [`instance`].
 * Built empty and unbounded on first use; never torn down. Environment and
 * [`PoolConfig`](crate::config::PoolConfig) settings apply only to pools
 * callers construct themselves.
 */

use crate::core::Singleton;
use crate::message::Message;
use crate::pool::Pool;
use tracing::info;

/// The pool type behind [`instance`]
pub type MessagePool = Pool<Message>;

static MESSAGE_POOL: Singleton<MessagePool> = Singleton::new(build_message_pool);

/// Get the process-wide message pool, constructing it on first call
///
/// Concurrent first callers block until the single construction finishes;
/// afterwards this is a plain read.
///
/// # Example
///
/// ```
/// let pool = msgpool::instance();
/// let mut msg = pool.acquire();
/// msg.count += 1;
/// pool.release(msg);
/// ```
#[inline]
pub fn instance() -> &'static MessagePool {
    MESSAGE_POOL.get()
}

/// Whether the global pool has been constructed yet
pub fn is_initialized() -> bool {
    MESSAGE_POOL.is_initialized()
}

/// Number of times global pool construction has run
pub fn constructions() -> usize {
    MESSAGE_POOL.constructions()
}

fn build_message_pool() -> MessagePool {
    let pool = Pool::new(Message::default);
    info!(capacity = ?pool.capacity(), "Global message pool initialized");
    pool
}
