/*!
 * Pool Behavior Tests
 * Borrow/return semantics, scoped checkout, and allocation accounting
 */

use msgpool::{Message, Pool, PoolConfig, PoolStats};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_round_trip_does_not_allocate() {
    let pool = Pool::new(Message::default);

    let msg = pool.acquire();
    pool.release(msg);
    let _msg = pool.acquire();

    assert_eq!(
        pool.stats(),
        PoolStats {
            acquired: 2,
            released: 1,
            allocated: 1,
            discarded: 0,
            idle: 0,
        }
    );
}

#[test]
fn test_release_keeps_state_and_reset_is_caller_side() {
    let pool = Pool::new(Message::default);

    let mut msg = pool.acquire();
    msg.count = 41;
    pool.release(msg);

    let mut msg = pool.acquire();
    assert_eq!(msg.count, 41);

    msg.reset();
    pool.release(msg);
    assert_eq!(pool.acquire().count, 0);
}

#[test]
fn test_checkout_guard_returns_on_scope_exit() {
    let pool = Pool::new(Message::default);

    {
        let mut first = pool.checkout();
        let mut second = pool.checkout();
        first.count = 1;
        second.count = 2;
    }

    assert_eq!(pool.idle(), 2);
    let mut counts = vec![pool.acquire().count, pool.acquire().count];
    counts.sort_unstable();
    assert_eq!(counts, vec![1, 2]);
    assert_eq!(pool.stats().allocated, 2);
}

#[test]
fn test_bounded_pool_from_config() {
    let config = PoolConfig::bounded(2).with_prefill(2);
    let pool = Pool::with_config(Message::default, &config).unwrap();

    let held: Vec<Message> = (0..4).map(|_| pool.acquire()).collect();
    assert_eq!(pool.stats().allocated, 4);

    for msg in held {
        pool.release(msg);
    }

    let stats = pool.stats();
    assert_eq!(stats.idle, 2);
    assert_eq!(stats.discarded, 2);
}

#[derive(Debug, Clone)]
enum Op {
    Acquire,
    Release,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Acquire), Just(Op::Release)]
}

proptest! {
    /// An unbounded pool only allocates when every item it built is out
    #[test]
    fn prop_allocations_track_peak_outstanding(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let pool = Pool::new(Message::default);
        let mut held = Vec::new();
        let mut peak = 0usize;

        for op in ops {
            match op {
                Op::Acquire => {
                    held.push(pool.acquire());
                    peak = peak.max(held.len());
                }
                Op::Release => {
                    if let Some(msg) = held.pop() {
                        pool.release(msg);
                    }
                }
            }
        }

        let stats = pool.stats();
        prop_assert_eq!(stats.allocated as usize, peak);
        prop_assert_eq!(pool.idle(), peak - held.len());
        prop_assert_eq!(stats.discarded, 0);
    }

    /// A bounded pool never parks more than its capacity
    #[test]
    fn prop_bounded_idle_never_exceeds_capacity(cap in 1usize..16, burst in 0usize..64) {
        let pool = Pool::with_config(Message::default, &PoolConfig::bounded(cap)).unwrap();

        let held: Vec<Message> = (0..burst).map(|_| pool.acquire()).collect();
        for msg in held {
            pool.release(msg);
        }

        prop_assert!(pool.idle() <= cap);
        prop_assert_eq!(pool.stats().discarded as usize, burst.saturating_sub(cap));
    }
}
