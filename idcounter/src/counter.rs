use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CounterExhausted;

/// The shared state behind every ID-issuing instance.
///
/// `Counter` stores the last ID it handed out. It is only ever mutated through
/// atomic read-modify-write operations, so the IDs returned to any set of
/// completed calls are always exactly `1..=n`, regardless of how the calls
/// were interleaved.
///
/// There is no way to reset a `Counter`.
///
/// The process-wide sequences live in [`EagerCounter`] and [`LazyCounter`].
/// A `Counter` created with `new` is a separate sequence of its own, starting
/// at 1. IDs from it can collide with IDs from the process-wide counters, so
/// only use one when its owner is the sole source of IDs in that domain.
///
/// [`EagerCounter`]: struct.EagerCounter.html
/// [`LazyCounter`]: struct.LazyCounter.html
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self::starting_after(0)
    }

    pub(crate) const fn starting_after(last_id: u64) -> Self {
        Self {
            value: AtomicU64::new(last_id),
        }
    }

    /// Issues the next ID.
    ///
    /// Once `u64::MAX` has been handed out, the counter silently wraps around
    /// and the next ID is 0. Use [`try_next_id`](#method.try_next_id) to detect
    /// exhaustion instead.
    pub fn next_id(&self) -> u64 {
        let id = self.value.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        log::trace!("Issued ID {}", id);
        id
    }

    /// Issues the next ID, or fails if doing so would wrap past `u64::MAX`.
    ///
    /// A failed call leaves the counter untouched.
    pub fn try_next_id(&self) -> Result<u64, CounterExhausted> {
        let previous = self
            .value
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map_err(|last| {
                log::debug!("Refusing to issue an ID after {}", last);
                CounterExhausted { last_id: last }
            })?;

        let id = previous + 1;
        log::trace!("Issued ID {}", id);
        Ok(id)
    }

    /// The most recently issued ID, or 0 if no IDs have been issued yet.
    pub fn last_id(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::{collections::BTreeSet, sync::Arc, thread};

    #[test]
    fn starts_at_one() {
        let counter = Counter::new();

        assert_eq!(counter.last_id(), 0);
        assert_eq!(counter.next_id(), 1);
        assert_eq!(counter.next_id(), 2);
        assert_eq!(counter.try_next_id(), Ok(3));
        assert_eq!(counter.last_id(), 3);
    }

    #[test]
    fn concurrent_ids_are_contiguous() {
        let counter = Arc::new(Counter::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || (0..1000).map(|_| counter.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = BTreeSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "ID {} was issued twice", id);
            }
        }

        let expected: BTreeSet<u64> = (1..=8000).collect();
        assert_eq!(seen, expected);
        assert_eq!(counter.last_id(), 8000);
    }

    #[test]
    fn standalone_counters_have_their_own_sequence() {
        let eager = crate::EagerCounter::instance();
        eager.next_id();
        let eager_last = eager.last_id();

        let counter = Counter::new();
        assert_eq!(counter.next_id(), 1);
        assert_eq!(counter.next_id(), 2);

        let other = Counter::new();
        assert_eq!(other.next_id(), 1);
        assert_eq!(counter.last_id(), 2);

        // Other tests draw from the eager counter concurrently; it only moves
        // forward.
        assert!(eager.last_id() >= eager_last);
        assert!(eager_last >= 1);
    }

    #[test]
    fn ids_increase_within_a_thread() {
        let counter = Counter::new();
        let ids: Vec<_> = (0..100).map(|_| counter.next_id()).collect();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn unchecked_wraps_at_max() {
        let counter = Counter::starting_after(u64::MAX - 1);

        assert_eq!(counter.next_id(), u64::MAX);
        assert_eq!(counter.next_id(), 0);
        assert_eq!(counter.next_id(), 1);
    }

    #[test]
    fn checked_reports_exhaustion() {
        let counter = Counter::starting_after(u64::MAX - 1);

        assert_eq!(counter.try_next_id(), Ok(u64::MAX));
        assert_eq!(
            counter.try_next_id(),
            Err(CounterExhausted { last_id: u64::MAX })
        );

        // A failed attempt must not move the counter.
        assert_eq!(counter.last_id(), u64::MAX);
    }
}
