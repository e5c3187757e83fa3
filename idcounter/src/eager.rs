use crate::{counter::Counter, error::CounterExhausted};

static EAGER: EagerCounter = EagerCounter {
    counter: Counter::new(),
};

/// A process-wide counter that exists before any code can ask for it.
///
/// The instance is a constant-initialized `static`, so there is no
/// construction step at runtime and no first-call cost. The trade-off is that
/// the counter occupies memory even in processes that never draw an ID.
#[derive(Debug)]
pub struct EagerCounter {
    counter: Counter,
}

impl EagerCounter {
    /// Returns the single process-wide instance.
    #[inline]
    pub fn instance() -> &'static EagerCounter {
        &EAGER
    }

    #[inline]
    pub fn next_id(&self) -> u64 {
        self.counter.next_id()
    }

    #[inline]
    pub fn try_next_id(&self) -> Result<u64, CounterExhausted> {
        self.counter.try_next_id()
    }

    #[inline]
    pub fn last_id(&self) -> u64 {
        self.counter.last_id()
    }
}
