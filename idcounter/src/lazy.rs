use std::sync::{
    atomic::{AtomicU8, AtomicUsize, Ordering},
    OnceLock,
};

use crate::{counter::Counter, error::CounterExhausted};

static LAZY: LazyCounter = LazyCounter::new();

const UNINITIALIZED: u8 = 0;
const INITIALIZING: u8 = 1;
const READY: u8 = 2;

/// Where a `LazyCounter` is in its one-way construction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Initializing,
    Ready,
}

/// A counter that is only built the first time somebody asks for it.
///
/// Construction goes through a run-once latch: when several threads race to
/// use an unbuilt `LazyCounter`, exactly one of them builds the inner
/// `Counter` and the rest block until it is ready. Once built, lookups never
/// lock.
///
/// The process-wide instance is available from [`global`](#method.global) and
/// [`instance`](#method.instance). Standalone instances can also be created
/// with `LazyCounter::new` and shared by reference.
#[derive(Debug)]
pub struct LazyCounter {
    cell: OnceLock<Counter>,
    state: AtomicU8,
    constructions: AtomicUsize,
}

impl LazyCounter {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            state: AtomicU8::new(UNINITIALIZED),
            constructions: AtomicUsize::new(0),
        }
    }

    /// The process-wide slot. Its counter is not built until first use.
    #[inline]
    pub fn global() -> &'static LazyCounter {
        &LAZY
    }

    /// Returns the process-wide counter, building it if this is the first call.
    pub fn instance() -> &'static Counter {
        LAZY.get()
    }

    /// Returns this slot's counter, building it if needed.
    pub fn get(&self) -> &Counter {
        if let Some(counter) = self.cell.get() {
            return counter;
        }

        let counter = self.cell.get_or_init(|| self.construct());
        self.state.store(READY, Ordering::SeqCst);
        counter
    }

    // Only ever called from inside the latch.
    fn construct(&self) -> Counter {
        self.state.store(INITIALIZING, Ordering::SeqCst);
        let construction = self.constructions.fetch_add(1, Ordering::SeqCst) + 1;

        log::debug!("Building lazy ID counter (construction #{})", construction);

        Counter::new()
    }

    pub fn state(&self) -> InitState {
        if self.cell.get().is_some() {
            return InitState::Ready;
        }

        match self.state.load(Ordering::SeqCst) {
            UNINITIALIZED => InitState::Uninitialized,
            INITIALIZING => InitState::Initializing,
            _ => InitState::Ready,
        }
    }

    /// How many times the guarded construction block has run. This is 0 before
    /// first use and 1 forever after.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }

    #[inline]
    pub fn next_id(&self) -> u64 {
        self.get().next_id()
    }

    #[inline]
    pub fn try_next_id(&self) -> Result<u64, CounterExhausted> {
        self.get().try_next_id()
    }

    /// The most recently issued ID. Does not build the counter; an unbuilt
    /// counter reports 0.
    pub fn last_id(&self) -> u64 {
        self.cell.get().map_or(0, Counter::last_id)
    }
}

impl Default for LazyCounter {
    fn default() -> Self {
        Self::new()
    }
}
