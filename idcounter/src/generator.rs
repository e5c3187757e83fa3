use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    counter::Counter, eager::EagerCounter, error::CounterExhausted, lazy::LazyCounter,
};

/// Anything that can hand out unique IDs.
///
/// Consumers should depend on this trait rather than on a particular counter,
/// so that the eager and lazy strategies stay interchangeable.
pub trait IdGenerator: Send + Sync {
    /// Issues an ID strictly greater than every ID this generator has issued
    /// before, wrapping silently at `u64::MAX`.
    fn next_id(&self) -> u64;

    /// Like `next_id`, but fails instead of wrapping.
    fn try_next_id(&self) -> Result<u64, CounterExhausted>;
}

impl IdGenerator for Counter {
    fn next_id(&self) -> u64 {
        Counter::next_id(self)
    }

    fn try_next_id(&self) -> Result<u64, CounterExhausted> {
        Counter::try_next_id(self)
    }
}

impl IdGenerator for EagerCounter {
    fn next_id(&self) -> u64 {
        EagerCounter::next_id(self)
    }

    fn try_next_id(&self) -> Result<u64, CounterExhausted> {
        EagerCounter::try_next_id(self)
    }
}

impl IdGenerator for LazyCounter {
    fn next_id(&self) -> u64 {
        LazyCounter::next_id(self)
    }

    fn try_next_id(&self) -> Result<u64, CounterExhausted> {
        LazyCounter::try_next_id(self)
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn next_id(&self) -> u64 {
        (**self).next_id()
    }

    fn try_next_id(&self) -> Result<u64, CounterExhausted> {
        (**self).try_next_id()
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for Arc<T> {
    fn next_id(&self) -> u64 {
        (**self).next_id()
    }

    fn try_next_id(&self) -> Result<u64, CounterExhausted> {
        (**self).try_next_id()
    }
}

/// Selects which process-wide counter to draw IDs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Eager,
    Lazy,
}

impl Strategy {
    /// The process-wide generator for this strategy. For `Lazy`, this does not
    /// build the counter; the first ID drawn does.
    pub fn generator(self) -> &'static dyn IdGenerator {
        match self {
            Strategy::Eager => EagerCounter::instance(),
            Strategy::Lazy => LazyCounter::global(),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Eager
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Strategy, Self::Err> {
        match value {
            "eager" => Ok(Strategy::Eager),
            "lazy" => Ok(Strategy::Lazy),

            _ => Err(String::from(
                "Invalid strategy. Valid options are 'eager' and 'lazy'.",
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::Eager => "eager",
            Strategy::Lazy => "lazy",
        };

        formatter.write_str(name)
    }
}
