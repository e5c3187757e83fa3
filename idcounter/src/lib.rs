//! Idcounter hands out process-wide unique IDs. Every ID comes from a single
//! 64-bit counter that is only ever touched through atomic operations, so any
//! number of threads can draw IDs at once without losing or duplicating one.
//!
//! Two ways of creating the process-wide counter are provided:
//!
//! - [`EagerCounter`][EagerCounter] lives in a `static` and exists before
//!   `main` starts.
//! - [`LazyCounter`][LazyCounter] is built on first use behind a run-once
//!   latch. Racing first callers all observe the same instance.
//!
//! Both implement [`IdGenerator`][IdGenerator], so callers can hold either one
//! without knowing which they got.
//!
//! ## Example
//! ```
//! use idcounter::{EagerCounter, IdGenerator, LazyCounter};
//!
//! let generators: [&dyn IdGenerator; 2] = [EagerCounter::instance(), LazyCounter::global()];
//!
//! for generator in &generators {
//!     let first = generator.next_id();
//!     let second = generator.next_id();
//!     assert!(second > first);
//! }
//! ```
//!
//! [EagerCounter]: struct.EagerCounter.html
//! [LazyCounter]: struct.LazyCounter.html
//! [IdGenerator]: trait.IdGenerator.html

mod counter;
mod eager;
mod error;
mod generator;
mod lazy;

pub use counter::*;
pub use eager::*;
pub use error::*;
pub use generator::*;
pub use lazy::*;
