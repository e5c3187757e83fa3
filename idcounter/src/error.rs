use thiserror::Error;

/// Returned by `try_next_id` when the next ID would wrap past `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("ID counter exhausted: {last_id} was the last ID that could be issued")]
pub struct CounterExhausted {
    pub last_id: u64,
}
