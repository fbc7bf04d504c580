#![forbid(unsafe_code)]

use crate::elapsed::Elapsed;
use crate::timer::{HighResolutionTimer, MonotonicTimer};
use std::fmt;
use std::sync::Arc;

/// Measures time elapsed since construction.
///
/// The start tick is sampled exactly once, inside the `start*` factories;
/// there is no separate begin call and no lap/reset. The timer handle is
/// shared, so many stopwatches may run off one timer.
pub struct Stopwatch {
    timer: Arc<dyn HighResolutionTimer>,
    start: u64,
}

impl Stopwatch {
    /// Start measuring against a fresh [`MonotonicTimer`].
    pub fn start() -> Self {
        Self::start_with(Arc::new(MonotonicTimer))
    }

    /// Start measuring against a caller-supplied timer.
    pub fn start_with(timer: Arc<dyn HighResolutionTimer>) -> Self {
        let start = timer.now();
        Self { timer, start }
    }

    /// Time elapsed since construction, measured at call time.
    ///
    /// Each call samples the timer again, so repeated calls report a
    /// non-decreasing sequence.
    pub fn elapsed(&self) -> Elapsed {
        Elapsed::from_nanos(self.timer.now().saturating_sub(self.start))
    }
}

impl fmt::Debug for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stopwatch")
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}
