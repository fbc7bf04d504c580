#![forbid(unsafe_code)]

use std::sync::OnceLock;
use std::time::Instant;

/// Monotonic tick source.
///
/// Ticks are nanoseconds, meaningful only as differences between two samples
/// from the same tick stream; they carry no relation to wall-clock time and
/// are unaffected by clock adjustments. Successive `now()` calls on one
/// instance never decrease.
pub trait HighResolutionTimer: Send + Sync {
    fn now(&self) -> u64;
}

/// Production timer backed by the platform monotonic clock.
///
/// Ticks count nanoseconds since a process-wide origin captured on first
/// use, so samples from different `MonotonicTimer` values share one tick
/// stream and stay comparable.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicTimer;

static ORIGIN: OnceLock<Instant> = OnceLock::new();

impl HighResolutionTimer for MonotonicTimer {
    fn now(&self) -> u64 {
        let origin = *ORIGIN.get_or_init(Instant::now);
        // u64 nanoseconds cover ~584 years of process uptime.
        Instant::now().duration_since(origin).as_nanos() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_never_decrease() {
        let timer = MonotonicTimer;
        let mut previous = timer.now();
        for _ in 0..1_000 {
            let sample = timer.now();
            assert!(sample >= previous);
            previous = sample;
        }
    }

    #[test]
    fn instances_share_one_tick_stream() {
        let first = MonotonicTimer.now();
        let second = MonotonicTimer.now();
        assert!(second >= first);
    }
}
