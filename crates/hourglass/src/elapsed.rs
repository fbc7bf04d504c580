#![forbid(unsafe_code)]

use crate::error::Error;
use crate::unit::TimeUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// An elapsed duration, stored as a raw nanosecond tick-delta.
///
/// Immutable once constructed. Integer accessors truncate toward zero;
/// [`Elapsed::as_secs_f64`] and [`Elapsed::value_in`] divide exactly in
/// `f64`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Elapsed(u64);

impl Elapsed {
    pub const ZERO: Self = Self(0);

    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    /// Whole microseconds, truncated.
    pub const fn as_micros(self) -> u64 {
        self.0 / 1_000
    }

    /// Whole milliseconds, truncated.
    pub const fn as_millis(self) -> u64 {
        self.0 / 1_000_000
    }

    /// Whole seconds, truncated.
    pub const fn as_secs(self) -> u64 {
        self.0 / 1_000_000_000
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1e9
    }

    pub const fn as_duration(self) -> Duration {
        Duration::from_nanos(self.0)
    }

    /// Value expressed in `unit`, as an exact `f64` division.
    ///
    /// Calendar units have no fixed length and are rejected.
    pub fn value_in(self, unit: TimeUnit) -> Result<f64, Error> {
        let nanos_per_unit = unit.nanos().ok_or(Error::CalendarUnit(unit))?;
        Ok(self.0 as f64 / nanos_per_unit as f64)
    }
}

impl From<Elapsed> for Duration {
    fn from(elapsed: Elapsed) -> Self {
        elapsed.as_duration()
    }
}

impl fmt::Display for Elapsed {
    /// Scales to the largest sub-second-or-second unit that fits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0;
        if nanos < 1_000 {
            return write!(f, "{nanos}{}", TimeUnit::Nanosecond);
        }
        let (value, unit) = if nanos < 1_000_000 {
            (nanos as f64 / 1e3, TimeUnit::Microsecond)
        } else if nanos < 1_000_000_000 {
            (nanos as f64 / 1e6, TimeUnit::Millisecond)
        } else {
            (nanos as f64 / 1e9, TimeUnit::Second)
        };
        write!(f, "{value:.3}{unit}")
    }
}
