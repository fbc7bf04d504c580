#![forbid(unsafe_code)]

//! High-resolution elapsed-time measurement.
//!
//! Two leaf capabilities compose by delegation: a [`Clock`] supplies
//! wall-clock instants (with a frozen [`StaticClock`] for deterministic
//! tests) and a [`HighResolutionTimer`] supplies monotonic nanosecond
//! ticks. A [`Stopwatch`] captures a start tick at construction and wraps
//! each `elapsed()` delta in an [`Elapsed`] value convertible into the
//! units of [`TimeUnit`].

mod clock;
mod elapsed;
mod error;
mod stopwatch;
mod timer;
mod unit;

pub use clock::{Clock, StaticClock, SystemClock, TimeSpec};
pub use elapsed::Elapsed;
pub use error::Error;
pub use stopwatch::Stopwatch;
pub use timer::{HighResolutionTimer, MonotonicTimer};
pub use unit::{TimeUnit, UnitMetadata};
