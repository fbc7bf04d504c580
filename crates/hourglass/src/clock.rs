#![forbid(unsafe_code)]

use crate::error::Error;
use crate::unit::TimeUnit;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::time::Duration;
use tracing::warn;

/// Wall-clock capability, substitutable by test doubles.
#[async_trait::async_trait]
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Whole seconds since the Unix epoch, derived from [`Clock::now`].
    fn timestamp(&self) -> i64 {
        self.now().timestamp()
    }

    /// Fractional seconds since the Unix epoch, microsecond precision,
    /// derived from [`Clock::now`].
    fn microtime(&self) -> f64 {
        self.now().timestamp_micros() as f64 / 1e6
    }

    /// Suspend the caller for `amount` of `unit`.
    async fn sleep(&self, amount: u64, unit: TimeUnit) -> Result<(), Error>;
}

/// Clock that reads the real wall clock on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[async_trait::async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Sleeping for a calendar unit is ill-defined and rejected.
    async fn sleep(&self, amount: u64, unit: TimeUnit) -> Result<(), Error> {
        let nanos_per_unit = unit.nanos().ok_or(Error::CalendarUnit(unit))?;
        let duration = Duration::from_nanos(nanos_per_unit.saturating_mul(amount));
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

/// Clock frozen at a single instant. Immutable after construction; `sleep`
/// is a no-op that always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticClock {
    instant: DateTime<Utc>,
}

impl StaticClock {
    /// Freeze the clock at `time`. Accepts anything convertible into a
    /// [`TimeSpec`]; unresolvable input freezes at the current instant
    /// instead of failing.
    pub fn new(time: impl Into<TimeSpec>) -> Self {
        Self {
            instant: time.into().resolve(),
        }
    }
}

impl Default for StaticClock {
    /// Freeze at construction time.
    fn default() -> Self {
        Self { instant: Utc::now() }
    }
}

#[async_trait::async_trait]
impl Clock for StaticClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    async fn sleep(&self, _amount: u64, _unit: TimeUnit) -> Result<(), Error> {
        Ok(())
    }
}

/// Construction input for [`StaticClock`]: an already-typed instant, a
/// date/time string, or a numeric epoch value.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeSpec {
    Instant(DateTime<Utc>),
    Text(String),
    /// Seconds since the Unix epoch, possibly fractional.
    Epoch(f64),
}

impl TimeSpec {
    /// Resolve to a concrete instant.
    ///
    /// Unparsable text and out-of-range epoch values never raise; they fall
    /// back to the current instant with a warning.
    pub fn resolve(self) -> DateTime<Utc> {
        match self {
            Self::Instant(instant) => instant,
            Self::Text(text) => parse_instant(&text).unwrap_or_else(|| {
                warn!(text = %text, "unparsable instant, falling back to now");
                Utc::now()
            }),
            Self::Epoch(secs) => epoch_instant(secs).unwrap_or_else(|| {
                warn!(secs, "epoch value out of range, falling back to now");
                Utc::now()
            }),
        }
    }
}

impl From<DateTime<Utc>> for TimeSpec {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

impl From<&str> for TimeSpec {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for TimeSpec {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for TimeSpec {
    fn from(secs: i64) -> Self {
        Self::Epoch(secs as f64)
    }
}

impl From<f64> for TimeSpec {
    fn from(secs: f64) -> Self {
        Self::Epoch(secs)
    }
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

fn epoch_instant(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let micros = (secs * 1e6).round();
    if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_micros(micros as i64)
}
