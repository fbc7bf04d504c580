#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Duration granularities, from sub-second up to calendar units.
///
/// Each unit carries a static [`UnitMetadata`] record queried by value
/// through [`TimeUnit::metadata`]; there is no runtime registration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Per-unit metadata consumed by formatting and conversion logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitMetadata {
    /// Whether the unit always spans the same number of seconds. Days and
    /// weeks are treated as fixed 86 400-second multiples; months and years
    /// depend on the calendar and are not.
    pub fixed_length: bool,
    /// Short display symbol.
    pub symbol: &'static str,
}

impl TimeUnit {
    /// All units, in ascending order of magnitude.
    pub const ALL: [TimeUnit; 10] = [
        TimeUnit::Nanosecond,
        TimeUnit::Microsecond,
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Static metadata record for this unit.
    pub const fn metadata(self) -> &'static UnitMetadata {
        match self {
            TimeUnit::Nanosecond => &UnitMetadata {
                fixed_length: true,
                symbol: "ns",
            },
            TimeUnit::Microsecond => &UnitMetadata {
                fixed_length: true,
                symbol: "µs",
            },
            TimeUnit::Millisecond => &UnitMetadata {
                fixed_length: true,
                symbol: "ms",
            },
            TimeUnit::Second => &UnitMetadata {
                fixed_length: true,
                symbol: "s",
            },
            TimeUnit::Minute => &UnitMetadata {
                fixed_length: true,
                symbol: "min",
            },
            TimeUnit::Hour => &UnitMetadata {
                fixed_length: true,
                symbol: "h",
            },
            TimeUnit::Day => &UnitMetadata {
                fixed_length: true,
                symbol: "d",
            },
            TimeUnit::Week => &UnitMetadata {
                fixed_length: true,
                symbol: "w",
            },
            TimeUnit::Month => &UnitMetadata {
                fixed_length: false,
                symbol: "mo",
            },
            TimeUnit::Year => &UnitMetadata {
                fixed_length: false,
                symbol: "y",
            },
        }
    }

    /// Whether one unit always spans the same number of seconds.
    pub const fn is_fixed_length(self) -> bool {
        self.metadata().fixed_length
    }

    /// Short display symbol.
    pub const fn symbol(self) -> &'static str {
        self.metadata().symbol
    }

    /// Span of exactly one unit, or `None` for calendar units.
    pub const fn duration(self) -> Option<Duration> {
        let duration = match self {
            TimeUnit::Nanosecond => Duration::from_nanos(1),
            TimeUnit::Microsecond => Duration::from_micros(1),
            TimeUnit::Millisecond => Duration::from_millis(1),
            TimeUnit::Second => Duration::from_secs(1),
            TimeUnit::Minute => Duration::from_secs(60),
            TimeUnit::Hour => Duration::from_secs(60 * 60),
            TimeUnit::Day => Duration::from_secs(24 * 60 * 60),
            TimeUnit::Week => Duration::from_secs(7 * 24 * 60 * 60),
            TimeUnit::Month | TimeUnit::Year => return None,
        };
        Some(duration)
    }

    /// Span of one unit in whole nanoseconds, or `None` for calendar units.
    pub const fn nanos(self) -> Option<u64> {
        match self.duration() {
            Some(duration) => Some(duration.as_nanos() as u64),
            None => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn calendar_units_have_no_duration() {
        for unit in TimeUnit::ALL {
            assert_eq!(unit.duration().is_some(), unit.is_fixed_length());
        }
    }

    #[test]
    fn durations_ascend() {
        let fixed: Vec<_> = TimeUnit::ALL
            .iter()
            .filter_map(|unit| unit.duration())
            .collect();
        assert!(fixed.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn symbols() {
        assert_eq!(TimeUnit::Nanosecond.symbol(), "ns");
        assert_eq!(TimeUnit::Second.to_string(), "s");
        assert_eq!(TimeUnit::Month.symbol(), "mo");
    }

    #[test]
    fn serde_roundtrip_is_lowercase() {
        let json = serde_json::to_string(&TimeUnit::Millisecond).unwrap();
        assert_eq!(json, "\"millisecond\"");
        let unit: TimeUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(unit, TimeUnit::Millisecond);
    }
}
