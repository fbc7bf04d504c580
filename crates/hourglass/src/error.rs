#![forbid(unsafe_code)]

use crate::unit::TimeUnit;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("calendar unit `{0}` has no fixed length")]
    CalendarUnit(TimeUnit),
}
