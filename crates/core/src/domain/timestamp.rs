use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeError};

const MILLIS_PER_SEC: i64 = 1_000;
const NANOS_PER_MILLI: u32 = 1_000_000;
pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Wall-clock time in milliseconds since the Unix epoch
///
/// Negative values are instants before 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const UNIX_EPOCH: Timestamp = Timestamp(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Whole seconds since the epoch, rounded toward negative infinity
    pub const fn as_secs(self) -> i64 {
        self.0.div_euclid(MILLIS_PER_SEC)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

/// One sample of the realtime clock, split the way the platform reports it
///
/// `nanos` is always in `[0, 1_000_000_000)`, so a pre-epoch instant carries a
/// negative `seconds` and a non-negative fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    seconds: i64,
    nanos: u32,
}

impl ClockReading {
    pub fn new(seconds: i64, nanos: u32) -> Result<Self> {
        if nanos >= NANOS_PER_SEC {
            return Err(TimeError::InvalidReading { nanos });
        }
        Ok(Self { seconds, nanos })
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// `seconds * 1000 + nanos / 1_000_000`, rejecting overflow
    pub fn to_timestamp(self) -> Result<Timestamp> {
        let overflow = || TimeError::Overflow {
            seconds: self.seconds,
        };
        let millis = self
            .seconds
            .checked_mul(MILLIS_PER_SEC)
            .ok_or_else(overflow)?
            .checked_add(i64::from(self.nanos / NANOS_PER_MILLI))
            .ok_or_else(overflow)?;
        Ok(Timestamp(millis))
    }
}
