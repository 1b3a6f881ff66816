#[cfg(unix)]
use nix::{
    errno::Errno,
    sys::time::TimeSpec,
    time::{clock_gettime, ClockId},
};
#[cfg(not(unix))]
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::ClockReading;
#[cfg(not(unix))]
use crate::domain::NANOS_PER_SEC;
use crate::error::{Result, TimeError};

/// Clock abstraction for testability
pub trait Clock: Send + Sync {
    /// Sample the clock once
    fn read(&self) -> Result<ClockReading>;
}

/// Platform realtime clock (`CLOCK_REALTIME` on Unix)
///
/// Not monotonic: NTP or manual adjustments move it in either direction.
/// A failed `clock_gettime` is reported as [`TimeError::ClockUnavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(unix)]
    fn read(&self) -> Result<ClockReading> {
        reading_from_timespec(clock_gettime(ClockId::CLOCK_REALTIME))
    }

    #[cfg(not(unix))]
    fn read(&self) -> Result<ClockReading> {
        reading_from_system_time(SystemTime::now())
    }
}

/// Clock frozen at a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    reading: ClockReading,
}

impl FixedClock {
    pub fn new(reading: ClockReading) -> Self {
        Self { reading }
    }

    pub fn at(seconds: i64, nanos: u32) -> Result<Self> {
        Ok(Self::new(ClockReading::new(seconds, nanos)?))
    }
}

impl Clock for FixedClock {
    fn read(&self) -> Result<ClockReading> {
        Ok(self.reading)
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn read(&self) -> Result<ClockReading> {
        (**self).read()
    }
}

#[cfg(unix)]
fn clock_unavailable(errno: Errno) -> TimeError {
    TimeError::ClockUnavailable {
        reason: format!("clock_gettime(CLOCK_REALTIME) failed: {}", errno),
    }
}

#[cfg(unix)]
fn reading_from_timespec(result: nix::Result<TimeSpec>) -> Result<ClockReading> {
    let ts = result.map_err(clock_unavailable)?;

    // tv_nsec is already normalised to [0, 1e9), also before the epoch
    let nanos = u32::try_from(ts.tv_nsec()).map_err(|_| TimeError::ClockUnavailable {
        reason: format!("clock_gettime returned tv_nsec {}", ts.tv_nsec()),
    })?;
    ClockReading::new(i64::from(ts.tv_sec()), nanos)
}

#[cfg(not(unix))]
fn reading_from_system_time(now: SystemTime) -> Result<ClockReading> {
    let (after_epoch, offset) = match now.duration_since(UNIX_EPOCH) {
        Ok(d) => (true, d),
        Err(e) => (false, e.duration()),
    };

    let secs = i64::try_from(offset.as_secs()).map_err(|_| TimeError::ClockUnavailable {
        reason: format!("{}s since the epoch does not fit in i64", offset.as_secs()),
    })?;
    let nanos = offset.subsec_nanos();

    if after_epoch {
        return ClockReading::new(secs, nanos);
    }

    // Before the epoch: keep nanos non-negative, borrow a second when needed
    if nanos == 0 {
        ClockReading::new(-secs, 0)
    } else {
        ClockReading::new(-secs - 1, NANOS_PER_SEC - nanos)
    }
}
