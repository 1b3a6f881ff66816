//! The time source: current wall-clock time as epoch milliseconds.

use crate::domain::Timestamp;
use crate::error::Result;
use crate::ports::{Clock, SystemClock};

/// Current wall-clock time in milliseconds since the Unix epoch
///
/// Reads the platform realtime clock. Not monotonic; do not use it to
/// measure elapsed durations.
pub fn now_millis() -> Result<Timestamp> {
    now_millis_from(&SystemClock)
}

/// Same as [`now_millis`] but samples the given clock
pub fn now_millis_from(clock: &dyn Clock) -> Result<Timestamp> {
    clock.read()?.to_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClockReading;
    use crate::error::TimeError;
    use crate::ports::FixedClock;

    struct BrokenClock;

    impl Clock for BrokenClock {
        fn read(&self) -> Result<ClockReading> {
            Err(TimeError::ClockUnavailable {
                reason: "EINVAL".to_string(),
            })
        }
    }

    #[test]
    fn test_fixed_clock_gives_exact_millis() {
        let clock = FixedClock::at(1_700_000_000, 500_000_000).unwrap();
        assert_eq!(now_millis_from(&clock).unwrap().as_millis(), 1_700_000_000_500);
    }

    #[test]
    fn test_just_under_a_second_truncates() {
        let clock = FixedClock::at(1_700_000_000, 999_999_999).unwrap();
        assert_eq!(now_millis_from(&clock).unwrap().as_millis(), 1_700_000_000_999);
    }

    #[test]
    fn test_clock_failure_is_surfaced() {
        let err = now_millis_from(&BrokenClock).unwrap_err();
        assert!(matches!(err, TimeError::ClockUnavailable { .. }));
    }

    #[test]
    fn test_overflowing_clock_is_surfaced() {
        let clock = FixedClock::at(i64::MIN, 0).unwrap();
        assert!(matches!(
            now_millis_from(&clock),
            Err(TimeError::Overflow { .. })
        ));
    }

    #[test]
    fn test_now_millis_succeeds() {
        assert!(now_millis().unwrap().as_millis() > 0);
    }
}
