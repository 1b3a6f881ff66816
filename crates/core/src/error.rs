use thiserror::Error;

/// Errors raised while sampling or converting the realtime clock
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Clock unavailable: {reason}")]
    ClockUnavailable { reason: String },

    #[error("Timestamp overflow: {seconds}s does not fit in i64 milliseconds")]
    Overflow { seconds: i64 },

    #[error("Invalid clock reading: {nanos}ns is not below one second")]
    InvalidReading { nanos: u32 },
}

pub type Result<T> = std::result::Result<T, TimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TimeError::ClockUnavailable {
            reason: "clock_gettime failed".to_string(),
        };
        assert_eq!(err.to_string(), "Clock unavailable: clock_gettime failed");

        let err = TimeError::InvalidReading { nanos: 1_000_000_000 };
        assert!(err.to_string().contains("1000000000ns"));
    }
}
