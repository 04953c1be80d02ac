use std::time::Duration;

/// Convert MPRIS position in microseconds to Duration
///
/// Negative positions clamp to zero.
pub fn from_mpris_micros(micros: i64) -> Duration {
    Duration::from_micros(u64::try_from(micros).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micros_convert_to_duration() {
        assert_eq!(from_mpris_micros(1_250_000), Duration::from_millis(1_250));
    }

    #[test]
    fn negative_positions_clamp_to_zero() {
        assert_eq!(from_mpris_micros(-10), Duration::ZERO);
    }
}
