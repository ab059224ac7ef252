use core::fmt;

use crate::state::InputError;

/// Manual tally of precision-skill attempts and critical successes.
///
/// Display-only statistic: it is never fed back into scoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecisionTracker {
    attempts: u32,
    successes: u32,
}

impl PrecisionTracker {
    pub const fn new() -> Self {
        Self {
            attempts: 0,
            successes: 0,
        }
    }

    /// Restores a tally from saved counts.
    pub fn from_counts(attempts: u32, successes: u32) -> Result<Self, InputError> {
        if successes > attempts {
            return Err(InputError::PrecisionCounts {
                attempts,
                successes,
            });
        }
        Ok(Self {
            attempts,
            successes,
        })
    }

    pub fn record_attempt(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
    }

    pub fn record_success(&mut self) {
        self.successes = self.successes.saturating_add(1);
    }

    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    pub const fn successes(&self) -> u32 {
        self.successes
    }

    /// Observed success rate in percent, 0 when nothing was attempted.
    pub fn actual_rate_percent(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        f64::from(self.successes) / f64::from(self.attempts) * 100.0
    }
}

impl fmt::Display for PrecisionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.1}%)",
            self.successes,
            self.attempts,
            self.actual_rate_percent()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_zero_without_attempts() {
        let tracker = PrecisionTracker::new();
        assert_eq!(tracker.actual_rate_percent(), 0.0);
    }

    #[test]
    fn rate_counts_successes_over_attempts() {
        let mut tracker = PrecisionTracker::new();
        for _ in 0..4 {
            tracker.record_attempt();
        }
        tracker.record_success();

        assert_eq!(tracker.attempts(), 4);
        assert_eq!(tracker.successes(), 1);
        assert_eq!(tracker.actual_rate_percent(), 25.0);
    }

    #[test]
    fn restored_counts_must_be_consistent() {
        let tracker = PrecisionTracker::from_counts(8, 2).unwrap();
        assert_eq!(tracker.actual_rate_percent(), 25.0);
        assert_eq!(tracker.to_string(), "2/8 (25.0%)");

        assert_eq!(
            PrecisionTracker::from_counts(1, 2),
            Err(InputError::PrecisionCounts {
                attempts: 1,
                successes: 2
            })
        );
    }
}
