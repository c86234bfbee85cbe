//! Client-side timeout policy for webhook submissions.

use std::time::Duration;

/// Seconds of client-side patience per requested variation
pub const DEFAULT_TIMEOUT_SECONDS_PER_VARIATION: u64 = 180;

/// Controls how long a submission may run before the client gives up
/// waiting and reports it as still processing.
///
/// Generation time grows with the number of variations, so the timeout is
/// `timeout_per_variation × variation_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPolicy {
    /// `None` waits indefinitely
    pub timeout_per_variation: Option<Duration>,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            timeout_per_variation: Some(Duration::from_secs(
                DEFAULT_TIMEOUT_SECONDS_PER_VARIATION,
            )),
        }
    }
}

impl SubmissionPolicy {
    /// Policy that never times out
    pub fn without_timeout() -> Self {
        Self {
            timeout_per_variation: None,
        }
    }

    /// Creates a policy from an optional per-variation timeout in seconds.
    ///
    /// `None` or `Some(0)` disables the timeout.
    pub fn from_seconds_per_variation(seconds: Option<u64>) -> Self {
        Self {
            timeout_per_variation: seconds.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }

    pub fn with_timeout_per_variation(mut self, timeout: Duration) -> Self {
        self.timeout_per_variation = Some(timeout);
        self
    }

    /// Effective timeout for a submission requesting `variations` outputs
    pub fn timeout_for(&self, variations: i64) -> Option<Duration> {
        let count = u32::try_from(variations.max(1)).unwrap_or(u32::MAX);
        self.timeout_per_variation
            .map(|per| per.saturating_mul(count))
    }
}
