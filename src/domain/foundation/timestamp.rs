//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Checks whether more than `max_age` has passed since this timestamp.
    pub fn is_older_than(&self, max_age: Duration) -> bool {
        Timestamp::now().duration_since(self) > max_age
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_since_is_signed() {
        let earlier = Timestamp::from_datetime(Utc::now() - Duration::minutes(5));
        let later = Timestamp::now();
        assert!(later.duration_since(&earlier) > Duration::zero());
        assert!(earlier.duration_since(&later) < Duration::zero());
    }

    #[test]
    fn is_older_than_compares_against_now() {
        let old = Timestamp::from_datetime(Utc::now() - Duration::hours(2));
        assert!(old.is_older_than(Duration::hours(1)));
        assert!(!Timestamp::now().is_older_than(Duration::hours(1)));
    }
}
