//! `USING` options of modification statements.

use crate::{QueryBuilder, QueryText};
use std::time::Duration;
use time::OffsetDateTime;

/// `TTL n` or `TIMESTAMP n`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Condition(pub(crate) QueryText);

impl Condition {
    pub(crate) fn new(qb: QueryText) -> Self {
        Self(qb)
    }
    /// Time to live in seconds.
    pub fn ttl(seconds: u32) -> Self {
        Self(QueryBuilder::ttl(seconds))
    }
    /// Time to live, truncated to whole seconds and saturated to `u32::MAX`.
    pub fn ttl_duration(duration: Duration) -> Self {
        Self::ttl(u32::try_from(duration.as_secs()).unwrap_or(u32::MAX))
    }
    /// Write timestamp in microseconds since the epoch.
    pub fn timestamp(microseconds: i64) -> Self {
        Self(QueryBuilder::timestamp(microseconds))
    }
    /// Write timestamp from a point in time.
    pub fn timestamp_at(at: OffsetDateTime) -> Self {
        let micros = at.unix_timestamp_nanos() / 1_000;
        Self::timestamp(i64::try_from(micros).unwrap_or(i64::MAX))
    }
    pub fn qb(&self) -> &QueryText {
        &self.0
    }
}

impl AsRef<str> for Condition {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn options() {
        assert_eq!(Condition::ttl(86400).qb().as_str(), "TTL 86400");
        assert_eq!(
            Condition::ttl_duration(Duration::from_millis(2500)).qb().as_str(),
            "TTL 2"
        );
        assert_eq!(
            Condition::timestamp_at(datetime!(2024-01-01 00:00:00.5 UTC))
                .qb()
                .as_str(),
            "TIMESTAMP 1704067200500000"
        );
    }
}
