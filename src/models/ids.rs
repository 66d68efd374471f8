//! Transaction identifiers
//!
//! Ids are derived from the creation time in milliseconds. When two
//! transactions are created within the same millisecond (or the clock steps
//! backwards) the id is bumped past the largest one already issued.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique, monotonically increasing transaction identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap a raw id value
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw id value
    pub const fn raw(&self) -> i64 {
        self.0
    }

    /// Issue an id from a millisecond timestamp, staying strictly above `latest`
    ///
    /// Returns `None` when `latest` is already `i64::MAX`.
    pub fn issue(timestamp_millis: i64, latest: Option<TransactionId>) -> Option<Self> {
        match latest {
            Some(latest) if latest.0 >= timestamp_millis => latest.0.checked_add(1).map(Self),
            _ => Some(Self(timestamp_millis)),
        }
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_uses_timestamp_when_fresh() {
        assert_eq!(TransactionId::issue(1_000, None).unwrap().raw(), 1_000);
        assert_eq!(
            TransactionId::issue(1_000, Some(TransactionId::from_raw(999)))
                .unwrap()
                .raw(),
            1_000
        );
    }

    #[test]
    fn test_issue_bumps_on_collision() {
        let latest = TransactionId::from_raw(1_000);
        assert_eq!(TransactionId::issue(1_000, Some(latest)).unwrap().raw(), 1_001);
        assert_eq!(TransactionId::issue(900, Some(latest)).unwrap().raw(), 1_001);
    }

    #[test]
    fn test_issue_exhausted() {
        let latest = TransactionId::from_raw(i64::MAX);
        assert_eq!(TransactionId::issue(1_000, Some(latest)), None);
    }

    #[test]
    fn test_parse_and_display() {
        let id: TransactionId = " 1709251200000 ".parse().unwrap();
        assert_eq!(id.to_string(), "1709251200000");
        assert!("txn-1".parse::<TransactionId>().is_err());
    }
}
