use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Seconds since the Unix epoch, stored in 32 bits. Zero means "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u32);

impl Timestamp {
    pub const fn new(seconds: u32) -> Self {
        Self(seconds)
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_valid() {
            return None;
        }
        Utc.timestamp_opt(self.0 as i64, 0).single()
    }

    /// Parse `YYYY-MM-DDThh:mm:ssZ`.
    pub fn from_iso(s: &str) -> Result<Self> {
        let naive = NaiveDateTime::parse_from_str(s, ISO_FORMAT)
            .map_err(|_| Error::InvalidTimestamp(s.to_owned()))?;
        Self::try_from(naive.and_utc())
    }
}

impl From<u32> for Timestamp {
    fn from(seconds: u32) -> Self {
        Self(seconds)
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = Error;

    fn try_from(value: DateTime<Utc>) -> Result<Self> {
        u32::try_from(value.timestamp())
            .map(Timestamp)
            .map_err(|_| Error::InvalidTimestamp(value.to_rfc3339()))
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_iso(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.format(ISO_FORMAT)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_round_trip() {
        let ts: Timestamp = "2013-07-15T14:39:22Z".parse().unwrap();
        assert_eq!(ts.seconds(), 1373899162);
        assert_eq!(ts.to_string(), "2013-07-15T14:39:22Z");
    }

    #[test]
    fn test_invalid() {
        let ts = Timestamp::default();
        assert!(!ts.is_valid());
        assert_eq!(ts.to_datetime(), None);
        assert_eq!(ts.to_string(), "");
        assert!(Timestamp::from_iso("yesterday").is_err());
        assert!(Timestamp::from_iso("1960-01-01T00:00:00Z").is_err());
    }
}
