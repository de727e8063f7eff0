// --- File: crates/carebook_common/src/clock.rs ---
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::{config_error, CarebookError};

/// Source of "today" for the calendar rules.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in a configured time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    time_zone: Tz,
}

impl SystemClock {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// Builds a clock from an IANA zone name such as `Europe/Zurich`.
    pub fn from_zone_name(name: &str) -> Result<Self, CarebookError> {
        let time_zone = Tz::from_str(name)
            .map_err(|_| config_error(format!("unknown time zone '{}'", name)))?;
        Ok(Self::new(time_zone))
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.time_zone).date_naive()
    }
}

/// A clock that is stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_name_parsing() {
        assert!(SystemClock::from_zone_name("Europe/Zurich").is_ok());
        assert!(SystemClock::from_zone_name("UTC").is_ok());

        let err = SystemClock::from_zone_name("Mars/Olympus").unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
