//! System Clock
//!
//! 設定されたタイムゾーンのシステム時計

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::domain::errors::DevlogError;
use crate::domain::repositories::clock::Clock;

/// システム時計
pub struct SystemClock {
    time_zone: Tz,
}

impl SystemClock {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// IANAタイムゾーン名（例: "Australia/Sydney"）から作成
    ///
    /// # Errors
    ///
    /// 未知のタイムゾーン名の場合に `DevlogError::Clock` を返す
    pub fn from_time_zone(name: &str) -> Result<Self, DevlogError> {
        let time_zone: Tz = name
            .parse()
            .map_err(|e| DevlogError::Clock(format!("unknown time zone '{}': {}", name, e)))?;

        Ok(Self::new(time_zone))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&self.time_zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_time_zone_sydney() {
        let clock = SystemClock::from_time_zone("Australia/Sydney").unwrap();

        assert_eq!(clock.now().timezone(), chrono_tz::Australia::Sydney);
    }

    #[test]
    fn test_from_time_zone_unknown() {
        let result = SystemClock::from_time_zone("Mars/Olympus_Mons");

        match result {
            Err(DevlogError::Clock(msg)) => assert!(msg.contains("Mars/Olympus_Mons")),
            _ => panic!("expected a clock error"),
        }
    }

    #[test]
    fn test_now_is_current() {
        let clock = SystemClock::new(chrono_tz::UTC);

        let drift = (Utc::now() - clock.now().with_timezone(&Utc)).num_seconds().abs();

        assert!(drift < 5);
    }
}
