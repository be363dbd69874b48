//! Market session clock deciding when intraday rules apply.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike, Utc, Weekday};

use crate::config::Config;
use crate::types::{EvaluationMode, MarketStatus};

/// Session open, encoded as `hour * 100 + minute`.
pub const SESSION_OPEN: u32 = 915;
/// Session close (inclusive), encoded as `hour * 100 + minute`.
pub const SESSION_CLOSE: u32 = 1530;

/// True when `now` falls on a weekday between 09:15 and 15:30 inclusive,
/// read in `now`'s own time zone.
pub fn is_intraday_active<Tz: TimeZone>(now: &DateTime<Tz>) -> bool {
    let weekday = !matches!(now.weekday(), Weekday::Sat | Weekday::Sun);
    let time_of_day = now.hour() * 100 + now.minute();

    weekday && (SESSION_OPEN..=SESSION_CLOSE).contains(&time_of_day)
}

/// Clock pinned to the exchange's UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct MarketClock {
    offset: FixedOffset,
}

impl MarketClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.market_offset)
    }

    /// Convert an instant to exchange-local time.
    pub fn local_time(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        now.with_timezone(&self.offset)
    }

    pub fn is_intraday_active(&self, now: DateTime<Utc>) -> bool {
        is_intraday_active(&self.local_time(now))
    }

    /// Rule set to apply at `now`.
    pub fn mode_at(&self, now: DateTime<Utc>) -> EvaluationMode {
        if self.is_intraday_active(now) {
            EvaluationMode::Intraday
        } else {
            EvaluationMode::LongTerm
        }
    }

    /// Full session status at `now`.
    pub fn status_at(&self, now: DateTime<Utc>, config: &Config) -> MarketStatus {
        let mode = self.mode_at(now);
        MarketStatus {
            intraday_active: mode == EvaluationMode::Intraday,
            mode,
            refresh_secs: mode.refresh_secs(config),
            local_time: self.local_time(now).to_rfc3339(),
        }
    }
}
