use chrono::{DateTime, Utc};
use std::fmt;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// 남은 경매 시간 (초 단위는 버림)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    Ended,
    Left { days: i64, hours: i64, minutes: i64 },
}

impl TimeRemaining {
    /// 남은 밀리초로부터 계산
    pub fn from_millis(ms: i64) -> Self {
        if ms <= 0 {
            return TimeRemaining::Ended;
        }
        TimeRemaining::Left {
            days: ms / DAY_MS,
            hours: (ms % DAY_MS) / HOUR_MS,
            minutes: (ms % HOUR_MS) / MINUTE_MS,
        }
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRemaining::Ended => write!(f, "Auction ended"),
            TimeRemaining::Left {
                days,
                hours,
                minutes,
            } => write!(f, "{}d {}h {}m", days, hours, minutes),
        }
    }
}

pub fn time_remaining(ends_at: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    TimeRemaining::from_millis((ends_at - now).num_milliseconds())
}

/// "Ends at: ..." 문구
pub fn ends_at_label(ends_at: DateTime<Utc>) -> String {
    format!("Ends at: {}", ends_at.format("%Y-%m-%d %H:%M UTC"))
}
