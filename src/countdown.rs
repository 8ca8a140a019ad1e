//! Countdown Math
//!
//! Remaining time until a target instant, at one-second resolution.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

/// Remaining time split into display units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0);
        Self {
            hours: ms / 3_600_000,
            minutes: (ms % 3_600_000) / 60_000,
            seconds: (ms % 60_000) / 1000,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Result of sampling the countdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Target still ahead (or exactly now)
    Running(Remaining),
    /// Target has passed; stop updating
    Expired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Countdown ending `hours` after `now`; an unrepresentable target
    /// ends immediately
    pub fn hours_from(now: DateTime<Utc>, hours: i64) -> Self {
        let target = TimeDelta::try_hours(hours)
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(now);
        Self::new(target)
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn tick(&self, now: DateTime<Utc>) -> Tick {
        let remaining = self.target - now;
        if remaining < TimeDelta::zero() {
            Tick::Expired
        } else {
            Tick::Running(Remaining::from_millis(remaining.num_milliseconds()))
        }
    }

    /// Text shown at `now`; an expired countdown reads as zero
    pub fn display(&self, now: DateTime<Utc>) -> String {
        match self.tick(now) {
            Tick::Running(remaining) => remaining.to_string(),
            Tick::Expired => Remaining::default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_huge_hours_do_not_panic() {
        let now = start();
        assert_eq!(Countdown::hours_from(now, i64::MAX).target(), now);
        assert_eq!(Countdown::hours_from(now, i64::MIN).target(), now);
        assert_eq!(Countdown::hours_from(now, 1_000_000_000_000).target(), now);
    }

    #[test]
    fn test_three_hour_scenario() {
        let now = start();
        let countdown = Countdown::hours_from(now, 3);
        assert_eq!(countdown.display(now), "3h 0m 0s");
        assert_eq!(countdown.display(now + TimeDelta::seconds(1)), "2h 59m 59s");
        assert_eq!(countdown.display(now + TimeDelta::hours(3)), "0h 0m 0s");
        assert_eq!(countdown.tick(now + TimeDelta::hours(3)), Tick::Running(Remaining::default()));
        assert_eq!(countdown.tick(now + TimeDelta::hours(3) + TimeDelta::seconds(1)), Tick::Expired);
        assert_eq!(countdown.display(now + TimeDelta::hours(4)), "0h 0m 0s");
    }

    #[test]
    fn test_strictly_decreasing_until_zero() {
        let now = start();
        let countdown = Countdown::new(now + TimeDelta::seconds(125));
        let mut previous: Option<i64> = None;
        let mut ticks = 0;
        for elapsed in 0.. {
            match countdown.tick(now + TimeDelta::seconds(elapsed)) {
                Tick::Running(remaining) => {
                    let secs = remaining.total_seconds();
                    if let Some(prev) = previous {
                        assert!(secs < prev, "{} !< {}", secs, prev);
                    }
                    previous = Some(secs);
                    ticks += 1;
                }
                Tick::Expired => break,
            }
        }
        assert_eq!(previous, Some(0));
        assert_eq!(ticks, 126);
    }

    #[test]
    fn test_sub_second_remainder_truncates() {
        let now = start();
        let countdown = Countdown::new(now + TimeDelta::milliseconds(61_999));
        assert_eq!(countdown.display(now), "0h 1m 1s");
    }

    #[test]
    fn test_from_millis_units() {
        let remaining = Remaining::from_millis(3 * 3_600_000 + 25 * 60_000 + 7_000);
        assert_eq!(remaining, Remaining { hours: 3, minutes: 25, seconds: 7 });
        assert_eq!(Remaining::from_millis(-5).total_seconds(), 0);
    }
}
