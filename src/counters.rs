//! Display Counters
//!
//! Demo progress day and the simulated join counter.

/// Local-storage key holding the current day as a decimal string
pub const PROGRESS_DAY_KEY: &str = "masculineEnergyDay";

/// Protocol day shown in the top progress bar, always within `1..=total`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressDay {
    day: u32,
    total: u32,
}

impl ProgressDay {
    pub fn new(total: u32) -> Self {
        Self {
            day: 1,
            total: total.max(1),
        }
    }

    /// Restore from storage; junk falls back to day 1, out-of-range is clamped
    pub fn restore(total: u32, stored: Option<&str>) -> Self {
        let mut progress = Self::new(total);
        if let Some(day) = stored.and_then(|s| s.trim().parse::<i64>().ok()) {
            progress.day = day.clamp(1, progress.total as i64) as u32;
        }
        progress
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Next day, wrapping from the last day back to 1
    pub fn advance(&mut self) -> u32 {
        self.day = if self.day < self.total { self.day + 1 } else { 1 };
        self.day
    }

    pub fn percent(&self) -> f64 {
        self.day as f64 / self.total as f64 * 100.0
    }

    pub fn label(&self) -> String {
        format!("Day {}/{}", self.day, self.total)
    }
}

/// Simulated sign-up numbers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoinCounts {
    pub total: u64,
    pub weekly: u64,
}

impl JoinCounts {
    /// One simulated join. `roll` is uniform in `[0, 1)`; the weekly count
    /// also moves when it falls below `weekly_chance`. Returns whether it did.
    pub fn tick(&mut self, roll: f64, weekly_chance: f64) -> bool {
        self.total += 1;
        let weekly = roll < weekly_chance;
        if weekly {
            self.weekly += 1;
        }
        weekly
    }
}

/// `7214` -> `"7,214"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_wraps() {
        let mut progress = ProgressDay::restore(30, Some("29"));
        assert_eq!(progress.advance(), 30);
        assert_eq!(progress.label(), "Day 30/30");
        assert_eq!(progress.advance(), 1);
    }

    #[test]
    fn test_progress_restore_bounds() {
        assert_eq!(ProgressDay::restore(30, None).day(), 1);
        assert_eq!(ProgressDay::restore(30, Some("abc")).day(), 1);
        assert_eq!(ProgressDay::restore(30, Some("0")).day(), 1);
        assert_eq!(ProgressDay::restore(30, Some("-4")).day(), 1);
        assert_eq!(ProgressDay::restore(30, Some("99")).day(), 30);
        assert_eq!(ProgressDay::restore(30, Some(" 12 ")).day(), 12);
    }

    #[test]
    fn test_progress_percent() {
        let progress = ProgressDay::restore(30, Some("15"));
        assert!((progress.percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_join_tick() {
        let mut counts = JoinCounts { total: 7214, weekly: 102 };
        assert!(!counts.tick(0.9, 0.3));
        assert_eq!(counts, JoinCounts { total: 7215, weekly: 102 });
        assert!(counts.tick(0.1, 0.3));
        assert_eq!(counts, JoinCounts { total: 7216, weekly: 103 });
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(7214), "7,214");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
