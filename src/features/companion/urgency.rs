//! Urgency reminders.
//!
//! Once a minute the focus view asks the monitor whether the companion
//! should nag about looming deadlines. Even when an urgent quest exists,
//! the reminder only fires with a configured probability, so the nagging
//! stays occasional rather than once per scan.

use chrono::{Duration, NaiveDateTime};

use crate::config::CompanionConfig;
use crate::core::{DueDated, RandomSource};

/// Scans due-dated items and decides when the companion should remind.
#[derive(Debug, Clone)]
pub struct UrgencyMonitor {
    window: Duration,
    probability: f64,
}

impl UrgencyMonitor {
    /// Create a monitor from companion settings.
    #[must_use]
    pub fn new(config: &CompanionConfig) -> Self {
        Self {
            window: Duration::hours(config.urgency_window_hours),
            probability: config.urgency_probability.clamp(0.0, 1.0),
        }
    }

    /// Whether any open item is due within the urgency window.
    pub fn has_urgent<T: DueDated>(&self, items: &[T], now: NaiveDateTime) -> bool {
        items
            .iter()
            .any(|item| item.is_open() && item.is_due_within(now, self.window))
    }

    /// Run one scan: returns `true` when the companion should speak an
    /// Urgent line.
    pub fn should_remind<T: DueDated>(
        &self,
        items: &[T],
        now: NaiveDateTime,
        rng: &mut dyn RandomSource,
    ) -> bool {
        self.has_urgent(items, now) && rng.next_f64() < self.probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedRandom;
    use chrono::NaiveDate;

    struct Item {
        due: NaiveDateTime,
        open: bool,
    }

    impl DueDated for Item {
        fn due_at(&self) -> NaiveDateTime {
            self.due
        }

        fn is_open(&self) -> bool {
            self.open
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn due_in_hours(hours: i64, open: bool) -> Item {
        Item {
            due: now() + Duration::hours(hours),
            open,
        }
    }

    fn monitor() -> UrgencyMonitor {
        UrgencyMonitor::new(&CompanionConfig::default())
    }

    #[test]
    fn test_reminds_below_threshold() {
        let items = vec![due_in_hours(12, true)];
        assert!(monitor().should_remind(&items, now(), &mut FixedRandom(0.1)));
    }

    #[test]
    fn test_suppressed_above_threshold() {
        let items = vec![due_in_hours(12, true)];
        assert!(!monitor().should_remind(&items, now(), &mut FixedRandom(0.9)));
    }

    #[test]
    fn test_no_urgent_items_never_reminds() {
        // Due next week: outside the 24h window.
        let items = vec![due_in_hours(24 * 7, true)];
        assert!(!monitor().should_remind(&items, now(), &mut FixedRandom(0.0)));
    }

    #[test]
    fn test_completed_items_ignored() {
        let items = vec![due_in_hours(12, false)];
        assert!(!monitor().should_remind(&items, now(), &mut FixedRandom(0.0)));
    }

    #[test]
    fn test_overdue_items_not_urgent() {
        let items = vec![due_in_hours(-2, true)];
        assert!(!monitor().has_urgent(&items, now()));
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<Item> = vec![];
        assert!(!monitor().should_remind(&items, now(), &mut FixedRandom(0.0)));
    }
}
