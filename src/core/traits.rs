//! Shared traits for due-dated items.

use chrono::{Duration, NaiveDateTime};

/// An item with a due datetime that may still be open.
///
/// Implemented by quests; the urgency monitor only depends on this
/// interface, not on the quest store itself.
pub trait DueDated {
    /// When the item is due.
    fn due_at(&self) -> NaiveDateTime;

    /// Whether the item is still open (not completed).
    fn is_open(&self) -> bool;

    /// Check if the item is past its due time.
    fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.due_at() <= now
    }

    /// Check if the item is due within the given window from `now`.
    ///
    /// Items already overdue are not "due within"; they get the overdue
    /// treatment instead.
    fn is_due_within(&self, now: NaiveDateTime, window: Duration) -> bool {
        let left = self.due_at() - now;
        left > Duration::zero() && left < window
    }
}
