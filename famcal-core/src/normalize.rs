//! Start/end ordering repair.
//!
//! Whichever endpoint the user just edited is authoritative; the other one is
//! moved so that `end >= start` keeps holding. Edits are never rejected.

use crate::datetime::LocalDateTime;

/// Gap put between the endpoints when one of them has to be moved.
pub const REPAIR_GAP_HOURS: i64 = 1;

/// After `start` changed: if it now lies after `end`, move `end` to one hour
/// past the new start. Returns `(start, end)`.
pub fn ensure_order_after_start_change(
    start: LocalDateTime,
    end: LocalDateTime,
) -> (LocalDateTime, LocalDateTime) {
    if start > end {
        let repaired = start.add_hours(REPAIR_GAP_HOURS);
        tracing::debug!(%start, old_end = %end, new_end = %repaired, "repaired end after start change");
        return (start, repaired);
    }
    (start, end)
}

/// After `end` changed: if it now lies before `start`, move `start` to one
/// hour before the new end. Returns `(start, end)`.
pub fn ensure_order_after_end_change(
    start: LocalDateTime,
    end: LocalDateTime,
) -> (LocalDateTime, LocalDateTime) {
    if end < start {
        let repaired = end.add_hours(-REPAIR_GAP_HOURS);
        tracing::debug!(%end, old_start = %start, new_start = %repaired, "repaired start after end change");
        return (repaired, end);
    }
    (start, end)
}

/// Start-change repair for an event whose end may be absent.
/// An open-ended event is left open-ended.
pub fn repair_end(start: LocalDateTime, end: Option<LocalDateTime>) -> Option<LocalDateTime> {
    end.map(|end| ensure_order_after_start_change(start, end).1)
}
