//! In-memory event store.
//!
//! The store owns the event list for one session. Mutations are scoped by the
//! current user: only the author of an event may update or delete it. The
//! modal hides those actions from everyone else, so the checks here are a
//! backstop that reports `PermissionDenied` and leaves the list unchanged.

use crate::error::{CalendarError, CalendarResult};
use crate::event::{CalendarEvent, EventId, UserId};
use crate::form::{FormBuffer, is_ordered};

#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
    current_user: UserId,
}

impl EventStore {
    pub fn new(current_user: UserId) -> Self {
        EventStore {
            events: Vec::new(),
            current_user,
        }
    }

    pub fn with_events(current_user: UserId, events: Vec<CalendarEvent>) -> Self {
        EventStore {
            events,
            current_user,
        }
    }

    pub fn current_user(&self) -> &UserId {
        &self.current_user
    }

    /// All events in insertion order.
    pub fn list(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Append a new event authored by the current user.
    pub fn create(&mut self, buffer: &FormBuffer) -> CalendarResult<EventId> {
        check_range(buffer)?;
        let event = buffer.to_new_event(&self.current_user)?;
        let id = event.id.clone();

        tracing::debug!(id = %id, title = %event.title, "created event");
        self.events.push(event);
        Ok(id)
    }

    /// Replace the event matching the buffer's id, keeping its author.
    pub fn update(&mut self, buffer: &FormBuffer) -> CalendarResult<()> {
        let id = buffer
            .id()
            .ok_or_else(|| CalendarError::EventNotFound("(unsaved)".to_string()))?;

        // Validate before touching the list so a failure leaves it unchanged.
        buffer.committed_title()?;
        check_range(buffer)?;

        let index = self.owned_index(id)?;
        buffer.apply_to(&mut self.events[index])?;

        tracing::debug!(id = %id, "updated event");
        Ok(())
    }

    /// Remove an event, returning it.
    pub fn delete(&mut self, id: &EventId) -> CalendarResult<CalendarEvent> {
        let index = self.owned_index(id)?;
        let removed = self.events.remove(index);

        tracing::debug!(id = %id, "deleted event");
        Ok(removed)
    }

    fn owned_index(&self, id: &EventId) -> CalendarResult<usize> {
        let index = self
            .events
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))?;

        if !self.events[index].is_owned_by(&self.current_user) {
            tracing::warn!(id = %id, user = %self.current_user, "refused to modify another user's event");
            return Err(CalendarError::PermissionDenied {
                event_id: id.to_string(),
                user: self.current_user.to_string(),
            });
        }

        Ok(index)
    }
}

// FormBuffer edits always repair the ordering, so this only fires for
// buffers assembled outside the normal edit flow.
fn check_range(buffer: &FormBuffer) -> CalendarResult<()> {
    if is_ordered(buffer.start(), buffer.end()) {
        return Ok(());
    }

    let start = buffer.start().to_string();
    let end = buffer.display_end().to_string();
    tracing::warn!(%start, %end, "rejected event with end before start");
    Err(CalendarError::InvalidRange { start, end })
}
