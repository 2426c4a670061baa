//! Modal and picker state machine for the calendar screen.
//!
//! `CalendarController` owns the event store, the single live edit buffer and
//! the two picker widgets. A modal is either closed, creating a new event, or
//! showing an existing one. There is no direct path between create and detail;
//! every modal closes back to `None` first, and closing always clears the
//! picker.

use std::fmt;

use chrono::{Local, NaiveDate};

use crate::error::{CalendarError, CalendarResult};
use crate::event::{CalendarEvent, Color, EventId, Repeat};
use crate::form::{Endpoint, FormBuffer};
use crate::grid::{GridDateClick, GridEvent, GridEventClick};
use crate::picker::{DateGridPicker, Meridiem, ScrollCommand, WheelSelection, WheelTimePicker};
use crate::store::EventStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    None,
    Create,
    Detail,
}

impl fmt::Display for ModalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModalState::None => "none",
            ModalState::Create => "create",
            ModalState::Detail => "detail",
        };
        write!(f, "{}", name)
    }
}

/// Which picker is expanded under the form's date/time summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    None,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
}

impl PickerState {
    /// Clicking the open picker's control closes it; clicking another
    /// switches to it.
    pub fn toggle(self, target: PickerState) -> PickerState {
        if self == target { PickerState::None } else { target }
    }

    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            PickerState::None => None,
            PickerState::StartDate | PickerState::StartTime => Some(Endpoint::Start),
            PickerState::EndDate | PickerState::EndTime => Some(Endpoint::End),
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, PickerState::StartDate | PickerState::EndDate)
    }

    pub fn is_time(&self) -> bool {
        matches!(self, PickerState::StartTime | PickerState::EndTime)
    }
}

#[derive(Debug, Clone)]
enum Modal {
    Closed,
    Create(FormBuffer),
    Detail(FormBuffer),
}

impl Modal {
    fn state(&self) -> ModalState {
        match self {
            Modal::Closed => ModalState::None,
            Modal::Create(_) => ModalState::Create,
            Modal::Detail(_) => ModalState::Detail,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CalendarController {
    store: EventStore,
    modal: Modal,
    picker: PickerState,
    wheel: WheelTimePicker,
    date_grid: DateGridPicker,
    default_color: Color,
}

impl CalendarController {
    pub fn new(store: EventStore, minutes_step: u32) -> CalendarResult<Self> {
        Ok(CalendarController {
            store,
            modal: Modal::Closed,
            picker: PickerState::None,
            wheel: WheelTimePicker::new(minutes_step)?,
            date_grid: DateGridPicker::new(Local::now().date_naive()),
            default_color: Color::default(),
        })
    }

    /// Color given to events created from a date click.
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    pub fn state(&self) -> ModalState {
        self.modal.state()
    }

    pub fn picker(&self) -> PickerState {
        self.picker
    }

    /// The live edit buffer, if a modal is open.
    pub fn form(&self) -> Option<&FormBuffer> {
        match &self.modal {
            Modal::Closed => None,
            Modal::Create(form) | Modal::Detail(form) => Some(form),
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn events(&self) -> &[CalendarEvent] {
        self.store.list()
    }

    /// The event list shaped for the calendar grid.
    pub fn grid_events(&self) -> Vec<GridEvent> {
        self.store.list().iter().map(GridEvent::from).collect()
    }

    pub fn wheel(&self) -> &WheelTimePicker {
        &self.wheel
    }

    pub fn date_grid(&self) -> &DateGridPicker {
        &self.date_grid
    }

    /// Whether the open detail modal may update or delete its event.
    pub fn can_edit(&self) -> bool {
        match &self.modal {
            Modal::Detail(form) => form.created_by() == self.store.current_user(),
            _ => false,
        }
    }

    /// Open the create modal with a one-hour slot on `date`.
    pub fn open_create(&mut self, date: NaiveDate) -> CalendarResult<()> {
        self.expect_closed()?;

        let form = FormBuffer::for_new_event(
            date,
            self.store.current_user().clone(),
            self.default_color.clone(),
        );
        tracing::debug!(%date, "opening create modal");
        self.modal = Modal::Create(form);
        self.picker = PickerState::None;
        Ok(())
    }

    pub fn on_date_click(&mut self, click: &GridDateClick) -> CalendarResult<()> {
        let date = click.date()?;
        self.open_create(date)
    }

    /// Open the detail modal for a stored event.
    pub fn open_event(&mut self, id: &EventId) -> CalendarResult<()> {
        self.expect_closed()?;

        let event = self
            .store
            .get(id)
            .ok_or_else(|| CalendarError::EventNotFound(id.to_string()))?;
        self.open_detail(FormBuffer::from_event(event));
        Ok(())
    }

    /// Open the detail modal from a grid click, pre-populated from the
    /// clicked event's own payload.
    pub fn on_event_click(&mut self, click: GridEventClick) -> CalendarResult<()> {
        self.expect_closed()?;

        let event = CalendarEvent::try_from(click)?;
        self.open_detail(FormBuffer::from_event(&event));
        Ok(())
    }

    /// Toggle one of the date/time pickers. Returns the scroll commands that
    /// bring the wheel in line with the targeted value; empty for the date grid.
    pub fn toggle_picker(&mut self, target: PickerState) -> CalendarResult<Vec<ScrollCommand>> {
        let form = self.form().ok_or(CalendarError::NoOpenModal)?;
        let next = self.picker.toggle(target);

        if next.is_time() && form.all_day() {
            return Err(CalendarError::TimeLocked);
        }

        let commands = self.bind_picker(next);
        self.picker = next;
        Ok(commands)
    }

    /// Switch all-day mode. Returns the wheel snaps needed when an open time
    /// picker's value was pinned or restored.
    pub fn set_all_day(&mut self, all_day: bool) -> CalendarResult<Vec<ScrollCommand>> {
        self.form_mut()?.set_all_day(all_day);
        Ok(self.bind_picker(self.picker))
    }

    /// Apply a date chosen on the grid to whichever endpoint the open date
    /// picker targets. Returns the date actually applied.
    pub fn pick_date(&mut self, date: NaiveDate) -> CalendarResult<NaiveDate> {
        let endpoint = self.open_endpoint(PickerState::is_date, "date")?;
        let applied = self.date_grid.select(date);
        self.form_mut()?.change_date(endpoint, applied);
        tracing::debug!(?endpoint, %applied, "picked date");
        Ok(applied)
    }

    pub fn wheel_select_meridiem(&mut self, meridiem: Meridiem) -> CalendarResult<WheelSelection> {
        let endpoint = self.unlocked_time_endpoint()?;
        let selection = self.wheel.select_meridiem(meridiem);
        self.commit_time(endpoint, selection)
    }

    pub fn wheel_select_hour(&mut self, hour12: u32) -> CalendarResult<WheelSelection> {
        let endpoint = self.unlocked_time_endpoint()?;
        let selection = self.wheel.select_hour(hour12)?;
        self.commit_time(endpoint, selection)
    }

    pub fn wheel_select_minute(&mut self, minute: u32) -> CalendarResult<WheelSelection> {
        let endpoint = self.unlocked_time_endpoint()?;
        let selection = self.wheel.select_minute(minute)?;
        self.commit_time(endpoint, selection)
    }

    /// Step the date grid's displayed month.
    pub fn date_grid_prev_month(&mut self) {
        self.date_grid.prev_month();
    }

    pub fn date_grid_next_month(&mut self) {
        self.date_grid.next_month();
    }

    pub fn date_grid_today(&mut self) {
        self.date_grid.go_to(Local::now().date_naive());
    }

    pub fn edit_title(&mut self, title: impl Into<String>) -> CalendarResult<()> {
        self.form_mut()?.set_title(title);
        Ok(())
    }

    pub fn edit_memo(&mut self, memo: impl Into<String>) -> CalendarResult<()> {
        self.form_mut()?.set_memo(memo);
        Ok(())
    }

    pub fn edit_repeat(&mut self, repeat: Repeat) -> CalendarResult<()> {
        self.form_mut()?.set_repeat(repeat);
        Ok(())
    }

    pub fn edit_color(&mut self, color: Color) -> CalendarResult<()> {
        self.form_mut()?.set_color(color);
        Ok(())
    }

    /// Commit the create modal. The modal closes on success and stays open
    /// with the buffer intact on failure.
    pub fn save(&mut self) -> CalendarResult<EventId> {
        let Modal::Create(form) = &self.modal else {
            return Err(self.wrong_modal(ModalState::Create));
        };

        let id = self.store.create(form)?;
        self.close();
        Ok(id)
    }

    /// Commit the detail modal's edits back to its event.
    pub fn update(&mut self) -> CalendarResult<()> {
        let Modal::Detail(form) = &self.modal else {
            return Err(self.wrong_modal(ModalState::Detail));
        };

        self.store.update(form)?;
        self.close();
        Ok(())
    }

    /// Delete the event shown in the detail modal.
    pub fn delete(&mut self) -> CalendarResult<CalendarEvent> {
        let Modal::Detail(form) = &self.modal else {
            return Err(self.wrong_modal(ModalState::Detail));
        };
        let id = form
            .id()
            .cloned()
            .ok_or_else(|| CalendarError::EventNotFound("(unsaved)".to_string()))?;

        let removed = self.store.delete(&id)?;
        self.close();
        Ok(removed)
    }

    /// Discard the buffer and close whatever modal is open.
    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        if !matches!(self.modal, Modal::Closed) {
            tracing::debug!(state = %self.modal.state(), "closing modal");
        }
        self.modal = Modal::Closed;
        self.picker = PickerState::None;
    }

    fn open_detail(&mut self, form: FormBuffer) {
        tracing::debug!(id = ?form.id(), "opening detail modal");
        self.modal = Modal::Detail(form);
        self.picker = PickerState::None;
    }

    fn expect_closed(&self) -> CalendarResult<()> {
        match self.modal {
            Modal::Closed => Ok(()),
            _ => Err(self.wrong_modal(ModalState::None)),
        }
    }

    fn wrong_modal(&self, expected: ModalState) -> CalendarError {
        match self.modal {
            Modal::Closed => CalendarError::NoOpenModal,
            _ => CalendarError::WrongModal {
                expected,
                actual: self.modal.state(),
            },
        }
    }

    fn form_mut(&mut self) -> CalendarResult<&mut FormBuffer> {
        match &mut self.modal {
            Modal::Closed => Err(CalendarError::NoOpenModal),
            Modal::Create(form) | Modal::Detail(form) => Ok(form),
        }
    }

    fn open_endpoint(
        &self,
        kind: fn(&PickerState) -> bool,
        name: &'static str,
    ) -> CalendarResult<Endpoint> {
        match self.picker.endpoint() {
            Some(endpoint) if kind(&self.picker) => Ok(endpoint),
            _ => Err(CalendarError::PickerClosed(name)),
        }
    }

    // Checked before the wheel moves, so a locked edit leaves it untouched.
    fn unlocked_time_endpoint(&self) -> CalendarResult<Endpoint> {
        let endpoint = self.open_endpoint(PickerState::is_time, "time")?;
        let form = self.form().ok_or(CalendarError::NoOpenModal)?;
        if form.all_day() {
            return Err(CalendarError::TimeLocked);
        }
        Ok(endpoint)
    }

    fn commit_time(
        &mut self,
        endpoint: Endpoint,
        selection: WheelSelection,
    ) -> CalendarResult<WheelSelection> {
        self.form_mut()?.change_time(endpoint, selection.time)?;
        tracing::debug!(?endpoint, time = %selection.time, "picked time");
        Ok(selection)
    }

    /// Point the picker widgets at the value `picker` targets.
    fn bind_picker(&mut self, picker: PickerState) -> Vec<ScrollCommand> {
        let (Some(endpoint), Some(form)) = (picker.endpoint(), self.form()) else {
            return Vec::new();
        };
        let value = form.value(endpoint);
        let start_date = form.start().date();

        if picker.is_time() {
            return self.wheel.sync_to(value.time());
        }

        let min_date = match endpoint {
            Endpoint::End => Some(start_date),
            Endpoint::Start => None,
        };
        self.date_grid.show(value.date(), min_date);
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::LocalDateTime;
    use crate::event::UserId;
    use crate::picker::{ScrollBehavior, WheelColumn};
    use chrono::NaiveTime;

    fn dt(s: &str) -> LocalDateTime {
        LocalDateTime::parse(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_test_event(id: &str, author: &str) -> CalendarEvent {
        CalendarEvent {
            id: EventId::from(id),
            title: "가족 모임".to_string(),
            start: dt("2026-02-07T09:00"),
            end: Some(dt("2026-02-07T10:00")),
            all_day: false,
            memo: None,
            repeat: Repeat::None,
            color: Color::parse("#3b82f6").unwrap(),
            created_by: UserId::new(author),
        }
    }

    fn controller() -> CalendarController {
        let store = EventStore::with_events(
            UserId::new("userA"),
            vec![make_test_event("e1", "userA"), make_test_event("e2", "userB")],
        );
        CalendarController::new(store, 5).unwrap()
    }

    #[test]
    fn test_picker_toggle() {
        assert_eq!(PickerState::None.toggle(PickerState::StartDate), PickerState::StartDate);
        assert_eq!(PickerState::StartDate.toggle(PickerState::StartDate), PickerState::None);
        assert_eq!(PickerState::StartDate.toggle(PickerState::EndTime), PickerState::EndTime);
        assert_eq!(PickerState::EndTime.endpoint(), Some(Endpoint::End));
        assert_eq!(PickerState::None.endpoint(), None);
    }

    #[test]
    fn test_open_create_uses_defaults() {
        let mut c = controller().with_default_color(Color::parse("#ff0000").unwrap());
        c.open_create(date(2026, 2, 7)).unwrap();

        assert_eq!(c.state(), ModalState::Create);
        let form = c.form().unwrap();
        assert_eq!(form.start(), dt("2026-02-07T09:00"));
        assert_eq!(form.color().as_str(), "#ff0000");
        assert_eq!(form.created_by(), &UserId::new("userA"));
        assert!(!c.can_edit());
    }

    #[test]
    fn test_no_direct_create_to_detail() {
        let mut c = controller();
        c.open_create(date(2026, 2, 7)).unwrap();
        assert_eq!(
            c.open_event(&EventId::from("e1")),
            Err(CalendarError::WrongModal {
                expected: ModalState::None,
                actual: ModalState::Create,
            })
        );
        assert_eq!(c.state(), ModalState::Create);

        c.cancel();
        c.open_event(&EventId::from("e1")).unwrap();
        assert_eq!(c.state(), ModalState::Detail);
        assert!(c.open_create(date(2026, 2, 8)).is_err());
    }

    #[test]
    fn test_commits_require_matching_modal() {
        let mut c = controller();
        assert_eq!(c.save(), Err(CalendarError::NoOpenModal));

        c.open_event(&EventId::from("e1")).unwrap();
        assert!(matches!(c.save(), Err(CalendarError::WrongModal { .. })));
        c.cancel();

        c.open_create(date(2026, 2, 7)).unwrap();
        assert!(matches!(c.update(), Err(CalendarError::WrongModal { .. })));
        assert!(matches!(c.delete(), Err(CalendarError::WrongModal { .. })));
    }

    #[test]
    fn test_close_resets_picker() {
        let mut c = controller();
        c.open_create(date(2026, 2, 7)).unwrap();
        c.toggle_picker(PickerState::StartTime).unwrap();
        assert_eq!(c.picker(), PickerState::StartTime);

        c.cancel();
        assert_eq!(c.state(), ModalState::None);
        assert_eq!(c.picker(), PickerState::None);
        assert!(c.form().is_none());
    }

    #[test]
    fn test_toggle_picker_requires_modal() {
        let mut c = controller();
        assert_eq!(c.toggle_picker(PickerState::StartDate), Err(CalendarError::NoOpenModal));
    }

    #[test]
    fn test_time_picker_locked_while_all_day() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();
        c.toggle_picker(PickerState::EndTime).unwrap();
        c.set_all_day(true).unwrap();

        let wheel_before = c.wheel().value();
        assert_eq!(c.wheel_select_hour(3), Err(CalendarError::TimeLocked));
        assert_eq!(c.wheel().value(), wheel_before);

        assert_eq!(c.toggle_picker(PickerState::StartTime), Err(CalendarError::TimeLocked));
        assert_eq!(c.picker(), PickerState::EndTime);

        // Closing an open time picker is still allowed.
        c.toggle_picker(PickerState::EndTime).unwrap();
        assert_eq!(c.picker(), PickerState::None);
    }

    #[test]
    fn test_wheel_syncs_when_switching_endpoint() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();

        let commands = c.toggle_picker(PickerState::StartTime).unwrap();
        assert!(commands.iter().all(|cmd| cmd.behavior == ScrollBehavior::Instant));
        assert_eq!(c.wheel().value(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());

        c.toggle_picker(PickerState::EndTime).unwrap();
        assert_eq!(c.wheel().value(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn test_wheel_selection_applies_repair() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();
        c.toggle_picker(PickerState::StartTime).unwrap();

        let selection = c.wheel_select_hour(11).unwrap();
        assert_eq!(selection.scrolls[0].behavior, ScrollBehavior::Smooth);
        let form = c.form().unwrap();
        assert_eq!(form.start(), dt("2026-02-07T11:00"));
        assert_eq!(form.end(), Some(dt("2026-02-07T12:00")));

        c.wheel_select_minute(30).unwrap();
        assert_eq!(c.form().unwrap().start(), dt("2026-02-07T11:30"));
    }

    #[test]
    fn test_all_day_toggle_resyncs_open_wheel() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();
        c.toggle_picker(PickerState::EndTime).unwrap();
        let hour_before = c.wheel().scroll_offset(WheelColumn::Hour);

        let commands = c.set_all_day(true).unwrap();
        assert_eq!(c.wheel().value(), NaiveTime::from_hms_opt(23, 55, 0).unwrap());
        assert!(!commands.is_empty());
        assert!(commands.iter().all(|cmd| cmd.behavior == ScrollBehavior::Instant));
        let hour = commands.iter().find(|cmd| cmd.column == WheelColumn::Hour).unwrap();
        assert_ne!(hour.offset, hour_before);
        assert_eq!(hour.offset, c.wheel().scroll_offset(WheelColumn::Hour));

        let commands = c.set_all_day(false).unwrap();
        assert_eq!(c.wheel().value(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert!(commands.iter().any(|cmd| cmd.column == WheelColumn::Hour));
    }

    #[test]
    fn test_all_day_toggle_without_time_picker_scrolls_nothing() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();
        assert!(c.set_all_day(true).unwrap().is_empty());
    }

    #[test]
    fn test_time_edit_on_last_date_does_not_overflow() {
        let mut c = controller();
        c.open_create(NaiveDate::MAX).unwrap();
        c.toggle_picker(PickerState::StartTime).unwrap();
        c.wheel_select_meridiem(Meridiem::Pm).unwrap();
        c.wheel_select_hour(11).unwrap();

        let form = c.form().unwrap();
        assert_eq!(form.start(), LocalDateTime::new(NaiveDate::MAX, NaiveTime::from_hms_opt(23, 0, 0).unwrap()));
        assert!(form.end().unwrap() >= form.start());
        assert_eq!(form.end().unwrap().to_string().rsplit('T').next(), Some("23:59"));
    }

    #[test]
    fn test_wheel_requires_time_picker() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();
        assert_eq!(c.wheel_select_hour(3), Err(CalendarError::PickerClosed("time")));
        c.toggle_picker(PickerState::StartDate).unwrap();
        assert_eq!(c.wheel_select_minute(5), Err(CalendarError::PickerClosed("time")));
        assert_eq!(c.pick_date(date(2026, 2, 9)), Ok(date(2026, 2, 9)));
    }

    #[test]
    fn test_start_date_pick_moves_end() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();
        c.toggle_picker(PickerState::StartDate).unwrap();
        assert_eq!(c.date_grid().min_date(), None);

        c.pick_date(date(2026, 2, 12)).unwrap();
        let form = c.form().unwrap();
        assert_eq!(form.start(), dt("2026-02-12T09:00"));
        assert_eq!(form.end(), Some(dt("2026-02-12T10:00")));
    }

    #[test]
    fn test_end_date_picker_min_is_start() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();
        c.toggle_picker(PickerState::EndDate).unwrap();
        assert_eq!(c.date_grid().min_date(), Some(date(2026, 2, 7)));
        assert_eq!(c.date_grid().selected(), date(2026, 2, 7));
    }

    #[test]
    fn test_can_edit_follows_author() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();
        assert!(c.can_edit());
        c.cancel();

        c.open_event(&EventId::from("e2")).unwrap();
        assert!(!c.can_edit());
        assert!(matches!(c.delete(), Err(CalendarError::PermissionDenied { .. })));
        assert_eq!(c.state(), ModalState::Detail);
        assert_eq!(c.events().len(), 2);
    }

    #[test]
    fn test_update_and_delete_close_modal() {
        let mut c = controller();
        c.open_event(&EventId::from("e1")).unwrap();
        c.edit_title("할머니 생신").unwrap();
        c.edit_memo("케이크 준비").unwrap();
        c.edit_repeat(Repeat::Yearly).unwrap();
        c.update().unwrap();

        assert_eq!(c.state(), ModalState::None);
        let updated = c.store().get(&EventId::from("e1")).unwrap();
        assert_eq!(updated.title, "할머니 생신");
        assert_eq!(updated.memo.as_deref(), Some("케이크 준비"));
        assert_eq!(updated.created_by, UserId::new("userA"));

        c.open_event(&EventId::from("e1")).unwrap();
        let removed = c.delete().unwrap();
        assert_eq!(removed.id, EventId::from("e1"));
        assert_eq!(c.state(), ModalState::None);
        assert_eq!(c.events().len(), 1);
    }

    #[test]
    fn test_event_click_opens_from_payload() {
        let mut c = controller();
        let click: GridEventClick = serde_json::from_value(serde_json::json!({
            "id": "e1",
            "title": "가족 모임",
            "startStr": "2026-02-07T09:00:00",
            "allDay": false,
            "extendedProps": { "createdBy": "userA" }
        }))
        .unwrap();
        c.on_event_click(click).unwrap();

        assert_eq!(c.state(), ModalState::Detail);
        let form = c.form().unwrap();
        assert_eq!(form.end(), None);
        assert_eq!(form.display_end(), dt("2026-02-07T09:00"));
        assert!(c.can_edit());
    }

    #[test]
    fn test_bad_date_click_keeps_modal_closed() {
        let mut c = controller();
        let click: GridDateClick =
            serde_json::from_value(serde_json::json!({ "dateStr": "2026-13-01" })).unwrap();
        assert!(c.on_date_click(&click).is_err());
        assert_eq!(c.state(), ModalState::None);
    }

    #[test]
    fn test_grid_events_mirror_store() {
        let c = controller();
        let grid = c.grid_events();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].id, "e1");
        assert_eq!(grid[1].extended_props.created_by.as_deref(), Some("userB"));
    }
}
