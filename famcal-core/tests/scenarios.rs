//! End-to-end flows through the calendar controller.

use chrono::{NaiveDate, NaiveTime};
use famcal_core::datetime::{join_date_time, split_date_time};
use famcal_core::grid::GridDateClick;
use famcal_core::{
    CalendarController, CalendarError, CalendarEvent, Color, EventId, EventStore, LocalDateTime,
    ModalState, PickerState, Repeat, UserId,
};

fn dt(s: &str) -> LocalDateTime {
    LocalDateTime::parse(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn family_meeting(id: &str, author: &str) -> CalendarEvent {
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

fn controller_for(user: &str, events: Vec<CalendarEvent>) -> CalendarController {
    CalendarController::new(EventStore::with_events(UserId::new(user), events), 5).unwrap()
}

#[test]
fn test_create_from_date_click_and_save() {
    let mut c = controller_for("userA", Vec::new());
    let click: GridDateClick =
        serde_json::from_value(serde_json::json!({ "dateStr": "2026-02-07" })).unwrap();
    c.on_date_click(&click).unwrap();

    assert_eq!(c.state(), ModalState::Create);
    let form = c.form().unwrap();
    assert_eq!(form.start(), dt("2026-02-07T09:00"));
    assert_eq!(form.end(), Some(dt("2026-02-07T10:00")));
    assert!(!form.all_day());

    c.edit_title("가족 모임").unwrap();
    let id = c.save().unwrap();

    assert_eq!(c.state(), ModalState::None);
    assert_eq!(c.events().len(), 1);
    assert_eq!(c.events()[0].id, id);
    assert_eq!(c.events()[0].title, "가족 모임");
    assert!(!id.as_str().is_empty());
}

#[test]
fn test_all_day_toggle_round_trip() {
    let mut c = controller_for("userA", vec![family_meeting("e1", "userA")]);
    c.open_event(&EventId::from("e1")).unwrap();

    c.set_all_day(true).unwrap();
    let form = c.form().unwrap();
    assert_eq!(form.start(), dt("2026-02-07T00:00"));
    assert_eq!(form.end(), Some(dt("2026-02-07T23:59")));

    c.set_all_day(false).unwrap();
    let form = c.form().unwrap();
    assert_eq!(form.start(), dt("2026-02-07T09:00"));
    assert_eq!(form.end(), Some(dt("2026-02-07T10:00")));
}

#[test]
fn test_end_date_before_start_snaps_to_start_date() {
    let mut event = family_meeting("e1", "userA");
    event.start = dt("2026-02-10T15:00");
    event.end = Some(dt("2026-02-12T18:30"));
    let mut c = controller_for("userA", vec![event]);

    c.open_event(&EventId::from("e1")).unwrap();
    c.toggle_picker(PickerState::EndDate).unwrap();
    let applied = c.pick_date(date(2026, 2, 3)).unwrap();

    assert_eq!(applied, date(2026, 2, 10));
    let form = c.form().unwrap();
    assert_eq!(form.end(), Some(dt("2026-02-10T18:30")));
    assert_eq!(form.start(), dt("2026-02-10T15:00"));
}

#[test]
fn test_blank_title_keeps_modal_open() {
    let mut c = controller_for("userA", vec![family_meeting("e1", "userA")]);
    let before = c.events().to_vec();

    c.open_create(date(2026, 2, 7)).unwrap();
    c.edit_title("   ").unwrap();
    assert_eq!(c.save(), Err(CalendarError::EmptyTitle));

    assert_eq!(c.events(), before.as_slice());
    assert_eq!(c.state(), ModalState::Create);
    assert_eq!(c.form().unwrap().title(), "   ");
}

#[test]
fn test_only_author_may_update_or_delete() {
    let events = vec![family_meeting("mine", "userA"), family_meeting("theirs", "userB")];

    for event in &events {
        let mut c = controller_for("userA", events.clone());
        let before = c.events().to_vec();
        let owned = event.created_by == UserId::new("userA");

        c.open_event(&event.id).unwrap();
        c.edit_title("바뀐 제목").unwrap();
        assert_eq!(c.update().is_ok(), owned);
        if !owned {
            assert_eq!(c.events(), before.as_slice());
            c.cancel();
        }

        c.open_event(&event.id).unwrap();
        assert_eq!(c.delete().is_ok(), owned);
        if !owned {
            assert_eq!(c.events(), before.as_slice());
        }
    }
}

#[test]
fn test_any_single_edit_keeps_end_after_start() {
    let mut c = controller_for("userA", vec![family_meeting("e1", "userA")]);
    c.open_event(&EventId::from("e1")).unwrap();

    let check = |c: &CalendarController| {
        let form = c.form().unwrap();
        assert!(form.end().unwrap() >= form.start(), "{:?}", form);
    };

    c.toggle_picker(PickerState::EndTime).unwrap();
    for hour in 1..=12 {
        c.wheel_select_hour(hour).unwrap();
        check(&c);
    }
    c.toggle_picker(PickerState::StartTime).unwrap();
    for minute in [0, 25, 55] {
        c.wheel_select_minute(minute).unwrap();
        check(&c);
    }
    c.toggle_picker(PickerState::StartDate).unwrap();
    for day in [1, 14, 28] {
        c.pick_date(date(2026, 2, day)).unwrap();
        check(&c);
    }
    c.set_all_day(true).unwrap();
    check(&c);
    c.set_all_day(false).unwrap();
    check(&c);
}

#[test]
fn test_split_join_round_trip() {
    for s in ["2026-02-07T09:00", "2024-02-29T23:59", "1999-12-31T00:00"] {
        let (d, t) = split_date_time(s).unwrap();
        assert_eq!(join_date_time(&d, &t).unwrap(), s);
    }
}

#[test]
fn test_wheel_noon_rollover_through_controller() {
    let mut event = family_meeting("e1", "userA");
    event.start = dt("2026-02-07T11:00");
    event.end = Some(dt("2026-02-07T13:00"));
    let mut c = controller_for("userA", vec![event]);

    c.open_event(&EventId::from("e1")).unwrap();
    c.toggle_picker(PickerState::StartTime).unwrap();
    let selection = c.wheel_select_hour(12).unwrap();

    assert_eq!(selection.time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    assert_eq!(c.form().unwrap().start(), dt("2026-02-07T12:00"));
}
