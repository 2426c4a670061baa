use anyhow::Result;
use chrono::{Local, Months, NaiveDate};
use dialoguer::{Confirm, Input, Select};
use famcal_core::datetime::parse_date;
use famcal_core::grid::{GridDateClick, GridEvent, GridEventClick};
use famcal_core::picker::date_grid::first_of_month;
use famcal_core::picker::{Meridiem, WheelColumn};
use famcal_core::{
    CalendarController, CalendarEvent, CalendarResult, Color, EventId, EventStore, LocalDateTime,
    ModalState, PickerState, Repeat, UserId,
};
use owo_colors::OwoColorize;

use super::App;
use crate::render::{Render, render_month};

#[derive(Debug, Clone, Default)]
pub struct CalendarArgs {
    /// Overrides `user_id` from the config.
    pub user: Option<String>,
    /// Seed the store with sample events.
    pub demo: bool,
}

pub fn run(app: &App, args: CalendarArgs) -> Result<()> {
    let user = args
        .user
        .or_else(|| app.config.user_id.clone())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No user id.\n\n\
                Pass --user <id>, or set user_id in ~/.config/famcal/config.toml"
            )
        })?;

    let events = if args.demo { demo_events()? } else { Vec::new() };
    let store = EventStore::with_events(UserId::new(user), events);
    let mut controller = CalendarController::new(store, app.config.minutes_step)?
        .with_default_color(app.config.default_color.clone());

    let today = Local::now().date_naive();
    let mut month = first_of_month(today);

    loop {
        if controller.state() == ModalState::None {
            if !browse(&mut controller, &mut month, today)? {
                break;
            }
        } else {
            edit(&mut controller)?;
        }
    }

    Ok(())
}

fn demo_events() -> Result<Vec<CalendarEvent>> {
    Ok(vec![CalendarEvent {
        id: EventId::from("e1"),
        title: "가족 모임".to_string(),
        start: LocalDateTime::parse("2026-02-07T09:00")?,
        end: Some(LocalDateTime::parse("2026-02-07T10:00")?),
        all_day: false,
        memo: None,
        repeat: Repeat::None,
        color: Color::parse("#3b82f6")?,
        created_by: UserId::new("userA"),
    }])
}

/// Month view with the modal closed. Returns false when the user quits.
fn browse(c: &mut CalendarController, month: &mut NaiveDate, today: NaiveDate) -> Result<bool> {
    println!("\n{}\n", render_month(*month, today, c.events()));

    let items = ["새 일정", "일정 열기", "이전 달", "다음 달", "오늘", "종료"];
    let selection = Select::new()
        .with_prompt("  무엇을 할까요?")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => {
            let default = if first_of_month(today) == *month { today } else { *month };
            let date = prompt_with_retry("  날짜 (YYYY-MM-DD)", &default.to_string(), parse_date)?;
            let click = GridDateClick {
                date_str: date.to_string(),
            };
            report(c.on_date_click(&click));
        }
        1 => open_event(c)?,
        2 => *month = month.checked_sub_months(Months::new(1)).unwrap_or(*month),
        3 => *month = month.checked_add_months(Months::new(1)).unwrap_or(*month),
        4 => *month = first_of_month(today),
        _ => return Ok(false),
    }

    Ok(true)
}

fn open_event(c: &mut CalendarController) -> Result<()> {
    let events = c.grid_events();
    if events.is_empty() {
        println!("{}", "   No events yet".dimmed());
        return Ok(());
    }

    let labels: Vec<String> = c.events().iter().map(|e| e.render()).collect();
    let selection = Select::new()
        .with_prompt("  Event")
        .items(&labels)
        .default(0)
        .interact()?;

    report(c.on_event_click(grid_click(&events[selection])));
    Ok(())
}

/// The payload the calendar grid sends when one of its events is clicked.
fn grid_click(event: &GridEvent) -> GridEventClick {
    GridEventClick {
        id: event.id.clone(),
        title: Some(event.title.clone()),
        start_str: Some(event.start.clone()),
        end_str: event.end.clone(),
        all_day: event.all_day,
        background_color: Some(event.background_color.clone()),
        extended_props: event.extended_props.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalAction {
    Title,
    Memo,
    Repeat,
    Color,
    AllDay,
    Picker(PickerState),
    Save,
    Update,
    Delete,
    Close,
}

impl ModalAction {
    fn label(&self, c: &CalendarController) -> String {
        let all_day = c.form().is_some_and(|f| f.all_day());
        let label = match self {
            ModalAction::Title => "제목",
            ModalAction::Memo => "메모",
            ModalAction::Repeat => "반복",
            ModalAction::Color => "색상",
            ModalAction::AllDay if all_day => "종일 끄기",
            ModalAction::AllDay => "종일 켜기",
            ModalAction::Picker(PickerState::StartDate) => "시작 날짜",
            ModalAction::Picker(PickerState::StartTime) => "시작 시간",
            ModalAction::Picker(PickerState::EndDate) => "종료 날짜",
            ModalAction::Picker(PickerState::EndTime) => "종료 시간",
            ModalAction::Picker(PickerState::None) => "선택 닫기",
            ModalAction::Save => "저장",
            ModalAction::Update => "수정 저장",
            ModalAction::Delete => "삭제",
            ModalAction::Close if c.state() == ModalState::Create => "취소",
            ModalAction::Close => "닫기",
        };
        label.to_string()
    }
}

fn modal_actions(c: &CalendarController) -> Vec<ModalAction> {
    let all_day = c.form().is_some_and(|f| f.all_day());

    let mut actions = vec![
        ModalAction::Title,
        ModalAction::Memo,
        ModalAction::Repeat,
        ModalAction::Color,
        ModalAction::AllDay,
        ModalAction::Picker(PickerState::StartDate),
    ];
    if !all_day {
        actions.push(ModalAction::Picker(PickerState::StartTime));
    }
    actions.push(ModalAction::Picker(PickerState::EndDate));
    if !all_day {
        actions.push(ModalAction::Picker(PickerState::EndTime));
    }

    match c.state() {
        ModalState::Create => actions.push(ModalAction::Save),
        ModalState::Detail if c.can_edit() => {
            actions.push(ModalAction::Update);
            actions.push(ModalAction::Delete);
        }
        _ => {}
    }

    actions.push(ModalAction::Close);
    actions
}

/// One round of the open modal.
fn edit(c: &mut CalendarController) -> Result<()> {
    println!("\n{}\n", c.render());

    let picker = c.picker();
    if picker.is_date() {
        return date_picker(c);
    }
    if picker.is_time() {
        return time_picker(c);
    }

    let actions = modal_actions(c);
    let labels: Vec<String> = actions.iter().map(|a| a.label(c)).collect();
    let selection = Select::new()
        .with_prompt("  편집")
        .items(&labels)
        .default(0)
        .interact()?;

    apply(c, actions[selection])
}

fn apply(c: &mut CalendarController, action: ModalAction) -> Result<()> {
    let Some(form) = c.form() else {
        return Ok(());
    };

    match action {
        ModalAction::Title => {
            let title = prompt_text("  제목", form.title())?;
            report(c.edit_title(title));
        }
        ModalAction::Memo => {
            let memo = prompt_text("  메모", form.memo())?;
            report(c.edit_memo(memo));
        }
        ModalAction::Repeat => {
            let current = form.repeat();
            let labels: Vec<&str> = Repeat::ALL.iter().map(|r| r.label()).collect();
            let default = Repeat::ALL.iter().position(|r| *r == current).unwrap_or(0);
            let selection = Select::new()
                .with_prompt("  반복")
                .items(&labels)
                .default(default)
                .interact()?;
            report(c.edit_repeat(Repeat::ALL[selection]));
        }
        ModalAction::Color => {
            let color = prompt_with_retry("  색상 (#rrggbb)", form.color().as_str(), Color::parse)?;
            report(c.edit_color(color));
        }
        ModalAction::AllDay => {
            let all_day = !form.all_day();
            report(c.set_all_day(all_day));
        }
        ModalAction::Picker(target) => {
            report(c.toggle_picker(target));
        }
        ModalAction::Save => {
            if report(c.save()).is_some() {
                println!("{}", "저장되었습니다.".green());
            }
        }
        ModalAction::Update => {
            if report(c.update()).is_some() {
                println!("{}", "수정되었습니다.".green());
            }
        }
        ModalAction::Delete => {
            let confirmed = Confirm::new()
                .with_prompt(format!("  '{}' 일정을 삭제할까요?", form.title()))
                .default(false)
                .interact()?;
            if confirmed && report(c.delete()).is_some() {
                println!("{}", "삭제되었습니다.".green());
            }
        }
        ModalAction::Close => c.cancel(),
    }

    Ok(())
}

fn date_picker(c: &mut CalendarController) -> Result<()> {
    let items = ["날짜 입력", "이전 달", "다음 달", "오늘", "닫기"];
    let selection = Select::new()
        .with_prompt("  날짜")
        .items(&items)
        .default(0)
        .interact()?;

    match selection {
        0 => {
            let current = c.date_grid().selected().to_string();
            let date = prompt_with_retry("  날짜 (YYYY-MM-DD)", &current, parse_date)?;
            if let Some(applied) = report(c.pick_date(date)) {
                if applied != date {
                    println!(
                        "{}",
                        format!("   시작일 이전으로는 선택할 수 없어 {}(으)로 맞췄습니다.", applied).dimmed()
                    );
                }
            }
        }
        1 => c.date_grid_prev_month(),
        2 => c.date_grid_next_month(),
        3 => c.date_grid_today(),
        _ => {
            report(c.toggle_picker(c.picker()));
        }
    }

    Ok(())
}

fn time_picker(c: &mut CalendarController) -> Result<()> {
    let items = ["오전/오후", "시", "분", "닫기"];
    let selection = Select::new()
        .with_prompt("  시간")
        .items(&items)
        .default(1)
        .interact()?;

    let column = match selection {
        0 => WheelColumn::Meridiem,
        1 => WheelColumn::Hour,
        2 => WheelColumn::Minute,
        _ => {
            report(c.toggle_picker(c.picker()));
            return Ok(());
        }
    };

    let wheel = c.wheel();
    let options = wheel.items(column);
    let index = Select::new()
        .with_prompt("  선택")
        .items(&options)
        .default(wheel.selected_index(column))
        .interact()?;

    match column {
        WheelColumn::Meridiem => {
            report(c.wheel_select_meridiem(Meridiem::ALL[index]));
        }
        WheelColumn::Hour => {
            report(c.wheel_select_hour(index as u32 + 1));
        }
        WheelColumn::Minute => {
            let minute = c.wheel().minute_options()[index];
            report(c.wheel_select_minute(minute));
        }
    }

    Ok(())
}

/// Print a core error in red and carry on.
fn report<T>(result: CalendarResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("  {}", e.to_string().red());
            None
        }
    }
}

fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_with_retry<T, F>(prompt: &str, default: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> CalendarResult<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
