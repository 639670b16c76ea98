use chrono::{Datelike, NaiveDate};
use shared::calendar::{self, CalendarCell};
use std::rc::Rc;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub reference_date: NaiveDate,
    pub today: NaiveDate,
    pub title: String,
    pub cells: Rc<Vec<CalendarCell>>,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
}

#[hook]
pub fn use_calendar() -> UseCalendarResult {
    let today = *use_memo((), |_| calendar::today());
    let reference_date = use_state(move || today);

    // Regenerate only when the displayed month changes
    let month_key = (reference_date.year(), reference_date.month());
    let cells = {
        let reference_date = *reference_date;
        use_memo(month_key, move |_| calendar::generate_month_grid(reference_date))
    };

    let prev_month = {
        let reference_date = reference_date.clone();
        use_callback(*reference_date, move |_: MouseEvent, current| {
            reference_date.set(calendar::prev_month(*current));
        })
    };

    let next_month = {
        let reference_date = reference_date.clone();
        use_callback(*reference_date, move |_: MouseEvent, current| {
            reference_date.set(calendar::next_month(*current));
        })
    };

    let state = CalendarState {
        reference_date: *reference_date,
        today,
        title: calendar::month_title(*reference_date),
        cells,
    };

    let actions = UseCalendarActions { prev_month, next_month };

    UseCalendarResult { state, actions }
}
