use chrono::{Datelike, NaiveDate};
use shared::calendar::{CalendarCell, WeekdayKind, WEEKDAY_LABELS};
use shared::Room;
use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::components::reservation_modal::ReservationModal;
use crate::hooks::use_calendar;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub room: Room,
    pub api_client: ApiClient,
    pub on_room_change: Callback<Room>,
}

fn weekday_class(kind: WeekdayKind) -> &'static str {
    match kind {
        WeekdayKind::Sunday => "sunday",
        WeekdayKind::Saturday => "saturday",
        WeekdayKind::Weekday => "weekday",
    }
}

/// Monthly reservation calendar for one room
#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar = use_calendar();
    let selected_date = use_state(|| Option::<NaiveDate>::None);

    let on_room_select = {
        let on_room_change = props.on_room_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(room) = Room::from_name(&select.value()) {
                on_room_change.emit(room);
            }
        })
    };

    let on_day_click = {
        let selected_date = selected_date.clone();
        Callback::from(move |cell: CalendarCell| {
            if cell.is_selectable() {
                selected_date.set(Some(cell.date));
            }
        })
    };

    let on_modal_close = {
        let selected_date = selected_date.clone();
        Callback::from(move |_: ()| selected_date.set(None))
    };

    let today = calendar.state.today;
    let other_room = props.room.other();

    html! {
        <div class="calendar-page">
            <div class="calendar">
                <div class="calendar-header">
                    <div class="calendar-header-title">{"📅 월별 예약현황"}</div>
                    <select class="room-switcher" onchange={on_room_select}>
                        <option value="" selected={true}>{props.room.name()}</option>
                        <option value={other_room.name()}>{other_room.name()}</option>
                    </select>
                </div>

                <div class="calendar-nav">
                    <button
                        type="button"
                        class="calendar-nav-button"
                        onclick={calendar.actions.prev_month.clone()}
                        title="이전 달"
                    >
                        {"◀"}
                    </button>
                    <div class="calendar-title">{&calendar.state.title}</div>
                    <button
                        type="button"
                        class="calendar-nav-button"
                        onclick={calendar.actions.next_month.clone()}
                        title="다음 달"
                    >
                        {"▶"}
                    </button>
                </div>

                <div class="calendar-weekdays">
                    {for WEEKDAY_LABELS.iter().enumerate().map(|(index, label)| {
                        let class = match index {
                            0 => "weekday sunday",
                            6 => "weekday saturday",
                            _ => "weekday",
                        };
                        html! { <div {class}>{*label}</div> }
                    })}
                </div>

                <div class="calendar-grid">
                    {for calendar.state.cells.iter().map(|cell| {
                        let cell = *cell;
                        let onclick = {
                            let on_day_click = on_day_click.clone();
                            Callback::from(move |_: MouseEvent| on_day_click.emit(cell))
                        };
                        let class = classes!(
                            "calendar-day",
                            if cell.in_current_month { "current-month" } else { "other-month" },
                        );
                        let number_class = classes!(
                            "day-number",
                            weekday_class(cell.weekday_kind()),
                            cell.is_today(today).then_some("today"),
                        );

                        html! {
                            <button
                                type="button"
                                key={cell.date.to_string()}
                                {class}
                                disabled={!cell.is_selectable()}
                                {onclick}
                            >
                                <div class={number_class}>{cell.date.day()}</div>
                            </button>
                        }
                    })}
                </div>
            </div>

            {if let Some(date) = *selected_date {
                html! {
                    <ReservationModal
                        key={date.to_string()}
                        room={props.room}
                        {date}
                        {today}
                        api_client={props.api_client.clone()}
                        on_close={on_modal_close}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
