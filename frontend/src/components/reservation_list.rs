use shared::Reservation;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReservationListProps {
    pub reservations: Rc<Vec<Reservation>>,
}

/// Read-only list of the day's existing reservations
#[function_component(ReservationList)]
pub fn reservation_list(props: &ReservationListProps) -> Html {
    if props.reservations.is_empty() {
        return html! {
            <div class="reservation-list-empty">{"예약된 일정이 없습니다."}</div>
        };
    }

    html! {
        <ul class="reservation-list">
            {for props.reservations.iter().enumerate().map(|(index, reservation)| {
                html! {
                    <li class="reservation-card" key={format!("{}-{}", index, reservation.id)}>
                        <div class="reservation-times">
                            {"⏰ "}
                            <span>{reservation.selected_time.join(", ")}</span>
                        </div>
                        <div class="reservation-topic">{&reservation.topic}</div>
                        <div class="reservation-attendees">
                            {format!("👥 {}", reservation.attendees.join(", "))}
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}
