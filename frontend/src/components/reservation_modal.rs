use chrono::NaiveDate;
use shared::reservation_form::error_for;
use shared::{
    DraftAction, FormField, FormValidationError, ReservationFormConfig, Room, SlotAction, SubmissionState,
    SubmitOutcome, TimeSlot,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::components::reservation_list::ReservationList;
use crate::components::time_button::TimeButton;
use crate::hooks::{use_escape_key, use_reservation_draft, use_reservations, use_window_mouseup};
use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;
use crate::services::notification::{self, CREATE_REJECTED, CREATE_SUCCESS, NETWORK_FAILURE};

#[derive(Properties, PartialEq)]
pub struct ReservationModalProps {
    pub room: Room,
    pub date: NaiveDate,
    pub today: NaiveDate,
    pub api_client: ApiClient,
    pub on_close: Callback<()>,
}

#[function_component(ReservationModal)]
pub fn reservation_modal(props: &ReservationModalProps) -> Html {
    let draft = use_reservation_draft(props.room, props.date, props.today);
    let formatted_date = draft.0.formatted_date();
    let reservations = use_reservations(&props.api_client, props.room, formatted_date.clone());
    let submission = use_mut_ref(SubmissionState::default);
    let rerender = use_force_update();
    let locked = draft.0.is_locked();

    // Feed the fetched reservations into the selection
    {
        let draft = draft.dispatcher();
        use_effect_with(reservations.reservations.clone(), move |list| {
            draft.dispatch(DraftAction::Slot(SlotAction::SetReserved(shared::reserved_slots(list))));
            || ()
        });
    }

    let on_release = {
        let draft = draft.dispatcher();
        use_callback((), move |_: (), _| {
            draft.dispatch(DraftAction::Slot(SlotAction::PointerUp));
        })
    };
    use_window_mouseup(on_release);

    use_escape_key(props.on_close.clone());

    let errors: Vec<FormValidationError> = submission
        .borrow()
        .visible_errors(&draft.0, &ReservationFormConfig::default());
    let is_submitting = submission.borrow().is_in_flight();

    let on_topic_input = {
        let draft = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftAction::SetTopic(input.value()));
        })
    };

    let on_attendees_input = {
        let draft = draft.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftAction::SetAttendees(input.value()));
        })
    };

    let on_pointer_down = {
        let draft = draft.dispatcher();
        Callback::from(move |slot: TimeSlot| {
            draft.dispatch(DraftAction::Slot(SlotAction::PointerDown(slot)));
        })
    };

    let on_pointer_enter = {
        let draft = draft.dispatcher();
        Callback::from(move |slot: TimeSlot| {
            draft.dispatch(DraftAction::Slot(SlotAction::PointerEnter(slot)));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submission = submission.clone();
        let rerender = rerender.clone();
        let api_client = props.api_client.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let outcome = submission
                .borrow_mut()
                .submit(&draft.0, &ReservationFormConfig::default());
            rerender.force_update();

            let request = match outcome {
                SubmitOutcome::Send(request) => request,
                SubmitOutcome::Invalid(errors) => {
                    Logger::debug_with_component(
                        "reservation-modal",
                        &format!("Validation failed with {} errors", errors.len()),
                    );
                    return;
                }
                SubmitOutcome::Busy => {
                    Logger::debug_with_component("reservation-modal", "Create already in flight");
                    return;
                }
            };

            let api_client = api_client.clone();
            let submission = submission.clone();
            let rerender = rerender.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                match api_client.create_reservation(&request).await {
                    Ok(response) => {
                        Logger::info_with_component(
                            "reservation-modal",
                            &format!("Created reservation {}", response.id),
                        );
                        notification::notify(CREATE_SUCCESS);
                        on_close.emit(());
                    }
                    // Any 2xx counts as success, whatever the body
                    Err(ApiError::Decode(e)) => {
                        Logger::warn_with_component(
                            "reservation-modal",
                            &format!("Created reservation, unreadable response: {}", e),
                        );
                        notification::notify(CREATE_SUCCESS);
                        on_close.emit(());
                    }
                    Err(ApiError::Server { status, body }) => {
                        Logger::error_with_component(
                            "reservation-modal",
                            &format!("Create rejected ({}): {}", status, body),
                        );
                        notification::notify(CREATE_REJECTED);
                        submission.borrow_mut().finish();
                        rerender.force_update();
                    }
                    Err(e) => {
                        Logger::error_with_component("reservation-modal", &format!("Create failed: {}", e));
                        notification::notify(NETWORK_FAILURE);
                        submission.borrow_mut().finish();
                        rerender.force_update();
                    }
                }
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let field_error = |field: FormField| -> Html {
        match error_for(&errors, field) {
            Some(error) => html! { <p class="field-error">{error.to_string()}</p> },
            None => html! {},
        }
    };

    let selection = &draft.0.selection;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="reservation-modal" onclick={on_modal_click}>
                <button type="button" class="modal-close" onclick={on_close_click} title="닫기">
                    {"✕"}
                </button>

                <div class="reservation-modal-body">
                    <div class="reservation-status">
                        <div>
                            <div class="reservation-date">{&formatted_date}</div>
                            <div class="reservation-status-title">
                                {format!("📅 {} 예약 현황", props.room)}
                            </div>
                        </div>
                        {if reservations.loading {
                            html! { <div class="reservation-list-loading">{"불러오는 중..."}</div> }
                        } else {
                            html! { <ReservationList reservations={reservations.reservations.clone()} /> }
                        }}
                    </div>

                    <form class="reservation-form" onsubmit={on_submit}>
                        <div class="form-actions">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled={locked || is_submitting}
                            >
                                {"예약하기"}
                            </button>
                        </div>

                        <div class="form-field">
                            <label>{"회의명"}</label>
                            <input
                                type="text"
                                value={draft.0.topic.clone()}
                                disabled={locked}
                                oninput={on_topic_input}
                            />
                            {field_error(FormField::Topic)}
                        </div>

                        <div class="form-field">
                            <label>{"참석자"}</label>
                            <input
                                type="text"
                                placeholder="쉼표(,)로 구분하여 입력하세요."
                                value={draft.0.attendees.clone()}
                                disabled={locked}
                                oninput={on_attendees_input}
                            />
                            {field_error(FormField::Attendees)}
                        </div>

                        <div class="form-field">
                            <div class="time-slot-header">
                                <div>{"시간을 선택하세요."}</div>
                                <div class="time-slot-legend">
                                    <span class="legend-swatch unavailable"></span>
                                    <span>{"예약 불가"}</span>
                                </div>
                            </div>
                            <div class="time-slot-grid">
                                {for TimeSlot::all().map(|slot| html! {
                                    <TimeButton
                                        key={slot.label()}
                                        {slot}
                                        selected={selection.is_selected(slot)}
                                        interactive={selection.is_interactive(slot)}
                                        on_pointer_down={on_pointer_down.clone()}
                                        on_pointer_enter={on_pointer_enter.clone()}
                                    />
                                })}
                            </div>
                            {field_error(FormField::SelectedTime)}
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
