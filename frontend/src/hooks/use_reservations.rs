use shared::{FetchGeneration, Reservation, ReservationQuery, Room};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct ReservationsState {
    pub reservations: Rc<Vec<Reservation>>,
    pub loading: bool,
}

/// Loads the reservations of `room` on `date` (formatted date key).
///
/// A failed fetch leaves the list empty. A response that arrives after the
/// room/date changed or the component unmounted is dropped.
#[hook]
pub fn use_reservations(api_client: &ApiClient, room: Room, date: String) -> ReservationsState {
    let reservations = use_state(|| Rc::new(Vec::<Reservation>::new()));
    let loading = use_state(|| true);
    let generation = use_memo((), |_| FetchGeneration::default());

    {
        let api_client = api_client.clone();
        let reservations = reservations.clone();
        let loading = loading.clone();

        use_effect_with((room, date), move |(room, date)| {
            let ticket = generation.begin();
            let query = ReservationQuery {
                room_name: *room,
                date: date.clone(),
            };

            loading.set(true);
            {
                let generation = generation.clone();
                spawn_local(async move {
                    let result = api_client.get_reservations(&query).await;
                    let Some(result) = generation.accept(ticket, result) else {
                        Logger::debug_with_component(
                            "reservations",
                            &format!("Dropped stale response for {} {}", query.room_name, query.date),
                        );
                        return;
                    };

                    match result {
                        Ok(data) => {
                            Logger::debug_with_component(
                                "reservations",
                                &format!("Loaded {} reservations for {} {}", data.len(), query.room_name, query.date),
                            );
                            reservations.set(Rc::new(data));
                        }
                        Err(e) => {
                            Logger::error_with_component("reservations", &format!("Fetch error: {}", e));
                            reservations.set(Rc::new(Vec::new()));
                        }
                    }
                    loading.set(false);
                });
            }

            move || generation.invalidate()
        });
    }

    ReservationsState {
        reservations: (*reservations).clone(),
        loading: *loading,
    }
}
