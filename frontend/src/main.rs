use shared::Room;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{Calendar, RoomSelectionCard};
use services::api::ApiClient;
use services::config::AppConfig;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = {
        let config = props.config.clone();
        use_memo((), move |_| ApiClient::from_config(&config))
    };
    let room = use_state(|| Option::<Room>::None);

    let on_room_select = {
        let room = room.clone();
        Callback::from(move |selected: Room| {
            Logger::debug_with_component("app", &format!("Room selected: {}", selected));
            room.set(Some(selected));
        })
    };

    match *room {
        Some(current) => html! {
            // Keyed so switching rooms starts a fresh calendar on the current month
            <Calendar
                key={current.name()}
                room={current}
                api_client={(*api_client).clone()}
                on_room_change={on_room_select}
            />
        },
        None => html! {
            <div class="room-selection">
                <h1 class="room-selection-title">{"예약하실 회의실을 선택해주세요."}</h1>
                <div class="room-selection-cards">
                    {for Room::ALL.into_iter().map(|room| html! {
                        <RoomSelectionCard key={room.name()} {room} on_select={on_room_select.clone()} />
                    })}
                </div>
            </div>
        },
    }
}

fn main() {
    let config = AppConfig::from_build_env();
    Logger::set_debug_enabled(config.enable_debug_logging);
    Logger::info_with_component("app", &format!("Reservation API at {}", config.api_url));

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
