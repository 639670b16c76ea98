use shared::Room;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoomSelectionCardProps {
    pub room: Room,
    pub on_select: Callback<Room>,
}

#[function_component(RoomSelectionCard)]
pub fn room_selection_card(props: &RoomSelectionCardProps) -> Html {
    let onclick = {
        let room = props.room;
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(room))
    };

    let class = match props.room {
        Room::Large => "room-card room-card-large",
        Room::Small => "room-card room-card-small",
    };

    html! {
        <button type="button" {class} {onclick}>
            {props.room.name()}
        </button>
    }
}
