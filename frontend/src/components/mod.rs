pub mod calendar;
pub mod reservation_list;
pub mod reservation_modal;
pub mod room_selection_card;
pub mod time_button;

pub use calendar::Calendar;
pub use room_selection_card::RoomSelectionCard;
