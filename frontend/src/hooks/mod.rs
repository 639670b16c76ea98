pub mod use_calendar;
pub mod use_global_listener;
pub mod use_reservation_draft;
pub mod use_reservations;

pub use use_calendar::use_calendar;
pub use use_global_listener::{use_escape_key, use_window_mouseup};
pub use use_reservation_draft::use_reservation_draft;
pub use use_reservations::use_reservations;
