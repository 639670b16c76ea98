use serde::{Deserialize, Serialize};
use std::fmt;

pub mod calendar;
pub mod fetch_guard;
pub mod reservation_form;
pub mod slot_selection;
pub mod time_slot;

pub use calendar::{CalendarCell, WeekdayKind};
pub use fetch_guard::{FetchGeneration, FetchTicket};
pub use reservation_form::{
    DraftAction, FormField, FormValidationError, ReservationDraft, ReservationFormConfig, SubmissionState,
    SubmitOutcome,
};
pub use slot_selection::{Interaction, SlotAction, SlotSelection};
pub use time_slot::{TimeSlot, UnknownTimeSlot};

/// One of the two bookable meeting rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    #[serde(rename = "대회의실")]
    Large,
    #[serde(rename = "소회의실")]
    Small,
}

impl Room {
    pub const ALL: [Room; 2] = [Room::Large, Room::Small];

    /// Display name, also used as the `roomName` value on the wire
    pub fn name(self) -> &'static str {
        match self {
            Room::Large => "대회의실",
            Room::Small => "소회의실",
        }
    }

    /// The room offered by the switcher when this one is shown
    pub fn other(self) -> Room {
        match self {
            Room::Large => Room::Small,
            Room::Small => Room::Large,
        }
    }

    pub fn from_name(name: &str) -> Option<Room> {
        Room::ALL.into_iter().find(|room| room.name() == name)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A reservation as stored by the backend. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub room_name: String,
    pub topic: String,
    pub attendees: Vec<String>,
    /// Raw slot labels; labels outside the schedule are ignored when computing reserved slots
    pub selected_time: Vec<String>,
    /// Formatted as "yyyy년 MM월 d일"
    pub date: String,
}

impl Reservation {
    /// Slots of this reservation that belong to the fixed schedule
    pub fn time_slots(&self) -> impl Iterator<Item = TimeSlot> + '_ {
        self.selected_time
            .iter()
            .filter_map(|label| TimeSlot::from_label(label))
    }
}

/// All slots taken by any of the given reservations
pub fn reserved_slots(reservations: &[Reservation]) -> Vec<TimeSlot> {
    reservations.iter().flat_map(Reservation::time_slots).collect()
}

/// Body of `POST /create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub room_name: Room,
    pub topic: String,
    pub attendees: Vec<String>,
    /// Slots in schedule order
    pub selected_time: Vec<TimeSlot>,
    pub date: String,
}

/// Response after creating a reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReservationResponse {
    pub message: String,
    pub id: String,
}

/// Query of `GET /get`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationQuery {
    pub room_name: Room,
    /// Formatted as "yyyy년 MM월 d일"
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_names() {
        assert_eq!(Room::Large.name(), "대회의실");
        assert_eq!(Room::Small.name(), "소회의실");
        assert_eq!(Room::Large.other(), Room::Small);
        assert_eq!(Room::Small.other(), Room::Large);
        assert_eq!(Room::from_name("소회의실"), Some(Room::Small));
        assert_eq!(Room::from_name("회의실"), None);
    }

    #[test]
    fn test_reservation_from_backend_json() {
        let body = r#"[{
            "_id": "665f1c2e9b1e8a0012345678",
            "roomName": "대회의실",
            "topic": "주간 회의",
            "attendees": ["Alice", "Bob"],
            "selectedTime": ["10:00", "10:30", "25:00"],
            "date": "2024년 02월 9일"
        }]"#;

        let reservations: Vec<Reservation> = serde_json::from_str(body).unwrap();
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].id, "665f1c2e9b1e8a0012345678");
        assert_eq!(reservations[0].attendees, vec!["Alice", "Bob"]);

        // Unknown labels are skipped, not fatal
        let reserved = reserved_slots(&reservations);
        assert_eq!(
            reserved,
            vec![
                TimeSlot::from_label("10:00").unwrap(),
                TimeSlot::from_label("10:30").unwrap(),
            ]
        );
    }

    #[test]
    fn test_create_request_wire_format() {
        let request = CreateReservationRequest {
            room_name: Room::Small,
            topic: "스프린트 계획".to_string(),
            attendees: vec!["Alice".to_string(), "Bob".to_string()],
            selected_time: vec![
                TimeSlot::from_label("9:30").unwrap(),
                TimeSlot::from_label("10:00").unwrap(),
            ],
            date: "2024년 02월 9일".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "roomName": "소회의실",
                "topic": "스프린트 계획",
                "attendees": ["Alice", "Bob"],
                "selectedTime": ["9:30", "10:00"],
                "date": "2024년 02월 9일"
            })
        );
    }

    #[test]
    fn test_create_response() {
        let response: CreateReservationResponse =
            serde_json::from_str(r#"{"message": "Reservation created", "id": "abc"}"#).unwrap();
        assert_eq!(response.id, "abc");
    }
}
