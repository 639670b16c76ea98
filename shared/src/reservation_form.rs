//! Reservation draft held by the modal, and its validation.

use crate::calendar::{format_reservation_date, is_before_today};
use crate::slot_selection::{SlotAction, SlotSelection};
use crate::{CreateReservationRequest, Room};
use chrono::NaiveDate;
use thiserror::Error;

/// Limits applied when validating a draft
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationFormConfig {
    pub min_topic_len: usize,
    /// Applies to the raw comma-separated text, before splitting
    pub min_attendees_len: usize,
}

impl Default for ReservationFormConfig {
    fn default() -> Self {
        Self {
            min_topic_len: 2,
            min_attendees_len: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    Attendees,
    SelectedTime,
}

/// Field-level validation failure. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormValidationError {
    #[error("주제를 입력하세요.")]
    TopicTooShort,
    #[error("참석자를 입력하세요.")]
    AttendeesTooShort,
    #[error("시간을 선택해주세요")]
    NoTimeSelected,
    #[error("지난 날짜는 예약할 수 없습니다.")]
    DateLocked,
}

impl FormValidationError {
    /// Field the message is shown under; `None` for form-wide errors
    pub fn field(&self) -> Option<FormField> {
        match self {
            FormValidationError::TopicTooShort => Some(FormField::Topic),
            FormValidationError::AttendeesTooShort => Some(FormField::Attendees),
            FormValidationError::NoTimeSelected => Some(FormField::SelectedTime),
            FormValidationError::DateLocked => None,
        }
    }
}

/// First error reported for `field`, if any
pub fn error_for(errors: &[FormValidationError], field: FormField) -> Option<&FormValidationError> {
    errors.iter().find(|error| error.field() == Some(field))
}

/// Split comma-separated attendees, trimming and dropping blanks.
pub fn parse_attendees(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Edits the modal applies to its draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    SetTopic(String),
    SetAttendees(String),
    Slot(SlotAction),
}

/// The unsaved reservation for the open modal
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    pub room: Room,
    pub date: NaiveDate,
    pub topic: String,
    /// Raw input, split on submit
    pub attendees: String,
    pub selection: SlotSelection,
}

impl ReservationDraft {
    /// Fresh draft; locked when `date` is before `today`.
    pub fn new(room: Room, date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            room,
            date,
            topic: String::new(),
            attendees: String::new(),
            selection: SlotSelection::new(is_before_today(date, today)),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.selection.is_locked()
    }

    pub fn formatted_date(&self) -> String {
        format_reservation_date(self.date)
    }

    /// Returns whether anything changed.
    pub fn apply(&mut self, action: DraftAction) -> bool {
        if self.is_locked() {
            if let DraftAction::Slot(slot_action) = action {
                return self.selection.apply(slot_action);
            }
            return false;
        }

        match action {
            DraftAction::SetTopic(topic) => replace_if_changed(&mut self.topic, topic),
            DraftAction::SetAttendees(attendees) => replace_if_changed(&mut self.attendees, attendees),
            DraftAction::Slot(slot_action) => self.selection.apply(slot_action),
        }
    }

    /// Check every field and build the create request.
    ///
    /// All failures are reported together so each field can show its own message.
    pub fn validate(
        &self,
        config: &ReservationFormConfig,
    ) -> Result<CreateReservationRequest, Vec<FormValidationError>> {
        let mut errors = Vec::new();

        if self.is_locked() {
            errors.push(FormValidationError::DateLocked);
        }
        // Lengths are UTF-16 code units, as measured by the browser input
        if utf16_len(&self.topic) < config.min_topic_len {
            errors.push(FormValidationError::TopicTooShort);
        }
        if utf16_len(&self.attendees) < config.min_attendees_len {
            errors.push(FormValidationError::AttendeesTooShort);
        }
        if self.selection.is_empty() {
            errors.push(FormValidationError::NoTimeSelected);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateReservationRequest {
            room_name: self.room,
            topic: self.topic.clone(),
            attendees: parse_attendees(&self.attendees),
            selected_time: self.selection.selected_slots(),
            date: self.formatted_date(),
        })
    }
}

/// Result of pressing the submit button
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Send this request; the form stays busy until `finish`
    Send(CreateReservationRequest),
    Invalid(Vec<FormValidationError>),
    /// A create request is already in flight
    Busy,
}

/// Submit bookkeeping for the modal: whether the user has tried to submit,
/// and whether a create request is outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    attempted: bool,
    in_flight: bool,
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_attempted(&self) -> bool {
        self.attempted
    }

    pub fn submit(&mut self, draft: &ReservationDraft, config: &ReservationFormConfig) -> SubmitOutcome {
        self.attempted = true;
        if self.in_flight {
            return SubmitOutcome::Busy;
        }
        match draft.validate(config) {
            Ok(request) => {
                self.in_flight = true;
                SubmitOutcome::Send(request)
            }
            Err(errors) => SubmitOutcome::Invalid(errors),
        }
    }

    /// The outstanding request completed and the form may submit again
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Field errors to display. Empty until the first submit attempt,
    /// then tracks the draft as it is edited.
    pub fn visible_errors(
        &self,
        draft: &ReservationDraft,
        config: &ReservationFormConfig,
    ) -> Vec<FormValidationError> {
        if !self.attempted {
            return Vec::new();
        }
        draft.validate(config).err().unwrap_or_default()
    }
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn replace_if_changed(target: &mut String, value: String) -> bool {
    if *target == value {
        return false;
    }
    *target = value;
    true
}
