//! The fixed half-hour booking schedule.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Slot labels in schedule order, 09:00 to 17:30
pub const TIME_SLOT_LABELS: [&str; 18] = [
    "9:00", "9:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00",
    "13:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time slot: {0}")]
pub struct UnknownTimeSlot(pub String);

/// A half-hour slot, identified by its position in the schedule.
///
/// Ordering follows the schedule, so "9:30" sorts before "10:00".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const COUNT: usize = TIME_SLOT_LABELS.len();

    /// Every slot of the day, in order
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..Self::COUNT as u8).map(TimeSlot)
    }

    pub fn from_index(index: usize) -> Option<TimeSlot> {
        (index < Self::COUNT).then(|| TimeSlot(index as u8))
    }

    pub fn from_label(label: &str) -> Option<TimeSlot> {
        let label = label.trim();
        TIME_SLOT_LABELS
            .iter()
            .position(|candidate| *candidate == label)
            .and_then(Self::from_index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn label(self) -> &'static str {
        TIME_SLOT_LABELS[self.index()]
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label().to_string()
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = UnknownTimeSlot;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        TimeSlot::from_label(&label).ok_or(UnknownTimeSlot(label))
    }
}
