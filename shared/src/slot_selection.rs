//! Drag-to-select state for the time slot grid.
//!
//! Pressing a slot starts a drag and toggles it; sweeping the pointer
//! over further slots toggles each one it enters; releasing the pointer
//! anywhere ends the drag. Reserved slots and locked dates never toggle.

use crate::time_slot::TimeSlot;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging,
}

/// Pointer input, as delivered by the slot buttons and the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotAction {
    PointerDown(TimeSlot),
    PointerEnter(TimeSlot),
    PointerUp,
    /// Replace the set of slots taken by existing reservations
    SetReserved(Vec<TimeSlot>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotSelection {
    selected: BTreeSet<TimeSlot>,
    reserved: BTreeSet<TimeSlot>,
    locked: bool,
    interaction: Interaction,
}

impl SlotSelection {
    pub fn new(locked: bool) -> Self {
        Self {
            locked,
            ..Self::default()
        }
    }

    /// Replace the reserved set. Selected slots that became reserved are dropped.
    pub fn set_reserved(&mut self, reserved: impl IntoIterator<Item = TimeSlot>) {
        self.reserved = reserved.into_iter().collect();
        let reserved = &self.reserved;
        self.selected.retain(|slot| !reserved.contains(slot));
    }

    /// Returns whether the selection changed.
    pub fn apply(&mut self, action: SlotAction) -> bool {
        match action {
            SlotAction::PointerDown(slot) => self.pointer_down(slot),
            SlotAction::PointerEnter(slot) => self.pointer_enter(slot),
            SlotAction::PointerUp => {
                self.pointer_up();
                false
            }
            SlotAction::SetReserved(reserved) => {
                let before = self.selected.len();
                self.set_reserved(reserved);
                before != self.selected.len()
            }
        }
    }

    pub fn pointer_down(&mut self, slot: TimeSlot) -> bool {
        if !self.is_interactive(slot) {
            return false;
        }
        self.interaction = Interaction::Dragging;
        self.toggle(slot);
        true
    }

    pub fn pointer_enter(&mut self, slot: TimeSlot) -> bool {
        if self.interaction != Interaction::Dragging || !self.is_interactive(slot) {
            return false;
        }
        self.toggle(slot);
        true
    }

    pub fn pointer_up(&mut self) {
        self.interaction = Interaction::Idle;
    }

    fn toggle(&mut self, slot: TimeSlot) {
        if !self.selected.remove(&slot) {
            self.selected.insert(slot);
        }
    }

    pub fn is_interactive(&self, slot: TimeSlot) -> bool {
        !self.locked && !self.reserved.contains(&slot)
    }

    pub fn is_selected(&self, slot: TimeSlot) -> bool {
        self.selected.contains(&slot)
    }

    pub fn is_reserved(&self, slot: TimeSlot) -> bool {
        self.reserved.contains(&slot)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn selected(&self) -> &BTreeSet<TimeSlot> {
        &self.selected
    }

    /// Selected slots in schedule order
    pub fn selected_slots(&self) -> Vec<TimeSlot> {
        self.selected.iter().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(label: &str) -> TimeSlot {
        TimeSlot::from_label(label).unwrap()
    }

    fn with_reserved(reserved: impl IntoIterator<Item = TimeSlot>) -> SlotSelection {
        let mut selection = SlotSelection::new(false);
        selection.set_reserved(reserved);
        selection
    }

    fn labels(selection: &SlotSelection) -> Vec<&'static str> {
        selection.selected().iter().map(|s| s.label()).collect()
    }

    #[test]
    fn test_pointer_down_toggles_and_starts_drag() {
        let mut selection = SlotSelection::new(false);

        assert!(selection.pointer_down(slot("9:00")));
        assert_eq!(selection.interaction(), Interaction::Dragging);
        assert_eq!(labels(&selection), vec!["9:00"]);

        selection.pointer_up();
        assert_eq!(selection.interaction(), Interaction::Idle);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut selection = SlotSelection::new(false);
        selection.pointer_down(slot("11:00"));
        selection.pointer_up();
        let before = selection.clone();

        selection.pointer_down(slot("14:30"));
        selection.pointer_up();
        selection.pointer_down(slot("14:30"));
        selection.pointer_up();

        assert_eq!(selection, before);
    }

    #[test]
    fn test_deselect_after_selecting_two() {
        let mut selection = SlotSelection::new(false);
        for label in ["9:00", "9:30", "9:00"] {
            selection.pointer_down(slot(label));
            selection.pointer_up();
        }
        assert_eq!(labels(&selection), vec!["9:30"]);
    }

    #[test]
    fn test_drag_sweep_selects_entered_slots() {
        let mut selection = SlotSelection::new(false);

        selection.pointer_down(slot("10:00"));
        selection.pointer_enter(slot("10:30"));
        selection.pointer_enter(slot("11:00"));
        selection.pointer_up();

        assert_eq!(labels(&selection), vec!["10:00", "10:30", "11:00"]);
    }

    #[test]
    fn test_sweep_toggles_already_selected_slots_off() {
        let mut selection = SlotSelection::new(false);
        selection.pointer_down(slot("10:30"));
        selection.pointer_up();

        selection.pointer_down(slot("10:00"));
        selection.pointer_enter(slot("10:30"));
        selection.pointer_up();

        assert_eq!(labels(&selection), vec!["10:00"]);
    }

    #[test]
    fn test_enter_without_drag_is_ignored() {
        let mut selection = SlotSelection::new(false);
        assert!(!selection.pointer_enter(slot("13:00")));

        selection.pointer_down(slot("12:00"));
        selection.pointer_up();
        assert!(!selection.pointer_enter(slot("13:00")));

        assert_eq!(labels(&selection), vec!["12:00"]);
    }

    #[test]
    fn test_selected_is_in_schedule_order() {
        let mut selection = SlotSelection::new(false);
        for label in ["17:00", "9:30", "10:00"] {
            selection.pointer_down(slot(label));
            selection.pointer_up();
        }
        assert_eq!(
            selection.selected_slots(),
            vec![slot("9:30"), slot("10:00"), slot("17:00")]
        );
    }

    #[test]
    fn test_reserved_slot_never_selectable() {
        let reserved = slot("15:00");
        let mut selection = with_reserved([reserved]);

        assert!(!selection.pointer_down(reserved));
        assert_eq!(selection.interaction(), Interaction::Idle);

        selection.pointer_down(slot("14:30"));
        assert!(!selection.pointer_enter(reserved));
        assert_eq!(selection.interaction(), Interaction::Dragging);
        selection.pointer_enter(slot("15:30"));
        selection.pointer_enter(reserved);
        selection.pointer_up();
        selection.pointer_down(reserved);
        selection.pointer_up();

        assert!(!selection.is_selected(reserved));
        assert_eq!(labels(&selection), vec!["14:30", "15:30"]);
    }

    #[test]
    fn test_release_over_reserved_slot_ends_drag() {
        let reserved = slot("11:30");
        let mut selection = with_reserved([reserved]);

        selection.apply(SlotAction::PointerDown(slot("11:00")));
        selection.apply(SlotAction::PointerEnter(reserved));
        selection.apply(SlotAction::PointerUp);

        assert_eq!(selection.interaction(), Interaction::Idle);
        assert!(!selection.apply(SlotAction::PointerEnter(slot("12:00"))));
        assert_eq!(labels(&selection), vec!["11:00"]);
    }

    #[test]
    fn test_every_pointer_sequence_keeps_reserved_out() {
        let reserved = [slot("9:00"), slot("12:30")];
        let all: Vec<TimeSlot> = TimeSlot::all().collect();

        // Exhaust short action sequences over a few slots
        let candidates = [all[0], all[1], all[7], all[8]];
        let mut actions = Vec::new();
        for s in candidates {
            actions.push(SlotAction::PointerDown(s));
            actions.push(SlotAction::PointerEnter(s));
        }
        actions.push(SlotAction::PointerUp);

        for a in &actions {
            for b in &actions {
                for c in &actions {
                    let mut selection = with_reserved(reserved);
                    for action in [a, b, c] {
                        selection.apply(action.clone());
                    }
                    assert!(reserved.iter().all(|r| !selection.is_selected(*r)));
                }
            }
        }
    }

    #[test]
    fn test_locked_selection_ignores_pointer() {
        let mut selection = SlotSelection::new(true);

        assert!(!selection.pointer_down(slot("9:00")));
        assert!(!selection.pointer_enter(slot("9:30")));
        selection.pointer_up();

        assert!(selection.is_empty());
        assert!(!selection.is_interactive(slot("9:00")));
    }

    #[test]
    fn test_reserved_update_drops_conflicting_selection() {
        let mut selection = SlotSelection::new(false);
        selection.pointer_down(slot("16:00"));
        selection.pointer_enter(slot("16:30"));
        selection.pointer_up();

        let changed = selection.apply(SlotAction::SetReserved(vec![slot("16:30")]));

        assert!(changed);
        assert_eq!(labels(&selection), vec!["16:00"]);
        assert!(selection.is_reserved(slot("16:30")));
    }
}
