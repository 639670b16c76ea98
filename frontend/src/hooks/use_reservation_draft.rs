use chrono::NaiveDate;
use shared::{DraftAction, ReservationDraft, Room};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer state wrapping the shared draft model
#[derive(Clone, PartialEq)]
pub struct DraftState(pub ReservationDraft);

impl Reducible for DraftState {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut draft = self.0.clone();
        draft.apply(action);
        // Pointer-up changes only the drag state, so compare the whole draft
        if draft == self.0 {
            self
        } else {
            Rc::new(DraftState(draft))
        }
    }
}

/// Draft for `room` on `date`. Callers key the modal by date so a new date gets a fresh draft.
#[hook]
pub fn use_reservation_draft(room: Room, date: NaiveDate, today: NaiveDate) -> UseReducerHandle<DraftState> {
    use_reducer(move || DraftState(ReservationDraft::new(room, date, today)))
}
