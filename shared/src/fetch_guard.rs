//! Drops responses to requests that were superseded before they returned.
//!
//! Each request takes a ticket when it starts. Starting a newer request or
//! invalidating the guard (the owner went away) makes older tickets stale,
//! and results carried by a stale ticket are discarded.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct FetchGeneration {
    current: Cell<u64>,
}

impl FetchGeneration {
    /// Start a request; every earlier ticket becomes stale
    pub fn begin(&self) -> FetchTicket {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        FetchTicket(next)
    }

    /// Make every outstanding ticket stale
    pub fn invalidate(&self) {
        self.current.set(self.current.get().wrapping_add(1));
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.current.get() == ticket.0
    }

    /// `Some(value)` only when `ticket` is still the latest request
    pub fn accept<T>(&self, ticket: FetchTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_request_is_accepted() {
        let generation = FetchGeneration::default();
        let ticket = generation.begin();

        assert!(generation.is_current(ticket));
        assert_eq!(generation.accept(ticket, vec![1, 2]), Some(vec![1, 2]));
    }

    #[test]
    fn test_response_after_key_change_is_dropped() {
        let generation = FetchGeneration::default();

        // Teardown of the first effect, then the effect for the new date
        let first = generation.begin();
        generation.invalidate();
        let second = generation.begin();

        // The first response lands after the second request started
        assert_eq!(generation.accept(first, "2024년 02월 9일"), None);
        assert_eq!(generation.accept(second, "2024년 02월 10일"), Some("2024년 02월 10일"));
    }

    #[test]
    fn test_out_of_order_responses_keep_latest() {
        let generation = FetchGeneration::default();
        let first = generation.begin();
        let second = generation.begin();

        assert_eq!(generation.accept(second, "second"), Some("second"));
        assert_eq!(generation.accept(first, "first"), None);
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let generation = FetchGeneration::default();
        let ticket = generation.begin();

        generation.invalidate();

        assert!(!generation.is_current(ticket));
        assert_eq!(generation.accept(ticket, ()), None);
    }
}
