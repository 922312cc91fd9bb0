//! Request controller shared by the sales report pages
//!
//! `Idle -> Submitting -> {Populated | Empty | Errored}`, and back to `Idle`
//! on cancel. Outcomes are applied only for the latest issued request.

use crate::shared::request_seq::{RequestSequence, RequestTicket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Populated,
    Empty,
    Errored,
}

#[derive(Debug, Clone)]
pub struct ReportState<T> {
    /// Filter key entered by the user
    pub key: String,
    pub rows: Vec<T>,
    pub error_message: String,
    pub phase: Phase,
    failure_text: &'static str,
    empty_text: &'static str,
    seq: RequestSequence,
}

impl<T> ReportState<T> {
    /// `failure_text` is shown for any failed request, `empty_text` whenever
    /// there is nothing to list
    pub fn new(failure_text: &'static str, empty_text: &'static str) -> Self {
        Self {
            key: String::new(),
            rows: Vec::new(),
            error_message: String::new(),
            phase: Phase::Idle,
            failure_text,
            empty_text,
            seq: RequestSequence::new(),
        }
    }

    /// Non-blank key; the key itself is sent untrimmed
    pub fn is_valid(&self) -> bool {
        !self.key.trim().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Text shown instead of the table whenever there are no rows
    pub fn placeholder(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(self.empty_text)
    }

    /// Start a request for the current key
    ///
    /// Returns the ticket and the key captured at submission time, or `None`
    /// when the key is empty (nothing is issued then).
    pub fn submit(&mut self) -> Option<(RequestTicket, String)> {
        if !self.is_valid() {
            return None;
        }
        let ticket = self.seq.issue();
        self.phase = Phase::Submitting;
        Some((ticket, self.key.clone()))
    }

    /// Apply the outcome of `ticket`; stale outcomes are ignored
    ///
    /// Returns whether the outcome was applied.
    pub fn apply(&mut self, ticket: RequestTicket, outcome: Result<Vec<T>, String>) -> bool {
        if !self.seq.complete(ticket) {
            return false;
        }
        match outcome {
            Ok(rows) if rows.is_empty() => {
                self.rows = Vec::new();
                self.error_message.clear();
                self.phase = Phase::Empty;
            }
            Ok(rows) => {
                self.rows = rows;
                self.error_message.clear();
                self.phase = Phase::Populated;
            }
            Err(e) => {
                log::error!("{}: {}", self.failure_text, e);
                self.rows = Vec::new();
                self.error_message = self.failure_text.to_string();
                self.phase = Phase::Errored;
            }
        }
        true
    }

    /// Reset to `Idle`; any in-flight request is discarded when it lands
    pub fn cancel(&mut self) {
        self.key.clear();
        self.rows = Vec::new();
        self.error_message.clear();
        self.phase = Phase::Idle;
        self.seq.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAILURE: &str = "Request failed. Please try again later.";
    const EMPTY: &str = "Nothing to show.";

    fn state(key: &str) -> ReportState<u32> {
        let mut s = ReportState::new(FAILURE, EMPTY);
        s.key = key.to_string();
        s
    }

    #[test]
    fn test_empty_key_issues_nothing() {
        let mut s = state("");
        assert!(!s.is_valid());
        assert!(s.submit().is_none());
        assert_eq!(s.phase, Phase::Idle);
    }

    #[test]
    fn test_blank_key_issues_nothing() {
        let mut s = state("   ");
        assert!(!s.is_valid());
        assert!(s.submit().is_none());
        assert_eq!(s.phase, Phase::Idle);
    }

    #[test]
    fn test_key_is_sent_untrimmed() {
        let mut s = state(" Lambda LLC ");
        let (_, key) = s.submit().unwrap();
        assert_eq!(key, " Lambda LLC ");
    }

    #[test]
    fn test_placeholder_follows_rows() {
        let mut s = state("k");
        assert_eq!(s.placeholder(), Some(EMPTY));

        let (ticket, _) = s.submit().unwrap();
        s.apply(ticket, Ok(vec![1]));
        assert_eq!(s.placeholder(), None);

        let (ticket, _) = s.submit().unwrap();
        s.apply(ticket, Err("boom".to_string()));
        assert_eq!(s.placeholder(), Some(EMPTY));
    }

    #[test]
    fn test_outcomes() {
        let mut s = state("k");
        let (ticket, key) = s.submit().unwrap();
        assert_eq!(key, "k");
        assert!(s.is_loading());
        assert!(s.apply(ticket, Ok(vec![1, 2])));
        assert_eq!(s.phase, Phase::Populated);
        assert_eq!(s.rows, vec![1, 2]);

        let (ticket, _) = s.submit().unwrap();
        assert!(s.apply(ticket, Ok(vec![])));
        assert_eq!(s.phase, Phase::Empty);
        assert!(s.rows.is_empty());

        let (ticket, _) = s.submit().unwrap();
        assert!(s.apply(ticket, Err("boom".to_string())));
        assert_eq!(s.phase, Phase::Errored);
        assert_eq!(s.error_message, FAILURE);

        // Success clears a previous error
        let (ticket, _) = s.submit().unwrap();
        s.apply(ticket, Ok(vec![3]));
        assert!(s.error_message.is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut s = state("first");
        let (first, _) = s.submit().unwrap();
        s.key = "second".to_string();
        let (second, _) = s.submit().unwrap();

        assert!(s.apply(second, Ok(vec![2])));
        assert!(!s.apply(first, Ok(vec![1])));
        assert_eq!(s.rows, vec![2]);
    }

    #[test]
    fn test_cancel_discards_in_flight() {
        let mut s = state("k");
        let (ticket, _) = s.submit().unwrap();
        s.cancel();
        assert!(!s.apply(ticket, Ok(vec![1])));
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.rows.is_empty());
        assert!(s.key.is_empty());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut s = state("k");
        s.cancel();
        s.cancel();
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.error_message.is_empty());
        assert!(!s.is_valid());
    }

    #[test]
    fn test_cancel_from_errored_and_populated() {
        let mut s = state("k");
        let (ticket, _) = s.submit().unwrap();
        s.apply(ticket, Err("boom".to_string()));
        assert_eq!(s.phase, Phase::Errored);
        s.cancel();
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.error_message, "");
        assert!(s.rows.is_empty());
        assert!(s.key.is_empty());

        s.key = "k".to_string();
        let (ticket, _) = s.submit().unwrap();
        s.apply(ticket, Ok(vec![1, 2]));
        assert_eq!(s.phase, Phase::Populated);
        s.cancel();
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.error_message, "");
        assert!(s.rows.is_empty());
        assert!(s.key.is_empty());
    }
}
