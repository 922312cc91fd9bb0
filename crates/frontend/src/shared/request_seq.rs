//! Monotonic request tagging
//!
//! Every issued request gets a ticket. Only the ticket of the latest issued,
//! not yet invalidated request is current; outcomes of any other ticket are
//! dropped by the caller.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    issued: u64,
    current: Option<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket; every earlier ticket stops being current
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        self.current = Some(self.issued);
        RequestTicket(self.issued)
    }

    /// No outstanding ticket stays current
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current == Some(ticket.0)
    }

    /// Consume `ticket` if it is current. A ticket completes at most once.
    pub fn complete(&mut self, ticket: RequestTicket) -> bool {
        if self.is_current(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
