/// Identifies one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter. Only the response for the most recently issued ticket
/// may be applied; anything older arrived out of order and is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn begin(&mut self) -> Ticket {
        self.current = self.current.wrapping_add(1);
        Ticket(self.current)
    }

    pub fn accepts(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_accepted() {
        let mut guard = RequestGeneration::default();
        let first = guard.begin();
        assert!(guard.accepts(first));
        let second = guard.begin();
        assert!(!guard.accepts(first));
        assert!(guard.accepts(second));
    }
}
