//! Generation-counted gate for the artificial loading delay.
//!
//! Every restart issues a fresh [`LoadTicket`]; only the newest ticket may
//! end the loading state, so a timer that fires late for an older change
//! cannot reveal a stale result.

/// Identifies one scheduled delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct LoadingGate {
    generation: u64,
    loading: bool,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingGate {
    /// Starts in the loading state with ticket 0 pending.
    pub fn new() -> Self {
        Self {
            generation: 0,
            loading: true,
        }
    }

    /// Enter loading and invalidate every earlier ticket.
    pub fn restart(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Ticket of the delay currently pending, if any.
    pub fn pending(&self) -> Option<LoadTicket> {
        self.loading.then_some(LoadTicket(self.generation))
    }

    /// Leave loading if `ticket` is the newest one. Returns whether it did.
    pub fn finish(&mut self, ticket: LoadTicket) -> bool {
        if self.loading && ticket.0 == self.generation {
            self.loading = false;
            true
        } else {
            false
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading_with_initial_ticket() {
        let gate = LoadingGate::new();
        assert!(gate.is_loading());
        assert_eq!(gate.pending().map(|t| t.generation()), Some(0));
    }

    #[test]
    fn test_only_newest_ticket_finishes() {
        let mut gate = LoadingGate::new();
        let first = gate.restart();
        let second = gate.restart();

        assert!(!gate.finish(first));
        assert!(gate.is_loading());

        assert!(gate.finish(second));
        assert!(!gate.is_loading());
        assert_eq!(gate.pending(), None);
    }

    #[test]
    fn test_finish_twice_is_noop() {
        let mut gate = LoadingGate::new();
        let ticket = gate.restart();
        assert!(gate.finish(ticket));
        assert!(!gate.finish(ticket));
    }
}
