use std::sync::atomic::{AtomicU64, Ordering};

/// Single-slot "latest request wins" token.
#[derive(Debug, Default)]
pub struct RequestSlot {
    generation: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSlot {
    /// Supersedes every ticket handed out before.
    pub fn begin(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}
