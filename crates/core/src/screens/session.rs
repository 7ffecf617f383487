use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Cancellation token scoped to a screen's lifetime.
///
/// Fetches are not cancelable, so instead each one carries a
/// [`SessionTicket`] taken when it started. Tearing the screen down, or
/// activating it again, moves the epoch forward; a result whose ticket no
/// longer matches is dropped instead of being written into state.
#[derive(Debug, Default)]
pub struct ScreenSession {
    epoch: AtomicU64,
    active: AtomicBool,
}

/// Proof that an operation started during a particular activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTicket {
    epoch: u64,
}

impl ScreenSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new activation. Tickets from earlier activations go stale.
    pub fn begin(&self) -> SessionTicket {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.active.store(true, Ordering::SeqCst);
        SessionTicket { epoch }
    }

    /// Ticket for the running activation, or `None` if the screen isn't mounted.
    pub fn current(&self) -> Option<SessionTicket> {
        if self.is_active() {
            Some(SessionTicket {
                epoch: self.epoch.load(Ordering::SeqCst),
            })
        } else {
            None
        }
    }

    /// Tear down. Every outstanding ticket goes stale.
    pub fn end(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.active.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Whether a result produced under `ticket` may still be applied.
    pub fn is_current(&self, ticket: &SessionTicket) -> bool {
        self.is_active() && self.epoch.load(Ordering::SeqCst) == ticket.epoch
    }
}
