//! Process-wide single-session slot.
//!
//! Three chord kinds can each try to start a session; at most one may be
//! live. The slot holds the active session's identity, so "empty" and
//! "active" are states of an `Option` rather than a loose flag. Claiming
//! is try-only: a second claimant is turned away, never queued.

use parking_lot::Mutex;

use crate::input::ChordKind;

/// Identity of the live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSession {
    pub kind: ChordKind,
    pub window: usize,
}

/// A slot for at most one active session.
#[derive(Debug, Default)]
pub struct SessionSlot {
    active: Mutex<Option<ActiveSession>>,
}

/// The slot shared by every chord in the process.
pub static ACTIVE_SESSION: SessionSlot = SessionSlot::new();

impl SessionSlot {
    pub const fn new() -> Self {
        Self {
            active: Mutex::new(None),
        }
    }

    /// Claims the slot, or returns `None` if a session is already live.
    pub fn try_begin(&self, session: ActiveSession) -> Option<SlotGuard<'_>> {
        let mut active = self.active.lock();
        if active.is_some() {
            return None;
        }
        *active = Some(session);
        Some(SlotGuard { slot: self })
    }

    /// The live session, if any.
    pub fn current(&self) -> Option<ActiveSession> {
        *self.active.lock()
    }

    pub fn is_busy(&self) -> bool {
        self.active.lock().is_some()
    }
}

/// Proof of ownership of a [`SessionSlot`]. Dropping it empties the slot,
/// including during unwinding.
#[derive(Debug)]
pub struct SlotGuard<'a> {
    slot: &'a SessionSlot,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        *self.slot.active.lock() = None;
    }
}
