//! Status text state.
//!
//! The renderer is told what to do, not what the match is: the session
//! feeds the current snap description every tick and only acts on
//! [`StatusUpdate::Show`] and [`StatusUpdate::Clear`], so the status
//! surface is touched only when the text actually changes.

use std::time::{Duration, Instant};

/// Default time a status message stays up.
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_millis(1500);

/// What the status surface should do this tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    Show(String),
    Clear,
    Unchanged,
}

#[derive(Debug)]
pub struct StatusText {
    timeout: Duration,
    /// Last description fed in, shown or not.
    last: Option<String>,
    /// When the visible message went up; `None` when nothing is shown.
    shown_at: Option<Instant>,
}

impl StatusText {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last: None,
            shown_at: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    /// Feeds this tick's description.
    ///
    /// A changed description is shown; a description that goes away is
    /// cleared; an unchanged one is cleared once it has been up for the
    /// timeout.
    pub fn update(&mut self, description: Option<&str>, now: Instant) -> StatusUpdate {
        if description != self.last.as_deref() {
            self.last = description.map(str::to_owned);
            return match description {
                Some(text) => self.show(text, now),
                None => self.hide(),
            };
        }
        self.expire(now)
    }

    /// Shows a one-off message that expires on the normal timeout.
    pub fn flash(&mut self, text: &str, now: Instant) -> StatusUpdate {
        self.show(text, now)
    }

    fn show(&mut self, text: &str, now: Instant) -> StatusUpdate {
        self.shown_at = Some(now);
        StatusUpdate::Show(text.to_owned())
    }

    fn hide(&mut self) -> StatusUpdate {
        match self.shown_at.take() {
            Some(_) => StatusUpdate::Clear,
            None => StatusUpdate::Unchanged,
        }
    }

    fn expire(&mut self, now: Instant) -> StatusUpdate {
        match self.shown_at {
            Some(at) if now.duration_since(at) >= self.timeout => self.hide(),
            _ => StatusUpdate::Unchanged,
        }
    }
}
