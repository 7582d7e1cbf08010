//! Seams between the engine and the OS.
//!
//! The session controller only talks to these traits. `dragsnap-windows`
//! implements them over Win32; tests implement them in memory.

use crate::color::Rgb;
use crate::error::Result;
use crate::input::Input;
use crate::monitor::Monitor;
use crate::popup::PopupLayout;
use crate::window::Window;
use crate::{Point, Rect};

/// Window and monitor queries.
pub trait Desktop {
    type Window: Window;

    /// The top-level window under `point`, if any.
    fn window_at(&self, point: Point) -> Option<Self::Window>;

    /// All top-level windows, front to back.
    fn windows(&self) -> Vec<Self::Window>;

    /// Current monitor topology. Never cached by the caller.
    fn monitors(&self) -> Result<Vec<Monitor>>;
}

/// A topmost, input-transparent surface mirroring a candidate rect.
///
/// Destroyed when dropped.
pub trait Preview {
    fn show(&mut self, rect: &Rect, color: Rgb) -> Result<()>;
}

/// Transient visual feedback.
pub trait Feedback {
    type Preview: Preview;
    /// Handle to a visible popup; destroyed when dropped.
    type Popup;

    /// Creates a hidden preview surface at `opacity` percent.
    fn create_preview(&self, opacity: u8) -> Result<Self::Preview>;

    /// Creates and shows the preset popup.
    fn create_popup(&self, layout: &PopupLayout) -> Result<Self::Popup>;

    fn show_status(&self, text: &str);

    fn clear_status(&self);
}

/// Everything a session needs from the OS.
pub trait Platform: Desktop + Input + Feedback {}

impl<T: Desktop + Input + Feedback> Platform for T {}
