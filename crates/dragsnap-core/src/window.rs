use crate::Rect;
use crate::error::Result;

/// Platform-agnostic window trait.
///
/// The engine never owns windows; it only reads their state and mutates
/// geometry through this trait. Each platform crate (e.g.
/// `dragsnap-windows`) provides its own implementation.
pub trait Window {
    /// Opaque, pointer-sized handle identifying the window to the OS.
    fn handle(&self) -> usize;

    /// Returns the window title.
    fn title(&self) -> Result<String>;

    /// Returns the window class name.
    fn class(&self) -> Result<String>;

    /// Returns the visible bounding rectangle.
    fn rect(&self) -> Result<Rect>;

    /// Returns whether the window is currently visible.
    fn is_visible(&self) -> bool;

    /// Returns whether the window is minimized.
    fn is_minimized(&self) -> bool;

    /// Returns whether the window is maximized.
    fn is_maximized(&self) -> bool;

    /// Returns whether the window carries the tool-window style.
    fn is_tool_window(&self) -> bool;

    /// Returns whether the handle still refers to an existing window.
    fn is_alive(&self) -> bool;

    /// Restores a maximized or minimized window to its normal state.
    fn restore(&self) -> Result<()>;

    /// Moves and resizes the window without changing z-order,
    /// activation, or forcing a redraw of the old surface.
    fn set_rect(&self, rect: &Rect) -> Result<()>;
}

/// A snapshot of the window properties the filter looks at.
///
/// Taken once per query so filtering logic stays pure and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub handle: usize,
    pub title: String,
    pub class: String,
    pub rect: Rect,
    pub visible: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub tool_window: bool,
}

impl WindowInfo {
    /// Captures a snapshot of `window`.
    ///
    /// Fails if any of the fallible queries fail; callers enumerating many
    /// windows skip that window and carry on.
    pub fn capture(window: &impl Window) -> Result<Self> {
        Ok(Self {
            handle: window.handle(),
            title: window.title()?,
            class: window.class()?,
            rect: window.rect()?,
            visible: window.is_visible(),
            minimized: window.is_minimized(),
            maximized: window.is_maximized(),
            tool_window: window.is_tool_window(),
        })
    }

    /// A short human-readable label: the title, or the class if untitled.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.class
        } else {
            &self.title
        }
    }
}
