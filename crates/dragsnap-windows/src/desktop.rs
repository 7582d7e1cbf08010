use std::cell::RefCell;

use dragsnap_core::error::Result;
use dragsnap_core::popup::PopupLayout;
use dragsnap_core::{Desktop, Feedback, Input, Key, Monitor, Point};
use tracing::debug;

use crate::surface::popup::PopupWindow;
use crate::surface::preview::PreviewWindow;
use crate::surface::status::StatusWindow;
use crate::window::Win32Window;
use crate::{enumerate, input, monitor};

/// The Win32 desktop as seen by the session engine.
///
/// Holds the status label between calls; every other surface is owned
/// by the session that created it. Single-threaded: create and use it on
/// the thread that runs the chord loop.
#[derive(Default)]
pub struct Win32Desktop {
    status: RefCell<Option<StatusWindow>>,
}

impl Win32Desktop {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Desktop for Win32Desktop {
    type Window = Win32Window;

    fn window_at(&self, point: Point) -> Option<Win32Window> {
        enumerate::window_at(point.x, point.y)
    }

    fn windows(&self) -> Vec<Win32Window> {
        enumerate::enumerate_windows()
    }

    fn monitors(&self) -> Result<Vec<Monitor>> {
        monitor::enumerate_monitors()
    }
}

impl Input for Win32Desktop {
    fn cursor(&self) -> Result<Point> {
        input::cursor_pos()
    }

    fn is_down(&self, key: &Key) -> bool {
        input::is_down(key)
    }
}

impl Feedback for Win32Desktop {
    type Preview = PreviewWindow;
    type Popup = PopupWindow;

    fn create_preview(&self, opacity: u8) -> Result<PreviewWindow> {
        PreviewWindow::new(opacity)
    }

    fn create_popup(&self, layout: &PopupLayout) -> Result<PopupWindow> {
        PopupWindow::show(layout)
    }

    fn show_status(&self, text: &str) {
        let mut slot = self.status.borrow_mut();
        if slot.is_none() {
            match StatusWindow::new() {
                Ok(window) => *slot = Some(window),
                Err(e) => {
                    debug!("status label unavailable: {e}");
                    return;
                }
            }
        }
        let pointer = input::cursor_pos().unwrap_or_default();
        if let Some(window) = slot.as_ref()
            && let Err(e) = window.show(text, pointer)
        {
            debug!("status label not shown: {e}");
        }
    }

    fn clear_status(&self) {
        if let Some(window) = self.status.borrow().as_ref() {
            window.hide();
        }
    }
}
