use dragsnap_core::error::{Error, Result};
use dragsnap_core::{Rect, Window};
use tracing::trace;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GetWindowLongPtrW, GetWindowTextLengthW, GetWindowTextW, IsIconic, IsWindow,
    IsWindowVisible, IsZoomed, RealGetWindowClassW, SW_RESTORE, SWP_FRAMECHANGED,
    SWP_NOACTIVATE, SWP_NOCOPYBITS, SWP_NOOWNERZORDER, SWP_NOSENDCHANGING, SWP_NOZORDER,
    SetWindowPos, ShowWindow, WS_EX_TOOLWINDOW,
};

use crate::frame;

/// A top-level window, wrapping a Win32 `HWND`.
///
/// Holds the handle only; every query goes to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win32Window {
    hwnd: HWND,
}

impl Win32Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a window from a raw handle value, as printed by
    /// `dragsnap debug list`.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Chromium and Firefox only repaint after a programmatic resize when
    /// `WM_NCCALCSIZE` fires, which takes `SWP_FRAMECHANGED`.
    fn needs_frame_changed(&self) -> bool {
        let class = self.class().unwrap_or_default();
        class == "Chrome_WidgetWin_1" || class == "MozillaWindowClass"
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.is_alive() {
            Ok(())
        } else {
            Err(Error::WindowGone)
        }
    }
}

impl Window for Win32Window {
    fn handle(&self) -> usize {
        self.hwnd.0 as usize
    }

    fn title(&self) -> Result<String> {
        self.ensure_alive()?;
        // SAFETY: both calls only read the window text of a live HWND.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn class(&self) -> Result<String> {
        self.ensure_alive()?;
        // SAFETY: RealGetWindowClassW writes at most 256 UTF-16 units,
        // the maximum class name length in Win32.
        unsafe {
            let mut buffer = [0u16; 256];
            let length = RealGetWindowClassW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..length as usize]))
        }
    }

    fn rect(&self) -> Result<Rect> {
        self.ensure_alive()?;
        let frame = frame::visible_rect(self.hwnd)?;
        Ok(Rect::from_edges(
            frame.left,
            frame.top,
            frame.right,
            frame.bottom,
        ))
    }

    fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a plain query.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    fn is_minimized(&self) -> bool {
        // SAFETY: IsIconic is a plain query.
        unsafe { IsIconic(self.hwnd).as_bool() }
    }

    fn is_maximized(&self) -> bool {
        // SAFETY: IsZoomed is a plain query.
        unsafe { IsZoomed(self.hwnd).as_bool() }
    }

    fn is_tool_window(&self) -> bool {
        // SAFETY: reads the extended style bits of the window.
        let ex_style = unsafe { GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) } as u32;
        ex_style & WS_EX_TOOLWINDOW.0 == WS_EX_TOOLWINDOW.0
    }

    fn is_alive(&self) -> bool {
        // SAFETY: IsWindow accepts any handle value, including stale ones.
        unsafe { IsWindow(Some(self.hwnd)).as_bool() }
    }

    fn restore(&self) -> Result<()> {
        self.ensure_alive()?;
        // SAFETY: ShowWindow returns the previous visibility, not an error.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_RESTORE);
        }
        Ok(())
    }

    fn set_rect(&self, rect: &Rect) -> Result<()> {
        self.ensure_alive()?;

        // The requested rect is the visible frame; SetWindowPos wants the
        // outer rect including the invisible resize borders.
        let border = frame::border_offset(self.hwnd)?;
        let x = rect.x - border.left;
        let y = rect.y - border.top;
        let cx = rect.width + border.left + border.right;
        let cy = rect.height + border.top + border.bottom;

        // SWP_NOSENDCHANGING stops the window from rewriting the size in
        // WM_WINDOWPOSCHANGING. SWP_NOCOPYBITS drops the old client
        // contents instead of blitting them to the new position.
        let mut flags = SWP_NOZORDER
            | SWP_NOOWNERZORDER
            | SWP_NOACTIVATE
            | SWP_NOSENDCHANGING
            | SWP_NOCOPYBITS;
        let frame_changed = self.needs_frame_changed();
        if frame_changed {
            flags |= SWP_FRAMECHANGED;
        }

        trace!(
            "set_rect 0x{:X}: ({},{} {}x{}) border(L:{} T:{} R:{} B:{}) frame_changed={}",
            self.handle(),
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            border.left,
            border.top,
            border.right,
            border.bottom,
            frame_changed
        );

        // SAFETY: SetWindowPos on a live HWND; failures are reported.
        unsafe { SetWindowPos(self.hwnd, None, x, y, cx, cy, flags) }
            .map_err(|e| Error::os("SetWindowPos", e))
    }
}
