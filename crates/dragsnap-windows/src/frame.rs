use std::mem;

use dragsnap_core::error::{Error, Result};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::GetWindowRect;

/// Width of the invisible resize border on each side of a window.
///
/// `GetWindowRect` counts the drop-shadow area around Windows 10/11
/// frames; the engine works in visible-frame coordinates, so positions
/// are translated by these amounts before `SetWindowPos`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderOffset {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

fn window_rect(hwnd: HWND) -> Result<RECT> {
    let mut rect = RECT::default();
    // SAFETY: GetWindowRect writes into a stack RECT.
    unsafe { GetWindowRect(hwnd, &mut rect) }.map_err(|e| Error::os("GetWindowRect", e))?;
    Ok(rect)
}

/// The frame the user sees, from `DWMWA_EXTENDED_FRAME_BOUNDS`, or the
/// outer rect when composition is off.
pub fn visible_rect(hwnd: HWND) -> Result<RECT> {
    let mut frame = RECT::default();
    // SAFETY: the output buffer is a RECT of the size passed in.
    let result = unsafe {
        DwmGetWindowAttribute(
            hwnd,
            DWMWA_EXTENDED_FRAME_BOUNDS,
            &mut frame as *mut RECT as *mut _,
            mem::size_of::<RECT>() as u32,
        )
    };

    match result {
        Ok(()) => Ok(frame),
        Err(_) => window_rect(hwnd),
    }
}

/// Difference between the outer rect and the visible frame.
pub fn border_offset(hwnd: HWND) -> Result<BorderOffset> {
    let outer = window_rect(hwnd)?;
    let frame = visible_rect(hwnd)?;

    Ok(BorderOffset {
        left: frame.left - outer.left,
        top: frame.top - outer.top,
        right: outer.right - frame.right,
        bottom: outer.bottom - frame.bottom,
    })
}
