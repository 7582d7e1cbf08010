use dragsnap_core::error::{Error, Result};
use dragsnap_core::{Key, Point};
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::Input::KeyboardAndMouse::GetAsyncKeyState;
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

use crate::keys;

/// Absolute pointer position in physical pixels.
pub fn cursor_pos() -> Result<Point> {
    let mut point = POINT::default();
    // SAFETY: GetCursorPos writes into a stack POINT.
    unsafe { GetCursorPos(&mut point) }.map_err(|e| Error::os("GetCursorPos", e))?;
    Ok(Point::new(point.x, point.y))
}

/// Whether `key` is physically down right now.
///
/// Uses the async key state, so it works without a message queue and
/// regardless of which window has focus.
pub fn is_down(key: &Key) -> bool {
    keys::vk_codes(key).into_iter().any(|vk| {
        // SAFETY: GetAsyncKeyState is a plain query; the high bit
        // (negative value) means the key is down.
        unsafe { GetAsyncKeyState(vk as i32) < 0 }
    })
}
