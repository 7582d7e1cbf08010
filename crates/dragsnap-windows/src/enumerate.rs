use windows::Win32::Foundation::{HWND, LPARAM, POINT};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, GA_ROOT, GetAncestor, WindowFromPoint};
use windows::core::BOOL;

use crate::window::Win32Window;

/// Enumerates every top-level window, front to back.
///
/// No filtering happens here; callers run the result through
/// `WindowFilter`. An enumeration error yields whatever was collected.
pub fn enumerate_windows() -> Vec<Win32Window> {
    let mut windows: Vec<Win32Window> = Vec::new();

    // SAFETY: EnumWindows calls our callback for each top-level window.
    // We pass a pointer to our Vec as LPARAM (user data). The callback
    // casts it back to &mut Vec<Win32Window>. EnumWindows runs
    // synchronously, so the Vec outlives the call.
    let result = unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )
    };
    if let Err(e) = result {
        tracing::debug!("EnumWindows stopped early: {e}");
    }

    windows
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Win32 can't call Rust closures directly, so the collection travels
/// through `LPARAM` and is cast back here.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec, cast from enumerate_windows().
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Win32Window>) };
    windows.push(Win32Window::new(hwnd));
    BOOL(1) // TRUE, continue enumerating
}

/// The top-level window under a screen point.
///
/// `WindowFromPoint` returns the deepest child; the root ancestor is the
/// window that actually moves.
pub fn window_at(x: i32, y: i32) -> Option<Win32Window> {
    // SAFETY: both calls are plain queries.
    unsafe {
        let hit = WindowFromPoint(POINT { x, y });
        if hit.is_invalid() {
            return None;
        }
        let root = GetAncestor(hit, GA_ROOT);
        let hwnd = if root.is_invalid() { hit } else { root };
        Some(Win32Window::new(hwnd))
    }
}
