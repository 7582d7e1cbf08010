#![cfg(windows)]

/// Ctrl+C handling for the foreground loop.
pub mod ctrl_c;

/// Foreground chord loop.
pub mod daemon;

/// The Win32 implementation of the engine's platform traits.
pub mod desktop;

/// Top-level window enumeration and hit testing.
pub mod enumerate;

/// Visible frame bounds (DWM) and invisible border offsets.
pub mod frame;

/// Pointer position and async key state.
pub mod input;

/// Virtual key codes for configured keys.
pub mod keys;

/// Monitor bounds and work areas.
pub mod monitor;

/// Layered overlay surfaces: preview, status label, popup.
pub mod surface;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use desktop::Win32Desktop;
pub use enumerate::enumerate_windows;
pub use monitor::enumerate_monitors;
pub use window::Win32Window;
