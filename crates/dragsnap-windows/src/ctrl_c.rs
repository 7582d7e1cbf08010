//! Ctrl+C handling using `SetConsoleCtrlHandler`.

use std::sync::atomic::{AtomicBool, Ordering};

use dragsnap_core::error::{Error, Result};
use windows::Win32::System::Console::{
    CTRL_BREAK_EVENT, CTRL_C_EVENT, CTRL_CLOSE_EVENT, SetConsoleCtrlHandler,
};
use windows::core::BOOL;

/// Set by the console handler; polled by the chord loop.
static STOP_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Installs the console handler. Calling it again is harmless.
pub fn install() -> Result<()> {
    // SAFETY: registers a static extern "system" callback.
    unsafe { SetConsoleCtrlHandler(Some(handler), true) }
        .map_err(|e| Error::os("SetConsoleCtrlHandler", e))
}

/// Whether Ctrl+C, Ctrl+Break or console close has been received.
pub fn stop_requested() -> bool {
    STOP_REQUESTED.load(Ordering::SeqCst)
}

unsafe extern "system" fn handler(ctrl_type: u32) -> BOOL {
    match ctrl_type {
        CTRL_C_EVENT | CTRL_BREAK_EVENT | CTRL_CLOSE_EVENT => {
            STOP_REQUESTED.store(true, Ordering::SeqCst);
            BOOL(1)
        }
        _ => BOOL(0),
    }
}
