use dragsnap_core::Config;
use dragsnap_core::clock::SystemClock;
use dragsnap_core::dispatch;
use dragsnap_core::error::Result;
use tracing::info;
use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

use crate::ctrl_c;
use crate::desktop::Win32Desktop;

/// Declares this process as per-monitor DPI aware (V2).
///
/// Without it, Windows scales coordinates by the primary monitor's DPI
/// and positions are wrong on mixed-DPI setups. Must run before any
/// window is created.
pub fn enable_dpi_awareness() {
    // SAFETY: fails harmlessly if awareness was already set by a manifest.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}

/// Runs the chord loop in the foreground until Ctrl+C.
///
/// Sessions run on this thread; overlays are layered windows painted
/// with `UpdateLayeredWindow`, so no message pump is needed.
pub fn run(config: &Config) -> Result<()> {
    enable_dpi_awareness();
    ctrl_c::install()?;

    let desktop = Win32Desktop::new();
    let clock = SystemClock;
    info!("dragsnap running, press Ctrl+C to stop");

    dispatch::run(&desktop, &clock, config, ctrl_c::stop_requested);

    info!("dragsnap stopped");
    Ok(())
}
