use std::mem;

use dragsnap_core::error::{Error, Result};
use dragsnap_core::{Monitor, Rect};
use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
};
use windows::core::BOOL;

/// `MONITORINFOF_PRIMARY` from `winuser.h`.
const PRIMARY_FLAG: u32 = 0x1;

fn to_rect(rc: &RECT) -> Rect {
    Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom)
}

/// Enumerates the attached monitors in OS order.
///
/// Indices follow enumeration order, so they are stable only for one
/// query. Monitors whose info cannot be read are skipped.
pub fn enumerate_monitors() -> Result<Vec<Monitor>> {
    let mut handles: Vec<HMONITOR> = Vec::new();

    // SAFETY: the callback casts LPARAM back to the Vec above, which
    // outlives the synchronous enumeration.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(collect_monitor),
            LPARAM(&mut handles as *mut _ as isize),
        )
    };
    if !ok.as_bool() {
        return Err(Error::os("EnumDisplayMonitors", "enumeration failed"));
    }

    let monitors: Vec<Monitor> = handles
        .into_iter()
        .filter_map(monitor_info)
        .enumerate()
        .map(|(index, (bounds, work_area, primary))| Monitor {
            index,
            bounds,
            work_area,
            primary,
        })
        .collect();

    if monitors.is_empty() {
        return Err(Error::NoMonitor);
    }
    Ok(monitors)
}

unsafe extern "system" fn collect_monitor(
    monitor: HMONITOR,
    _dc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is the Vec pointer passed by enumerate_monitors().
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HMONITOR>) };
    handles.push(monitor);
    BOOL(1)
}

fn monitor_info(monitor: HMONITOR) -> Option<(Rect, Rect, bool)> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: cbSize is set as the API requires.
    let ok = unsafe { GetMonitorInfoW(monitor, &mut info) };
    if !ok.as_bool() {
        return None;
    }

    Some((
        to_rect(&info.rcMonitor),
        to_rect(&info.rcWork),
        info.dwFlags & PRIMARY_FLAG != 0,
    ))
}
