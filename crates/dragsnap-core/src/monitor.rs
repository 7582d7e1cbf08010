//! Monitor resolution and work-area clamping.
//!
//! Monitors are queried fresh on every tick because the pointer can
//! cross displays mid-drag. Nothing here caches topology.

use crate::rect::{Point, Rect};

/// Slack allowed past the near (left/top) work-area bound.
///
/// Snapping lands edges exactly on the boundary; allowing one pixel of
/// overshoot keeps the clamp from fighting frame-border rounding.
pub const CLAMP_SLACK: i32 = 1;

/// A display as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monitor {
    /// Position in the platform's enumeration order.
    pub index: usize,
    /// Full display bounds.
    pub bounds: Rect,
    /// Usable area excluding taskbars and docked toolbars.
    pub work_area: Rect,
    /// Whether this is the primary display.
    pub primary: bool,
}

/// Picks the monitor that owns `rect`.
///
/// Fallback chain: the monitor whose bounds fully contain the rect, then
/// the monitor with the largest overlap, then the primary monitor, then
/// the first one enumerated. Returns `None` only for an empty slice.
pub fn resolve_for_rect<'a>(monitors: &'a [Monitor], rect: &Rect) -> Option<&'a Monitor> {
    if let Some(m) = monitors.iter().find(|m| m.bounds.contains_rect(rect)) {
        return Some(m);
    }

    let best = monitors
        .iter()
        .map(|m| (m, m.bounds.overlap_area(rect)))
        .filter(|(_, area)| *area > 0)
        // max_by_key keeps the last maximum; reverse so the first wins ties.
        .rev()
        .max_by_key(|(_, area)| *area)
        .map(|(m, _)| m);

    best.or_else(|| primary(monitors))
}

/// Picks the monitor under `point`, falling back to the primary one.
pub fn resolve_for_point(monitors: &[Monitor], point: Point) -> Option<&Monitor> {
    monitors
        .iter()
        .find(|m| m.bounds.contains_point(point))
        .or_else(|| primary(monitors))
}

/// The primary monitor, or the first one if none is flagged.
pub fn primary(monitors: &[Monitor]) -> Option<&Monitor> {
    monitors.iter().find(|m| m.primary).or(monitors.first())
}

/// Shifts `rect` so it lies inside `work_area`, keeping its size.
///
/// The far bound is the work-area edge minus the window extent; the near
/// bound allows [`CLAMP_SLACK`] pixels of overshoot. A window larger than
/// the work area is pinned to the near edge. Already-contained rects are
/// returned unchanged.
pub fn clamp_to_work_area(rect: &Rect, work_area: &Rect) -> Rect {
    let x = clamp_axis(rect.x, rect.width, work_area.x, work_area.right());
    let y = clamp_axis(rect.y, rect.height, work_area.y, work_area.bottom());
    Rect::new(x, y, rect.width, rect.height)
}

/// Trims `rect` so none of its edges leave `work_area`.
///
/// Used by resize sessions, where the size is what changes and the
/// origin should stay put unless it is itself outside the area.
pub fn trim_to_work_area(rect: &Rect, work_area: &Rect) -> Rect {
    let left = rect.x.max(work_area.x - CLAMP_SLACK);
    let top = rect.y.max(work_area.y - CLAMP_SLACK);
    let right = rect.right().min(work_area.right()).max(left + 1);
    let bottom = rect.bottom().min(work_area.bottom()).max(top + 1);
    Rect::from_edges(left, top, right, bottom)
}

fn clamp_axis(pos: i32, extent: i32, near: i32, far: i32) -> i32 {
    let lo = near - CLAMP_SLACK;
    let hi = far - extent;
    if hi < lo {
        return near;
    }
    pos.clamp(lo, hi)
}
