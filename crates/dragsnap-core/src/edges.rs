//! Snap edge candidates.
//!
//! The sibling list is built once per move session and frozen. Siblings
//! that move mid-session leave stale edges behind; that is accepted.
//! Order matters: the resolver takes the first match, so the list keeps
//! the platform's enumeration (z-order) order.

use std::fmt;

use tracing::debug;

use crate::Rect;
use crate::filter::WindowFilter;
use crate::window::{Window, WindowInfo};

/// The axis an edge constrains.
///
/// `Horizontal` edges are vertical lines with an x position (left and
/// right sides); `Vertical` edges are horizontal lines with a y position
/// (top and bottom sides).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Which side of its owner an edge is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Left or top.
    Near,
    /// Right or bottom.
    Far,
}

/// Human name for an edge on an axis.
pub fn side_name(axis: Axis, kind: EdgeKind) -> &'static str {
    match (axis, kind) {
        (Axis::Horizontal, EdgeKind::Near) => "left",
        (Axis::Horizontal, EdgeKind::Far) => "right",
        (Axis::Vertical, EdgeKind::Near) => "top",
        (Axis::Vertical, EdgeKind::Far) => "bottom",
    }
}

/// One edge the dragged window may snap to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeCandidate {
    pub axis: Axis,
    pub kind: EdgeKind,
    pub position: i32,
    /// Label of the window or screen the edge belongs to.
    pub owner: String,
}

impl EdgeCandidate {
    pub fn new(axis: Axis, kind: EdgeKind, position: i32, owner: impl Into<String>) -> Self {
        Self {
            axis,
            kind,
            position,
            owner: owner.into(),
        }
    }
}

impl fmt::Display for EdgeCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.owner, side_name(self.axis, self.kind))
    }
}

/// The four edges of `rect`: left, right, top, bottom.
pub fn rect_edges(rect: &Rect, owner: &str) -> [EdgeCandidate; 4] {
    [
        EdgeCandidate::new(Axis::Horizontal, EdgeKind::Near, rect.x, owner),
        EdgeCandidate::new(Axis::Horizontal, EdgeKind::Far, rect.right(), owner),
        EdgeCandidate::new(Axis::Vertical, EdgeKind::Near, rect.y, owner),
        EdgeCandidate::new(Axis::Vertical, EdgeKind::Far, rect.bottom(), owner),
    ]
}

/// Builds the frozen sibling edge list for a move session.
///
/// `exclude` is the dragged window, so self-snapping cannot happen.
/// Windows whose properties cannot be read are skipped; one bad handle
/// never aborts the enumeration.
pub fn build_edge_list<W: Window>(
    windows: &[W],
    exclude: usize,
    filter: &WindowFilter<'_>,
) -> Vec<EdgeCandidate> {
    let mut edges = Vec::new();
    for window in windows {
        if window.handle() == exclude {
            continue;
        }
        let info = match WindowInfo::capture(window) {
            Ok(info) => info,
            Err(e) => {
                debug!("skipping window 0x{:X}: {e}", window.handle());
                continue;
            }
        };
        if filter.check_edge_source(&info).is_err() {
            continue;
        }
        edges.extend(rect_edges(&info.rect, info.label()));
    }
    debug!("built {} sibling edges", edges.len());
    edges
}
