//! Snap resolver.
//!
//! A pure function from a proposed rect and edge candidates to an
//! adjusted rect. Each axis is resolved independently:
//!
//! 1. Sibling candidates on that axis are scanned in stored order, then
//!    the work-area edges of the current monitor.
//! 2. For each candidate the proposed near edge is tested, then the far
//!    edge. The first one within tolerance wins and the scan stops.
//! 3. A match moves the snapped edge exactly onto the candidate.
//!
//! The scan order is the tie-break. Two siblings equally close resolve
//! to whichever was enumerated first.

use crate::Rect;
use crate::edges::{Axis, EdgeCandidate, EdgeKind, rect_edges, side_name};

/// Owner label used for work-area edges.
pub const SCREEN_OWNER: &str = "screen";

/// How the proposed rect is allowed to change when an edge snaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapMode {
    /// Both edges are tested; a match translates the rect.
    Move,
    /// Only the moving edge on each axis is tested; a match changes the
    /// extent. `None` leaves that axis untouched.
    Resize {
        horizontal: Option<EdgeKind>,
        vertical: Option<EdgeKind>,
    },
}

/// Inputs to [`resolve`].
#[derive(Debug, Clone, Copy)]
pub struct SnapRequest<'a> {
    pub proposed: Rect,
    /// Frozen sibling edges, in enumeration order.
    pub siblings: &'a [EdgeCandidate],
    /// Work area whose edges are tried after the siblings.
    pub screen: Option<&'a Rect>,
    /// Maximum pixel distance at which an edge is pulled.
    pub tolerance: i32,
    pub mode: SnapMode,
}

/// A snap on one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisMatch {
    /// Which edge of the dragged rect snapped.
    pub edge: EdgeKind,
    /// The edge it snapped to.
    pub target: EdgeCandidate,
}

/// Result of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapResult {
    pub rect: Rect,
    pub horizontal: Option<AxisMatch>,
    pub vertical: Option<AxisMatch>,
}

impl SnapResult {
    /// A result that leaves `rect` untouched.
    pub fn unsnapped(rect: Rect) -> Self {
        Self {
            rect,
            horizontal: None,
            vertical: None,
        }
    }

    /// Whether each axis (horizontal, vertical) snapped.
    pub fn matched_axes(&self) -> (bool, bool) {
        (self.horizontal.is_some(), self.vertical.is_some())
    }

    /// Status text describing the matches, e.g. `"left → Editor right"`.
    pub fn description(&self) -> Option<String> {
        let parts: Vec<String> = [
            (Axis::Horizontal, &self.horizontal),
            (Axis::Vertical, &self.vertical),
        ]
        .into_iter()
        .filter_map(|(axis, m)| {
            m.as_ref()
                .map(|m| format!("{} → {}", side_name(axis, m.edge), m.target))
        })
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Resolves snapping for a proposed rect.
pub fn resolve(request: &SnapRequest<'_>) -> SnapResult {
    let screen_edges: Vec<EdgeCandidate> = request
        .screen
        .map(|wa| rect_edges(wa, SCREEN_OWNER).to_vec())
        .unwrap_or_default();

    let (h_edges, v_edges) = match request.mode {
        SnapMode::Move => (Some(BOTH), Some(BOTH)),
        SnapMode::Resize {
            horizontal,
            vertical,
        } => (horizontal.map(single), vertical.map(single)),
    };

    let mut rect = request.proposed;
    let mut result = SnapResult::unsnapped(rect);

    if let Some(ours) = h_edges {
        let span = Span::new(rect.x, rect.width);
        if let Some((span, m)) =
            resolve_axis(span, ours, Axis::Horizontal, request, &screen_edges)
        {
            rect.x = span.start;
            rect.width = span.extent;
            result.horizontal = Some(m);
        }
    }

    if let Some(ours) = v_edges {
        let span = Span::new(rect.y, rect.height);
        if let Some((span, m)) = resolve_axis(span, ours, Axis::Vertical, request, &screen_edges) {
            rect.y = span.start;
            rect.height = span.extent;
            result.vertical = Some(m);
        }
    }

    result.rect = rect;
    result
}

const BOTH: &[EdgeKind] = &[EdgeKind::Near, EdgeKind::Far];

fn single(kind: EdgeKind) -> &'static [EdgeKind] {
    match kind {
        EdgeKind::Near => &[EdgeKind::Near],
        EdgeKind::Far => &[EdgeKind::Far],
    }
}

/// One axis of a rect.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: i32,
    extent: i32,
}

impl Span {
    fn new(start: i32, extent: i32) -> Self {
        Self { start, extent }
    }

    fn edge(&self, kind: EdgeKind) -> i32 {
        match kind {
            EdgeKind::Near => self.start,
            EdgeKind::Far => self.start + self.extent,
        }
    }

    /// Puts edge `kind` at `pos`, translating or resizing per `mode`.
    fn snapped(&self, kind: EdgeKind, pos: i32, mode: SnapMode) -> Option<Self> {
        let moved = match (mode, kind) {
            (SnapMode::Move, EdgeKind::Near) => Self::new(pos, self.extent),
            (SnapMode::Move, EdgeKind::Far) => Self::new(pos - self.extent, self.extent),
            (SnapMode::Resize { .. }, EdgeKind::Near) => {
                Self::new(pos, self.start + self.extent - pos)
            }
            (SnapMode::Resize { .. }, EdgeKind::Far) => Self::new(self.start, pos - self.start),
        };
        // A snap that would invert the rect is not a match.
        (moved.extent > 0).then_some(moved)
    }
}

fn resolve_axis(
    span: Span,
    ours: &[EdgeKind],
    axis: Axis,
    request: &SnapRequest<'_>,
    screen_edges: &[EdgeCandidate],
) -> Option<(Span, AxisMatch)> {
    let candidates = request
        .siblings
        .iter()
        .chain(screen_edges.iter())
        .filter(|c| c.axis == axis);

    for candidate in candidates {
        for &kind in ours {
            if (span.edge(kind) - candidate.position).abs() > request.tolerance {
                continue;
            }
            if let Some(moved) = span.snapped(kind, candidate.position, request.mode) {
                let m = AxisMatch {
                    edge: kind,
                    target: candidate.clone(),
                };
                return Some((moved, m));
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "tests/snap_tests.rs"]
mod tests;
