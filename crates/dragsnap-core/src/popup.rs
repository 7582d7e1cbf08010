//! Placement preset popup.
//!
//! A grid of fractional placements shown near the pointer during a move
//! session. The pointer stays captured by the drag chord, so selection
//! is resolved by hit-testing the pointer position at release.

use serde::{Deserialize, Serialize};

use crate::monitor::clamp_to_work_area;
use crate::{Point, Rect};

/// Gap in pixels around and between cells.
pub const CELL_GAP: i32 = 6;

/// A placement expressed as fractions of a work area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Preset {
    pub fn new(label: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Resolves the preset against a work area.
    ///
    /// Edges are rounded independently so adjacent presets (a left half
    /// and a right half) share an edge without a gap.
    pub fn rect_in(&self, work_area: &Rect) -> Rect {
        let at = |origin: i32, extent: i32, frac: f64| {
            origin + (f64::from(extent) * frac).round() as i32
        };
        Rect::from_edges(
            at(work_area.x, work_area.width, self.x),
            at(work_area.y, work_area.height, self.y),
            at(work_area.x, work_area.width, self.x + self.width),
            at(work_area.y, work_area.height, self.y + self.height),
        )
    }

    /// Clamps fractions into the unit square. Returns `false` if the
    /// preset is empty afterwards.
    pub fn normalize(&mut self) -> bool {
        if ![self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
        {
            return false;
        }
        self.x = self.x.clamp(0.0, 1.0);
        self.y = self.y.clamp(0.0, 1.0);
        self.width = self.width.clamp(0.0, 1.0 - self.x);
        self.height = self.height.clamp(0.0, 1.0 - self.y);
        self.width > 0.0 && self.height > 0.0 && !self.label.trim().is_empty()
    }
}

/// The built-in 3x3 grid.
pub fn default_presets() -> Vec<Preset> {
    const THIRD: f64 = 1.0 / 3.0;
    vec![
        Preset::new("Left 1/2", 0.0, 0.0, 0.5, 1.0),
        Preset::new("Full", 0.0, 0.0, 1.0, 1.0),
        Preset::new("Right 1/2", 0.5, 0.0, 0.5, 1.0),
        Preset::new("Left 1/3", 0.0, 0.0, THIRD, 1.0),
        Preset::new("Center 1/3", THIRD, 0.0, THIRD, 1.0),
        Preset::new("Right 1/3", 2.0 * THIRD, 0.0, THIRD, 1.0),
        Preset::new("Top 1/2", 0.0, 0.0, 1.0, 0.5),
        Preset::new("Center", 0.15, 0.1, 0.7, 0.8),
        Preset::new("Bottom 1/2", 0.0, 0.5, 1.0, 0.5),
    ]
}

/// One clickable cell.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupCell {
    pub preset: Preset,
    pub rect: Rect,
}

/// Screen-space geometry of a summoned popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupLayout {
    pub bounds: Rect,
    pub cells: Vec<PopupCell>,
}

impl PopupLayout {
    /// Lays out `presets` in a grid centered on `pointer`, kept inside
    /// `work_area`.
    pub fn new(
        presets: &[Preset],
        columns: usize,
        cell_width: i32,
        cell_height: i32,
        pointer: Point,
        work_area: &Rect,
    ) -> Self {
        let columns = columns.clamp(1, presets.len().max(1));
        let rows = presets.len().div_ceil(columns);
        let span = |count: usize, cell: i32| count as i32 * (cell + CELL_GAP) + CELL_GAP;
        let width = span(columns, cell_width);
        let height = span(rows, cell_height);

        let centered = Rect::new(pointer.x - width / 2, pointer.y - height / 2, width, height);
        let bounds = clamp_to_work_area(&centered, work_area);

        let cells = presets
            .iter()
            .enumerate()
            .map(|(i, preset)| {
                let (col, row) = ((i % columns) as i32, (i / columns) as i32);
                PopupCell {
                    preset: preset.clone(),
                    rect: Rect::new(
                        bounds.x + CELL_GAP + col * (cell_width + CELL_GAP),
                        bounds.y + CELL_GAP + row * (cell_height + CELL_GAP),
                        cell_width,
                        cell_height,
                    ),
                }
            })
            .collect();

        Self { bounds, cells }
    }

    /// The preset under `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<&Preset> {
        self.cells
            .iter()
            .find(|c| c.rect.contains_point(point))
            .map(|c| &c.preset)
    }
}
