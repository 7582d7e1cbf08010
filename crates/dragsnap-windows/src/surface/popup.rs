use dragsnap_core::Rect;
use dragsnap_core::color::Rgb;
use dragsnap_core::error::Result;
use dragsnap_core::popup::PopupLayout;

use super::text::{self, BOLD, SelectedFont};
use super::{Canvas, LayeredWindow, premultiplied};

const FONT_HEIGHT: i32 = 15;

const PANEL: Rgb = Rgb::new(0x1e, 0x1e, 0x2e);
const CELL: Rgb = Rgb::new(0x31, 0x32, 0x44);
const OUTLINE: Rgb = Rgb::new(0x45, 0x47, 0x5a);
const LABEL: Rgb = Rgb::new(0xcd, 0xd6, 0xf4);

/// The preset grid. Click-through: the selection is decided from the
/// pointer position at release, not from window messages.
pub struct PopupWindow {
    _window: LayeredWindow,
}

impl PopupWindow {
    /// Renders `layout` and shows it. Destroyed on drop.
    pub fn show(layout: &PopupLayout) -> Result<Self> {
        let window = LayeredWindow::new()?;
        let bounds = layout.bounds;

        let mut canvas = Canvas::new(bounds.width, bounds.height)?;
        let font = SelectedFont::new(&canvas, FONT_HEIGHT, BOLD);
        canvas.fill(
            &Rect::new(0, 0, bounds.width, bounds.height),
            premultiplied(PANEL, 240),
        );

        let cell_pixel = premultiplied(CELL, 255);
        for cell in &layout.cells {
            let local = Rect::new(
                cell.rect.x - bounds.x,
                cell.rect.y - bounds.y,
                cell.rect.width,
                cell.rect.height,
            );
            canvas.fill(&local, cell_pixel);
            canvas.frame(&local, 1, premultiplied(OUTLINE, 255));
            text::draw_centered(&mut canvas, &local, &cell.preset.label, LABEL, cell_pixel);
        }
        drop(font);

        window.present(&canvas, &bounds)?;
        Ok(Self { _window: window })
    }
}
