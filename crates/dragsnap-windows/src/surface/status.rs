use dragsnap_core::color::Rgb;
use dragsnap_core::error::Result;
use dragsnap_core::{Point, Rect};

use super::text::{self, NORMAL, SelectedFont};
use super::{Canvas, LayeredWindow, premultiplied};

const FONT_HEIGHT: i32 = 16;
const PADDING_X: i32 = 10;
const PADDING_Y: i32 = 5;
/// Distance from the pointer to the label's top-left corner.
const OFFSET: Point = Point { x: 18, y: 22 };

const BACKGROUND: Rgb = Rgb::new(0x1e, 0x1e, 0x2e);
const FOREGROUND: Rgb = Rgb::new(0xcd, 0xd6, 0xf4);
const BACKGROUND_ALPHA: u8 = 230;

/// A small label that follows the pointer.
pub struct StatusWindow {
    window: LayeredWindow,
}

impl StatusWindow {
    pub fn new() -> Result<Self> {
        Ok(Self {
            window: LayeredWindow::new()?,
        })
    }

    /// Shows `message` next to `pointer`.
    pub fn show(&self, message: &str, pointer: Point) -> Result<()> {
        let (w, h) = {
            let probe = Canvas::new(1, 1)?;
            let _font = SelectedFont::new(&probe, FONT_HEIGHT, NORMAL);
            text::measure(&probe, message)
        };
        let width = w + PADDING_X * 2;
        let height = h + PADDING_Y * 2;

        let mut canvas = Canvas::new(width, height)?;
        let font = SelectedFont::new(&canvas, FONT_HEIGHT, NORMAL);
        let local = Rect::new(0, 0, width, height);
        let background = premultiplied(BACKGROUND, BACKGROUND_ALPHA);
        canvas.fill(&local, background);
        text::draw_centered(&mut canvas, &local, message, FOREGROUND, background);
        drop(font);

        let at = Rect::new(pointer.x + OFFSET.x, pointer.y + OFFSET.y, width, height);
        self.window.present(&canvas, &at)
    }

    pub fn hide(&self) {
        self.window.hide();
    }
}
