use dragsnap_core::color::Rgb;
use dragsnap_core::error::Result;
use dragsnap_core::{Preview, Rect};

use super::{Canvas, LayeredWindow, alpha_from_percent, premultiplied};

/// Width of the opaque outline around the tinted fill.
const OUTLINE: i32 = 2;

/// The resize preview: a tinted, outlined rect over the candidate
/// geometry. Destroyed on drop.
pub struct PreviewWindow {
    window: LayeredWindow,
    alpha: u8,
}

impl PreviewWindow {
    /// Creates a hidden preview whose fill is `opacity` percent opaque.
    pub fn new(opacity: u8) -> Result<Self> {
        Ok(Self {
            window: LayeredWindow::new()?,
            alpha: alpha_from_percent(opacity),
        })
    }
}

impl Preview for PreviewWindow {
    fn show(&mut self, rect: &Rect, color: Rgb) -> Result<()> {
        let mut canvas = Canvas::new(rect.width, rect.height)?;
        let local = Rect::new(0, 0, rect.width, rect.height);
        canvas.fill(&local, premultiplied(color, self.alpha));
        canvas.frame(&local, OUTLINE, premultiplied(color, 255));
        self.window.present(&canvas, rect)
    }
}
