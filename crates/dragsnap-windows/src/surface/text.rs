//! GDI text onto a [`Canvas`].
//!
//! GDI writes text pixels with zero alpha, so after drawing, every pixel
//! in the text box that differs from the background is made opaque.

use dragsnap_core::Rect;
use dragsnap_core::color::Rgb;
use windows::Win32::Foundation::{COLORREF, SIZE};
use windows::Win32::Graphics::Gdi::{
    CreateFontW, DeleteObject, FONT_CHARSET, FONT_CLIP_PRECISION, FONT_OUTPUT_PRECISION,
    FONT_QUALITY, GetTextExtentPoint32W, HDC, HFONT, HGDIOBJ, SelectObject, SetBkMode, SetTextColor,
    TRANSPARENT, TextOutW,
};
use windows::core::PCWSTR;

use super::Canvas;

pub const FACE: &str = "Segoe UI";
pub const NORMAL: i32 = 400;
pub const BOLD: i32 = 700;

/// A GDI font selected into a canvas until dropped.
///
/// Must be dropped before the canvas it was selected into.
pub struct SelectedFont {
    dc: HDC,
    font: HFONT,
    previous: HGDIOBJ,
}

impl SelectedFont {
    pub fn new(canvas: &Canvas, height: i32, weight: i32) -> Self {
        let face: Vec<u16> = FACE.encode_utf16().chain(std::iter::once(0)).collect();
        // SAFETY: `face` is null-terminated and outlives the call; the
        // font is deselected and deleted on drop.
        unsafe {
            let font = CreateFontW(
                height,
                0,
                0,
                0,
                weight,
                0,
                0,
                0,
                FONT_CHARSET(0),
                FONT_OUTPUT_PRECISION(0),
                FONT_CLIP_PRECISION(0),
                FONT_QUALITY(0),
                0,
                PCWSTR(face.as_ptr()),
            );
            let previous = SelectObject(canvas.dc(), font.into());
            let _ = SetBkMode(canvas.dc(), TRANSPARENT);
            Self {
                dc: canvas.dc(),
                font,
                previous,
            }
        }
    }
}

impl Drop for SelectedFont {
    fn drop(&mut self) {
        // SAFETY: restores the previous font before deleting ours.
        unsafe {
            SelectObject(self.dc, self.previous);
            let _ = DeleteObject(self.font.into());
        }
    }
}

/// Measures `text` with the font currently selected into `canvas`.
pub fn measure(canvas: &Canvas, text: &str) -> (i32, i32) {
    let wide: Vec<u16> = text.encode_utf16().collect();
    let mut size = SIZE::default();
    // SAFETY: read-only query against the canvas DC.
    unsafe {
        let _ = GetTextExtentPoint32W(canvas.dc(), &wide, &mut size);
    }
    (size.cx, size.cy)
}

/// Draws `text` centered in a canvas-local `area`.
///
/// `background` is the pixel value the area was filled with.
pub fn draw_centered(canvas: &mut Canvas, area: &Rect, text: &str, color: Rgb, background: u32) {
    if text.is_empty() {
        return;
    }
    let wide: Vec<u16> = text.encode_utf16().collect();
    let (w, h) = measure(canvas, text);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;

    // SAFETY: draws into our own memory DC.
    unsafe {
        let _ = SetTextColor(canvas.dc(), COLORREF(color.to_colorref()));
        let _ = TextOutW(canvas.dc(), x, y, &wide);
    }

    fix_alpha(canvas, &Rect::new(x, y, w, h), background);
}

fn fix_alpha(canvas: &mut Canvas, region: &Rect, background: u32) {
    let (cw, ch) = (canvas.width(), canvas.height());
    let x0 = region.x.max(0);
    let y0 = region.y.max(0);
    let x1 = region.right().min(cw);
    let y1 = region.bottom().min(ch);

    let buf = canvas.pixels();
    for py in y0..y1 {
        for px in x0..x1 {
            let idx = (py * cw + px) as usize;
            if buf[idx] != background {
                buf[idx] |= 0xFF00_0000;
            }
        }
    }
}
