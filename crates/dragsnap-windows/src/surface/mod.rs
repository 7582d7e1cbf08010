//! Layered overlay windows.
//!
//! Every transient visual (resize preview, status text, preset popup) is
//! a topmost, click-through `WS_EX_LAYERED` popup painted from a 32-bit
//! premultiplied DIB with `UpdateLayeredWindow`. Nothing here needs a
//! message pump on the creating thread.

pub mod popup;
pub mod preview;
pub mod status;
pub mod text;

use std::mem;
use std::sync::Once;

use dragsnap_core::Rect;
use dragsnap_core::color::Rgb;
use dragsnap_core::error::{Error, Result};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, POINT, SIZE, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BLENDFUNCTION, CreateCompatibleDC, CreateDIBSection,
    DIB_RGB_COLORS, DeleteDC, DeleteObject, GetDC, HBITMAP, HDC, HGDIOBJ, ReleaseDC,
    SelectObject,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, HWND_TOPMOST, RegisterClassW, SW_HIDE,
    SWP_NOACTIVATE, SWP_SHOWWINDOW, SetWindowPos, ShowWindow, ULW_ALPHA, UpdateLayeredWindow,
    WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
    WS_EX_TRANSPARENT, WS_POPUP,
};
use windows::core::w;

static REGISTER_CLASS: Once = Once::new();

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(overlay_wnd_proc),
            lpszClassName: w!("DragsnapOverlay"),
            ..Default::default()
        };
        // SAFETY: registers a class with a static name and a plain
        // DefWindowProc forwarder.
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

unsafe extern "system" fn overlay_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

/// Converts a color with a separate alpha (0–255) to a premultiplied
/// BGRA pixel, as `UpdateLayeredWindow` with `AC_SRC_ALPHA` expects.
pub fn premultiplied(c: Rgb, alpha: u8) -> u32 {
    let a = u32::from(alpha);
    let r = u32::from(c.r) * a / 255;
    let g = u32::from(c.g) * a / 255;
    let b = u32::from(c.b) * a / 255;
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Converts a percentage (0–100) to an alpha byte.
pub fn alpha_from_percent(percent: u8) -> u8 {
    (u32::from(percent.min(100)) * 255 / 100) as u8
}

/// A hidden, click-through, topmost overlay window. Destroyed on drop.
pub struct LayeredWindow {
    hwnd: HWND,
}

impl LayeredWindow {
    pub fn new() -> Result<Self> {
        ensure_class_registered();

        let ex = WS_EX_LAYERED
            | WS_EX_TOOLWINDOW
            | WS_EX_TOPMOST
            | WS_EX_TRANSPARENT
            | WS_EX_NOACTIVATE;
        // SAFETY: the class is registered above; the window has no parent.
        let hwnd = unsafe {
            CreateWindowExW(
                ex,
                w!("DragsnapOverlay"),
                w!(""),
                WS_POPUP,
                0,
                0,
                0,
                0,
                None,
                None,
                None,
                None,
            )
        }
        .map_err(|e| Error::os("CreateWindowExW", e))?;

        Ok(Self { hwnd })
    }

    /// Paints `canvas` at `rect` and shows the window above everything
    /// else without activating it.
    pub fn present(&self, canvas: &Canvas, rect: &Rect) -> Result<()> {
        // SAFETY: SetWindowPos on our own window.
        unsafe {
            let _ = SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOACTIVATE | SWP_SHOWWINDOW,
            );
        }
        canvas.apply(self.hwnd, rect)
    }

    pub fn hide(&self) {
        // SAFETY: ShowWindow on our own window.
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_HIDE);
        }
    }
}

impl Drop for LayeredWindow {
    fn drop(&mut self) {
        // SAFETY: the window was created by this struct and is destroyed
        // exactly once.
        unsafe {
            let _ = DestroyWindow(self.hwnd);
        }
    }
}

/// A top-down 32-bit DIB selected into a memory DC.
///
/// GDI objects are released on drop.
pub struct Canvas {
    screen_dc: HDC,
    dc: HDC,
    bitmap: HBITMAP,
    previous: HGDIOBJ,
    bits: *mut u32,
    width: i32,
    height: i32,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::os("CreateDIBSection", "empty canvas"));
        }

        // SAFETY: DCs and the DIB are created here and owned by the
        // returned value; every failure path releases what was created.
        unsafe {
            let screen_dc = GetDC(None);
            let dc = CreateCompatibleDC(Some(screen_dc));

            let bmi = BITMAPINFO {
                bmiHeader: BITMAPINFOHEADER {
                    biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
                    biWidth: width,
                    biHeight: -height, // top-down
                    biPlanes: 1,
                    biBitCount: 32,
                    biCompression: BI_RGB.0,
                    ..Default::default()
                },
                ..Default::default()
            };

            let mut bits = std::ptr::null_mut();
            let bitmap = match CreateDIBSection(Some(dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0)
            {
                Ok(bitmap) if !bits.is_null() => bitmap,
                result => {
                    if let Ok(bitmap) = result {
                        let _ = DeleteObject(bitmap.into());
                    }
                    let _ = DeleteDC(dc);
                    let _ = ReleaseDC(None, screen_dc);
                    return Err(Error::os("CreateDIBSection", "allocation failed"));
                }
            };
            let previous = SelectObject(dc, bitmap.into());

            Ok(Self {
                screen_dc,
                dc,
                bitmap,
                previous,
                bits: bits as *mut u32,
                width,
                height,
            })
        }
    }

    pub fn dc(&self) -> HDC {
        self.dc
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pixels(&mut self) -> &mut [u32] {
        // SAFETY: `bits` is non-null (checked in `new`) and points to
        // `width * height` pixels owned by the DIB for our lifetime.
        unsafe { std::slice::from_raw_parts_mut(self.bits, (self.width * self.height) as usize) }
    }

    /// Fills a canvas-local rect, clipped to the canvas.
    pub fn fill(&mut self, rect: &Rect, pixel: u32) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width);
        let y1 = rect.bottom().min(self.height);
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let width = self.width;
        let buf = self.pixels();
        for py in y0..y1 {
            let row = (py * width) as usize;
            buf[row + x0 as usize..row + x1 as usize].fill(pixel);
        }
    }

    /// Draws a `thickness`-pixel frame just inside a canvas-local rect.
    pub fn frame(&mut self, rect: &Rect, thickness: i32, pixel: u32) {
        let t = thickness.min(rect.width / 2).min(rect.height / 2).max(0);
        self.fill(&Rect::new(rect.x, rect.y, rect.width, t), pixel);
        self.fill(&Rect::new(rect.x, rect.bottom() - t, rect.width, t), pixel);
        self.fill(&Rect::new(rect.x, rect.y, t, rect.height), pixel);
        self.fill(&Rect::new(rect.right() - t, rect.y, t, rect.height), pixel);
    }

    fn apply(&self, hwnd: HWND, rect: &Rect) -> Result<()> {
        let blend = BLENDFUNCTION {
            BlendOp: 0,               // AC_SRC_OVER
            SourceConstantAlpha: 255, // per-pixel alpha only
            AlphaFormat: 1,           // AC_SRC_ALPHA
            ..Default::default()
        };
        // SAFETY: both DCs are live for the lifetime of `self`.
        unsafe {
            UpdateLayeredWindow(
                hwnd,
                Some(self.screen_dc),
                Some(&POINT {
                    x: rect.x,
                    y: rect.y,
                }),
                Some(&SIZE {
                    cx: self.width,
                    cy: self.height,
                }),
                Some(self.dc),
                Some(&POINT::default()),
                COLORREF(0),
                Some(&blend),
                ULW_ALPHA,
            )
        }
        .map_err(|e| Error::os("UpdateLayeredWindow", e))
    }
}

impl Drop for Canvas {
    fn drop(&mut self) {
        // SAFETY: restores the original selection before deleting the
        // objects created in `new`.
        unsafe {
            SelectObject(self.dc, self.previous);
            let _ = DeleteObject(self.bitmap.into());
            let _ = DeleteDC(self.dc);
            let _ = ReleaseDC(None, self.screen_dc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiplied_scales_channels() {
        // Assert
        assert_eq!(premultiplied(Rgb::new(0xff, 0x80, 0x00), 255), 0xFFFF_8000);
        assert_eq!(premultiplied(Rgb::new(0xff, 0xff, 0xff), 0), 0);
        assert_eq!(premultiplied(Rgb::new(0xff, 0x00, 0x00), 102) >> 24, 102);
    }

    #[test]
    fn percent_maps_onto_byte_range() {
        // Assert
        assert_eq!(alpha_from_percent(0), 0);
        assert_eq!(alpha_from_percent(40), 102);
        assert_eq!(alpha_from_percent(100), 255);
        assert_eq!(alpha_from_percent(250), 255);
    }
}
