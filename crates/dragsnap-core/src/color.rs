//! Resize preview color.
//!
//! The preview tint is a pure function of the current extent relative to
//! the initial extent and the floor/ceiling of each axis. Each axis
//! yields a ratio in `[0, 1]` toward either the expand or the shrink
//! color; the two axis colors are then blended, weighted by their ratios.

use std::fmt;

use crate::Size;

/// An RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like `"#ff006e"` or `"ff006e"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    /// Packs the color as `0x00BBGGRR`, the GDI `COLORREF` layout.
    pub fn to_colorref(self) -> u32 {
        (self.b as u32) << 16 | (self.g as u32) << 8 | self.r as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Static color configuration for the resize preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStops {
    /// Color when the size is unchanged.
    pub baseline: Rgb,
    /// Color reached at the maximum extent.
    pub expand: Rgb,
    /// Color reached at the minimum extent.
    pub shrink: Rgb,
    /// Minimum extent on either axis.
    pub min_extent: i32,
}

/// Direction an axis has moved away from its initial extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    Expand,
    Shrink,
}

/// Ratio of change on one axis, in `[0, 1]`.
///
/// Growing is measured against `max`, shrinking against `min`. The
/// degenerate cases where there is no room to grow or shrink saturate to
/// 1 as soon as the extent moves in that direction.
pub fn axis_ratio(initial: i32, current: i32, min: i32, max: i32) -> (Growth, f64) {
    if current >= initial {
        let ratio = if max <= initial {
            if current > initial { 1.0 } else { 0.0 }
        } else {
            f64::from(current - initial) / f64::from(max - initial)
        };
        (Growth::Expand, ratio.clamp(0.0, 1.0))
    } else {
        let ratio = if initial <= min {
            1.0
        } else {
            f64::from(initial - current) / f64::from(initial - min)
        };
        (Growth::Shrink, ratio.clamp(0.0, 1.0))
    }
}

/// Computes the preview color for a candidate size.
///
/// `max` is the largest size the session allows (the work area).
pub fn preview_color(stops: &ColorStops, initial: Size, current: Size, max: Size) -> Rgb {
    let axis = |i: i32, c: i32, m: i32| {
        let (growth, ratio) = axis_ratio(i, c, stops.min_extent, m);
        let target = match growth {
            Growth::Expand => stops.expand,
            Growth::Shrink => stops.shrink,
        };
        (Channels::lerp(stops.baseline, target, ratio), ratio)
    };

    let (cx, rx) = axis(initial.width, current.width, max.width);
    let (cy, ry) = axis(initial.height, current.height, max.height);

    let total = rx + ry;
    if total <= 0.0 {
        return stops.baseline;
    }
    cx.scale(rx / total).add(cy.scale(ry / total)).to_rgb()
}

/// Unrounded channel values.
#[derive(Debug, Clone, Copy)]
struct Channels([f64; 3]);

impl Channels {
    fn from_rgb(c: Rgb) -> Self {
        Self([f64::from(c.r), f64::from(c.g), f64::from(c.b)])
    }

    fn lerp(from: Rgb, to: Rgb, t: f64) -> Self {
        let (a, b) = (Self::from_rgb(from).0, Self::from_rgb(to).0);
        Self(std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t))
    }

    fn scale(self, k: f64) -> Self {
        Self(self.0.map(|v| v * k))
    }

    fn add(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + other.0[i]))
    }

    fn to_rgb(self) -> Rgb {
        let [r, g, b] = self.0.map(|v| v.round().clamp(0.0, 255.0) as u8);
        Rgb { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const STOPS: ColorStops = ColorStops {
        baseline: Rgb::new(0x3a, 0x86, 0xff),
        expand: Rgb::new(0x2e, 0xc4, 0xb6),
        shrink: Rgb::new(0xff, 0x00, 0x6e),
        min_extent: 150,
    };

    const MAX: Size = Size {
        width: 1920,
        height: 1040,
    };

    #[test]
    fn from_hex_parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#00b4d8"), Some(Rgb::new(0x00, 0xB4, 0xD8)));
        assert_eq!(Rgb::from_hex("2d6a4f"), Some(Rgb::new(0x2D, 0x6A, 0x4F)));
        assert_eq!(Rgb::from_hex("bad"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
    }

    #[test]
    fn display_round_trips_through_from_hex() {
        let color = Rgb::new(0x12, 0xab, 0xef);
        assert_eq!(color.to_string(), "#12abef");
        assert_eq!(Rgb::from_hex(&color.to_string()), Some(color));
    }

    #[test]
    fn colorref_is_bgr() {
        assert_eq!(Rgb::new(0x11, 0x22, 0x33).to_colorref(), 0x0033_2211);
    }

    #[test]
    fn unchanged_size_is_exact_baseline() {
        // Arrange
        let size = Size::new(800, 600);

        // Act
        let color = preview_color(&STOPS, size, size, MAX);

        // Assert
        assert_eq!(color, STOPS.baseline);
    }

    #[test]
    fn max_extent_is_exact_expand_color() {
        // Act
        let both = preview_color(&STOPS, Size::new(800, 600), MAX, MAX);
        let width_only = preview_color(
            &STOPS,
            Size::new(800, 600),
            Size::new(MAX.width, 600),
            MAX,
        );

        // Assert
        assert_eq!(both, STOPS.expand);
        assert_eq!(width_only, STOPS.expand);
    }

    #[test]
    fn min_extent_is_exact_shrink_color() {
        // Act
        let color = preview_color(
            &STOPS,
            Size::new(800, 600),
            Size::new(150, 150),
            MAX,
        );

        // Assert
        assert_eq!(color, STOPS.shrink);
    }

    #[test]
    fn dominant_axis_dominates_blend() {
        // Arrange: width all the way to max, height barely shrunk
        let initial = Size::new(800, 600);
        let current = Size::new(MAX.width, 590);

        // Act
        let color = preview_color(&STOPS, initial, current, MAX);

        // Assert
        let to_expand = (i32::from(color.g) - i32::from(STOPS.expand.g)).abs();
        let to_shrink = (i32::from(color.g) - i32::from(STOPS.shrink.g)).abs();
        assert!(to_expand < to_shrink, "{color} should lean toward expand");
    }

    #[test]
    fn no_room_to_grow_saturates() {
        assert_eq!(axis_ratio(1920, 1920, 150, 1920), (Growth::Expand, 0.0));
        assert_eq!(axis_ratio(1920, 1921, 150, 1920), (Growth::Expand, 1.0));
    }

    #[test]
    fn no_room_to_shrink_saturates() {
        assert_eq!(axis_ratio(100, 99, 150, 1920), (Growth::Shrink, 1.0));
    }

    fn within(v: u8, stops: &ColorStops, pick: fn(&Rgb) -> u8) -> bool {
        let all = [stops.baseline, stops.expand, stops.shrink].map(|c| pick(&c));
        let (lo, hi) = (all.iter().min(), all.iter().max());
        matches!((lo, hi), (Some(&lo), Some(&hi)) if v >= lo && v <= hi)
    }

    proptest! {
        #[test]
        fn ratio_is_always_in_unit_range(
            initial in 0i32..4000,
            current in 0i32..4000,
            min in 0i32..500,
            max in 0i32..4000,
        ) {
            let (_, ratio) = axis_ratio(initial, current, min, max);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }

        #[test]
        fn channels_stay_between_configured_stops(
            iw in 150i32..1920, ih in 150i32..1040,
            cw in 150i32..1920, ch in 150i32..1040,
        ) {
            let color = preview_color(&STOPS, Size::new(iw, ih), Size::new(cw, ch), MAX);
            prop_assert!(within(color.r, &STOPS, |c| c.r));
            prop_assert!(within(color.g, &STOPS, |c| c.g));
            prop_assert!(within(color.b, &STOPS, |c| c.b));
        }

        #[test]
        fn single_axis_change_never_touches_other_stop(
            iw in 150i32..1920, cw in 150i32..1920, h in 150i32..1040,
        ) {
            // Only width grows or shrinks, so the blend is one axis color.
            let color = preview_color(&STOPS, Size::new(iw, h), Size::new(cw, h), MAX);
            let (growth, ratio) = axis_ratio(iw, cw, STOPS.min_extent, MAX.width);
            let target = match growth {
                Growth::Expand => STOPS.expand,
                Growth::Shrink => STOPS.shrink,
            };
            let expected = if ratio == 0.0 {
                STOPS.baseline
            } else {
                Channels::lerp(STOPS.baseline, target, ratio).to_rgb()
            };
            prop_assert_eq!(color, expected);
        }
    }
}
