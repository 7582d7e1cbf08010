//! Section types for the dragsnap configuration.
//!
//! Each section deserializes independently with `#[serde(default)]`, so a
//! file that only sets `[snap] tolerance` keeps every other default.
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::{ColorStops, Rgb};
use crate::input::{Chord, ChordKind, Key, Modifier, MouseButton};
use crate::popup::{Preset, default_presets};

/// Per-operation enable switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    #[serde(rename = "move")]
    pub move_window: bool,
    pub resize_width: bool,
    pub resize_both: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            move_window: true,
            resize_width: true,
            resize_both: true,
        }
    }
}

impl FeatureConfig {
    pub fn enabled(&self, kind: ChordKind) -> bool {
        match kind {
            ChordKind::Move => self.move_window,
            ChordKind::ResizeWidth => self.resize_width,
            ChordKind::ResizeBoth => self.resize_both,
        }
    }
}

/// The chord that starts each operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordConfig {
    #[serde(rename = "move")]
    pub move_window: Chord,
    pub resize_width: Chord,
    pub resize_both: Chord,
}

impl Default for ChordConfig {
    fn default() -> Self {
        use Modifier::{Alt, Shift};
        Self {
            move_window: Chord::new(&[Alt], MouseButton::Left),
            resize_width: Chord::new(&[Alt, Shift], MouseButton::Right),
            resize_both: Chord::new(&[Alt], MouseButton::Right),
        }
    }
}

impl ChordConfig {
    pub fn chord(&self, kind: ChordKind) -> &Chord {
        match kind {
            ChordKind::Move => &self.move_window,
            ChordKind::ResizeWidth => &self.resize_width,
            ChordKind::ResizeBoth => &self.resize_both,
        }
    }
}

/// Auxiliary keys read while a chord is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// Held: constrain to the axis with the larger pointer delta.
    pub axis_lock: Key,
    /// Pressed: flip snapping on/off for the rest of the session.
    pub snap_toggle: Key,
    /// Pressed: summon the preset popup (move sessions).
    pub popup: Key,
    /// Held: snapping is off while down.
    pub snap_bypass: Key,
}

impl KeyConfig {
    /// Every auxiliary key with its config name.
    pub fn named(&self) -> [(&'static str, &Key); 4] {
        [
            ("axis_lock", &self.axis_lock),
            ("snap_toggle", &self.snap_toggle),
            ("popup", &self.popup),
            ("snap_bypass", &self.snap_bypass),
        ]
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            axis_lock: Key::Modifier(Modifier::Shift),
            snap_toggle: Key::Named("S".into()),
            popup: Key::Named("SPACE".into()),
            snap_bypass: Key::Modifier(Modifier::Ctrl),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Whether sessions start with snapping on.
    pub enabled: bool,
    /// Maximum distance in pixels at which an edge is pulled.
    pub tolerance: i32,
    /// Whether work-area edges are snap targets.
    pub screen_edges: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tolerance: 15,
            screen_edges: true,
        }
    }
}

/// Which windows may be dragged or contribute snap edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Window classes never touched (case-insensitive, exact).
    pub excluded_classes: Vec<String>,
    /// Whole window titles of system surfaces (case-insensitive).
    pub system_titles: Vec<String>,
    /// Edge sources must be wider than this.
    pub min_width: i32,
    /// Edge sources must be taller than this.
    pub min_height: i32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| (*s).to_owned()).collect();
        Self {
            excluded_classes: owned(&[
                "Shell_TrayWnd",
                "Shell_SecondaryTrayWnd",
                "Progman",
                "WorkerW",
                "NotifyIconOverflowWindow",
                "Windows.UI.Core.CoreWindow",
                "TopLevelWindowForOverflowXamlIsland",
                "XamlExplorerHostIslandWindow",
                "#32768",
                "tooltips_class32",
            ]),
            system_titles: owned(&[
                "Program Manager",
                "Start",
                "Search",
                "Task Switching",
                "Task View",
                "Notification Center",
                "Windows Input Experience",
            ]),
            min_width: 40,
            min_height: 40,
        }
    }
}

/// Status text and resize preview settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Milliseconds a status message stays up.
    pub status_timeout_ms: u64,
    /// Preview opacity in percent.
    pub preview_opacity: u8,
    /// Minimum width/height a resize may reach.
    pub min_extent: i32,
    /// Preview color for an unchanged size.
    pub baseline: String,
    /// Preview color at the maximum size.
    pub expand: String,
    /// Preview color at the minimum size.
    pub shrink: String,
}

pub(crate) const DEFAULT_BASELINE: Rgb = Rgb::new(0x3a, 0x86, 0xff);
pub(crate) const DEFAULT_EXPAND: Rgb = Rgb::new(0x2e, 0xc4, 0xb6);
pub(crate) const DEFAULT_SHRINK: Rgb = Rgb::new(0xff, 0x00, 0x6e);

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            status_timeout_ms: 1500,
            preview_opacity: 40,
            min_extent: 150,
            baseline: DEFAULT_BASELINE.to_string(),
            expand: DEFAULT_EXPAND.to_string(),
            shrink: DEFAULT_SHRINK.to_string(),
        }
    }
}

impl FeedbackConfig {
    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(self.status_timeout_ms)
    }

    /// Resolves the hex strings. Unparseable colors fall back to the
    /// built-in ones; `validate` has already warned about them.
    pub fn color_stops(&self) -> ColorStops {
        ColorStops {
            baseline: Rgb::from_hex(&self.baseline).unwrap_or(DEFAULT_BASELINE),
            expand: Rgb::from_hex(&self.expand).unwrap_or(DEFAULT_EXPAND),
            shrink: Rgb::from_hex(&self.shrink).unwrap_or(DEFAULT_SHRINK),
            min_extent: self.min_extent,
        }
    }
}

/// Preset popup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub columns: usize,
    pub cell_width: i32,
    pub cell_height: i32,
    pub presets: Vec<Preset>,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            cell_width: 110,
            cell_height: 44,
            presets: default_presets(),
        }
    }
}

/// Loop timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Session sampling interval in milliseconds.
    pub tick_ms: u64,
    /// Chord polling interval between sessions, in milliseconds.
    pub idle_poll_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            idle_poll_ms: 15,
        }
    }
}

impl EngineConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn idle_poll(&self) -> Duration {
        Duration::from_millis(self.idle_poll_ms)
    }
}
