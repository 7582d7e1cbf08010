mod loader;
pub mod template;
mod types;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::input::ChordKind;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, load_from, try_load};
pub use types::{
    ChordConfig, EngineConfig, FeatureConfig, FeedbackConfig, FilterConfig, KeyConfig,
    PopupConfig, SnapConfig,
};

/// Top-level configuration for dragsnap.
///
/// Loaded from `~/.config/dragsnap/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which operations respond to their chord.
    pub features: FeatureConfig,
    /// Chord per operation.
    pub chords: ChordConfig,
    /// Auxiliary keys read during a session.
    pub keys: KeyConfig,
    pub snap: SnapConfig,
    pub filter: FilterConfig,
    pub feedback: FeedbackConfig,
    pub popup: PopupConfig,
    pub engine: EngineConfig,
    pub logging: LogConfig,
}

impl Config {
    /// Clamps values to safe ranges and repairs invalid entries.
    ///
    /// Prevents zero-length ticks that would spin the CPU, snap tolerances
    /// large enough to grab every edge on screen, and unparseable colors.
    pub fn validate(&mut self) {
        self.snap.tolerance = self.snap.tolerance.clamp(0, 100);

        self.filter.min_width = self.filter.min_width.clamp(0, 1000);
        self.filter.min_height = self.filter.min_height.clamp(0, 1000);

        let fb = &mut self.feedback;
        fb.status_timeout_ms = fb.status_timeout_ms.min(10_000);
        fb.preview_opacity = fb.preview_opacity.clamp(5, 100);
        fb.min_extent = fb.min_extent.clamp(20, 2000);
        let defaults = FeedbackConfig::default();
        for (name, value, fallback) in [
            ("baseline", &mut fb.baseline, defaults.baseline),
            ("expand", &mut fb.expand, defaults.expand),
            ("shrink", &mut fb.shrink, defaults.shrink),
        ] {
            if crate::color::Rgb::from_hex(value).is_none() {
                warn!("feedback.{name}: invalid color {value:?}, using {fallback}");
                *value = fallback;
            }
        }

        let popup = &mut self.popup;
        popup.columns = popup.columns.clamp(1, 9);
        popup.cell_width = popup.cell_width.clamp(40, 400);
        popup.cell_height = popup.cell_height.clamp(20, 200);
        popup.presets.retain_mut(|p| {
            let ok = p.normalize();
            if !ok {
                warn!("popup preset {:?} is empty, dropping it", p.label);
            }
            ok
        });
        if popup.presets.is_empty() {
            popup.presets = crate::popup::default_presets();
        }

        self.engine.tick_ms = self.engine.tick_ms.clamp(1, 100);
        self.engine.idle_poll_ms = self.engine.idle_poll_ms.clamp(1, 500);

        for (kind, name) in self.chord_conflicts() {
            info!(
                "keys.{name} is part of the {kind} chord ({}); ignored during {kind} sessions",
                self.chords.chord(kind)
            );
        }
    }

    /// Auxiliary keys that are also a component of some chord.
    ///
    /// Such a key is held for the whole session of that chord, so the
    /// session ignores it rather than treating it as pressed.
    pub fn chord_conflicts(&self) -> Vec<(ChordKind, &'static str)> {
        ChordKind::ALL
            .into_iter()
            .filter(|kind| self.features.enabled(*kind))
            .flat_map(move |kind| {
                let chord = self.chords.chord(kind);
                self.keys
                    .named()
                    .into_iter()
                    .filter(move |(_, key)| chord.contains(key))
                    .map(move |(name, _)| (kind, name))
            })
            .collect()
    }
}
