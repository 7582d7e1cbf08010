//! Window eligibility rules.
//!
//! Two questions are answered here, both as pure functions over a
//! [`WindowInfo`] snapshot:
//!
//! - may this window be dragged (the session target)?
//! - may this window contribute snap edges (a sibling)?
//!
//! Class and title matching is case-insensitive. Class names must match
//! exactly; system titles must match the whole title so that ordinary
//! documents containing words like "Start" are not rejected.

use std::fmt;

use crate::config::FilterConfig;
use crate::window::WindowInfo;

/// Why a window was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Invisible,
    Minimized,
    ShellClass,
    ToolWindow,
    SystemDialog,
    Untitled,
    TooSmall,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Invisible => "invisible",
            Self::Minimized => "minimized",
            Self::ShellClass => "shell or system class",
            Self::ToolWindow => "tool window",
            Self::SystemDialog => "system dialog",
            Self::Untitled => "untitled",
            Self::TooSmall => "below minimum size",
        };
        f.write_str(text)
    }
}

/// Applies a [`FilterConfig`] to window snapshots.
#[derive(Debug, Clone, Copy)]
pub struct WindowFilter<'a> {
    config: &'a FilterConfig,
}

impl<'a> WindowFilter<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self { config }
    }

    /// Decides whether `info` may be the target of a drag session.
    ///
    /// The target must be a normal top-level window: visible, not
    /// minimized, not a shell/tray/desktop class, not a tool window and
    /// not a known system dialog. Maximized windows are eligible; the
    /// controller restores them before capturing geometry.
    pub fn check_target(&self, info: &WindowInfo) -> Result<(), Rejection> {
        if !info.visible {
            return Err(Rejection::Invisible);
        }
        if info.minimized {
            return Err(Rejection::Minimized);
        }
        self.check_kind(info)
    }

    /// Decides whether `info` contributes snap edges.
    ///
    /// Stricter than [`check_target`](Self::check_target): untitled and
    /// degenerate windows are also skipped, since they are usually
    /// invisible helpers that would produce phantom edges.
    pub fn check_edge_source(&self, info: &WindowInfo) -> Result<(), Rejection> {
        self.check_target(info)?;
        if info.title.trim().is_empty() {
            return Err(Rejection::Untitled);
        }
        if info.rect.width <= self.config.min_width || info.rect.height <= self.config.min_height {
            return Err(Rejection::TooSmall);
        }
        Ok(())
    }

    fn check_kind(&self, info: &WindowInfo) -> Result<(), Rejection> {
        if self
            .config
            .excluded_classes
            .iter()
            .any(|c| info.class.eq_ignore_ascii_case(c))
        {
            return Err(Rejection::ShellClass);
        }
        if info.tool_window {
            return Err(Rejection::ToolWindow);
        }
        let title = info.title.trim();
        if self
            .config
            .system_titles
            .iter()
            .any(|t| title.eq_ignore_ascii_case(t))
        {
            return Err(Rejection::SystemDialog);
        }
        Ok(())
    }
}
