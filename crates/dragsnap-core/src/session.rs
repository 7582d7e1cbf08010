//! Drag session controller.
//!
//! One chord press runs one session to completion on the calling thread:
//!
//! 1. Refuse if the operation is disabled or another session is live.
//! 2. Resolve and validate the window under the pointer. Nothing visible
//!    is created for an ineligible target.
//! 3. Claim the process-wide [`SessionSlot`], restore a maximized target,
//!    then capture the initial geometry, monitor and grab point.
//! 4. Sample input every tick while the chord is held: naive rect from
//!    the pointer delta, then snapping, then work-area clamping, then
//!    feedback. The window, preview and status are only touched when the
//!    result changes.
//! 5. On release, tear down the preview and popup, resolve a popup
//!    selection if one was summoned, and commit.
//!
//! Every visual artifact and the slot itself are owned by RAII values on
//! this stack frame, so they are released on every exit path, including
//! a panic unwinding through the loop.

use std::fmt;

use tracing::{debug, info, warn};

use crate::clock::{Clock, Ticker};
use crate::color::preview_color;
use crate::config::Config;
use crate::edges::{EdgeCandidate, EdgeKind, build_edge_list};
use crate::feedback::{StatusText, StatusUpdate};
use crate::filter::{Rejection, WindowFilter};
use crate::guard::{ACTIVE_SESSION, ActiveSession, SessionSlot, SlotGuard};
use crate::input::{ChordKind, Input, Key, KeyLatch};
use crate::monitor::{self, Monitor, clamp_to_work_area, trim_to_work_area};
use crate::platform::{Desktop, Feedback, Platform, Preview};
use crate::popup::{Preset, PopupLayout};
use crate::snap::{self, SnapMode, SnapRequest, SnapResult};
use crate::window::{Window, WindowInfo};
use crate::{Point, Rect, Size};

/// How a chord press ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The operation is switched off in the config.
    Disabled,
    /// Another session was already live; the press was dropped.
    Busy,
    /// No window under the pointer.
    NoTarget,
    /// The window under the pointer may not be dragged.
    Ineligible(Rejection),
    /// A platform query failed before the session could start, or the
    /// final positioning call failed on a live window.
    Aborted(String),
    /// The freeform result was applied.
    Committed(Rect),
    /// A popup preset was applied instead of the freeform result.
    PresetApplied { label: String, rect: Rect },
    /// The target was destroyed during the session; nothing was applied.
    TargetLost,
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::Busy => f.write_str("busy"),
            Self::NoTarget => f.write_str("no target"),
            Self::Ineligible(reason) => write!(f, "ineligible target ({reason})"),
            Self::Aborted(message) => write!(f, "aborted: {message}"),
            Self::Committed(r) => write!(f, "committed {}x{} at ({}, {})", r.width, r.height, r.x, r.y),
            Self::PresetApplied { label, .. } => write!(f, "applied preset {label:?}"),
            Self::TargetLost => f.write_str("target lost"),
        }
    }
}

/// Why [`resolve_target`] found nothing to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    NoWindow,
    Ineligible(Rejection),
}

/// Resolves the window under `point` and checks that it may be acted on.
///
/// Shared by the drag chords and by any collaborator that needs the same
/// "window under pointer" semantics.
pub fn resolve_target<D: Desktop + ?Sized>(
    desktop: &D,
    filter: &WindowFilter<'_>,
    point: Point,
) -> Result<(D::Window, WindowInfo), TargetError> {
    let window = desktop.window_at(point).ok_or(TargetError::NoWindow)?;
    let info = WindowInfo::capture(&window).map_err(|e| {
        debug!("window under pointer unreadable: {e}");
        TargetError::NoWindow
    })?;
    filter
        .check_target(&info)
        .map_err(TargetError::Ineligible)?;
    Ok((window, info))
}

/// Which edges a resize moves, picked from where the window was grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grab {
    horizontal: Option<EdgeKind>,
    vertical: Option<EdgeKind>,
}

impl Grab {
    fn at(rect: &Rect, pointer: Point, kind: ChordKind) -> Self {
        let nearest = |offset: i32, extent: i32| {
            if offset * 2 < extent {
                EdgeKind::Near
            } else {
                EdgeKind::Far
            }
        };
        let horizontal = nearest(pointer.x - rect.x, rect.width);
        let vertical = nearest(pointer.y - rect.y, rect.height);
        match kind {
            ChordKind::Move => Self {
                horizontal: None,
                vertical: None,
            },
            ChordKind::ResizeWidth => Self {
                horizontal: Some(horizontal),
                vertical: None,
            },
            ChordKind::ResizeBoth => Self {
                horizontal: Some(horizontal),
                vertical: Some(vertical),
            },
        }
    }
}

/// State of the one live session.
struct DragSession<'s, W> {
    kind: ChordKind,
    window: W,
    label: String,
    /// Captured once, after any restore; never mutated.
    initial: Rect,
    /// `None` when no monitor could be resolved; clamping is skipped.
    initial_monitor: Option<Monitor>,
    start_cursor: Point,
    /// Pointer position relative to the window origin at press.
    pointer_offset: Point,
    grab: Grab,
    snap_enabled: bool,
    /// Frozen sibling edges; empty for resize sessions.
    edges: Vec<EdgeCandidate>,
    /// Resize ceiling: the initial monitor's work area.
    max_extents: Size,
    /// Last rect applied (move) or previewed (resize).
    last_applied: Rect,
    status: StatusText,
    _slot: SlotGuard<'s>,
}

/// The rect and status text computed for one tick.
struct Frame {
    rect: Rect,
    description: Option<String>,
}

/// A visible popup and where it was summoned.
struct SummonedPopup<H> {
    layout: PopupLayout,
    work_area: Rect,
    _handle: H,
}

/// Clears the status text when the session ends, however it ends.
struct StatusGuard<'a, F: Feedback + ?Sized>(&'a F);

impl<F: Feedback + ?Sized> Drop for StatusGuard<'_, F> {
    fn drop(&mut self) {
        self.0.clear_status();
    }
}

/// Runs drag sessions against a platform.
pub struct SessionController<'a, P: Platform, C: Clock + ?Sized> {
    platform: &'a P,
    clock: &'a C,
    config: &'a Config,
    slot: &'a SessionSlot,
}

impl<'a, P: Platform, C: Clock + ?Sized> SessionController<'a, P, C> {
    /// A controller bound to the process-wide [`ACTIVE_SESSION`] slot.
    pub fn new(platform: &'a P, clock: &'a C, config: &'a Config) -> Self {
        Self {
            platform,
            clock,
            config,
            slot: &ACTIVE_SESSION,
        }
    }

    /// Uses `slot` instead of the process-wide one.
    pub fn with_slot(mut self, slot: &'a SessionSlot) -> Self {
        self.slot = slot;
        self
    }

    /// Handles a chord press, blocking until the chord is released.
    pub fn on_chord(&self, kind: ChordKind) -> SessionOutcome {
        let outcome = self.run(kind);
        match &outcome {
            SessionOutcome::Committed(_) | SessionOutcome::PresetApplied { .. } => {
                info!("{kind}: {outcome}");
            }
            SessionOutcome::Aborted(_) | SessionOutcome::TargetLost => {
                warn!("{kind}: {outcome}");
            }
            _ => debug!("{kind}: {outcome}"),
        }
        outcome
    }

    fn run(&self, kind: ChordKind) -> SessionOutcome {
        if !self.config.features.enabled(kind) {
            return SessionOutcome::Disabled;
        }
        if self.slot.is_busy() {
            return SessionOutcome::Busy;
        }

        let cursor = match self.platform.cursor() {
            Ok(p) => p,
            Err(e) => return SessionOutcome::Aborted(e.to_string()),
        };
        let filter = WindowFilter::new(&self.config.filter);
        let (window, info) = match resolve_target(self.platform, &filter, cursor) {
            Ok(target) => target,
            Err(TargetError::NoWindow) => return SessionOutcome::NoTarget,
            Err(TargetError::Ineligible(reason)) => return SessionOutcome::Ineligible(reason),
        };

        let Some(slot) = self.slot.try_begin(ActiveSession {
            kind,
            window: info.handle,
        }) else {
            if let Some(active) = self.slot.current() {
                debug!("{} session on 0x{:X} is live", active.kind, active.window);
            }
            return SessionOutcome::Busy;
        };

        match self.start(kind, window, &info, cursor, &filter, slot) {
            Ok(session) => self.drive(session),
            Err(e) => SessionOutcome::Aborted(e.to_string()),
        }
    }

    fn start<'s>(
        &self,
        kind: ChordKind,
        window: P::Window,
        info: &WindowInfo,
        cursor: Point,
        filter: &WindowFilter<'_>,
        slot: SlotGuard<'s>,
    ) -> crate::error::Result<DragSession<'s, P::Window>> {
        if info.maximized {
            debug!("restoring maximized window 0x{:X}", info.handle);
            window.restore()?;
        }
        let initial = window.rect()?;
        let monitors = self.platform.monitors().unwrap_or_else(|e| {
            warn!("{e}; continuing without work-area bounds");
            Vec::new()
        });
        let initial_monitor = monitor::resolve_for_rect(&monitors, &initial).copied();
        if initial_monitor.is_none() {
            warn!("no monitor for 0x{:X}; continuing without work-area bounds", info.handle);
        }

        let edges = if kind.is_resize() {
            Vec::new()
        } else {
            build_edge_list(&self.platform.windows(), info.handle, filter)
        };

        info!(
            "{kind} started on {:?} at ({}, {}) {}x{}",
            info.label(),
            initial.x,
            initial.y,
            initial.width,
            initial.height
        );

        Ok(DragSession {
            kind,
            window,
            label: info.label().to_owned(),
            initial,
            initial_monitor,
            start_cursor: cursor,
            pointer_offset: Point::new(cursor.x - initial.x, cursor.y - initial.y),
            grab: Grab::at(&initial, cursor, kind),
            snap_enabled: self.config.snap.enabled,
            edges,
            max_extents: initial_monitor.map_or(initial.size(), |m| m.work_area.size()),
            last_applied: initial,
            status: StatusText::new(self.config.feedback.status_timeout()),
            _slot: slot,
        })
    }

    fn drive(&self, mut session: DragSession<'_, P::Window>) -> SessionOutcome {
        let keys = &self.config.keys;
        let chord = self.config.chords.chord(session.kind);
        let stops = self.config.feedback.color_stops();

        let _status = StatusGuard(self.platform);
        let mut snap_latch = KeyLatch::primed(self.platform, &keys.snap_toggle);
        let mut popup_latch = KeyLatch::primed(self.platform, &keys.popup);
        let mut preview = if session.kind.is_resize() {
            self.platform
                .create_preview(self.config.feedback.preview_opacity)
                .inspect_err(|e| warn!("no resize preview: {e}"))
                .ok()
        } else {
            None
        };
        let mut popup: Option<SummonedPopup<P::Popup>> = None;
        let mut popup_used = false;
        let mut cursor = session.start_cursor;
        let mut ticker = Ticker::new(self.clock, self.config.engine.tick());

        while chord.is_held(self.platform) {
            if let Ok(p) = self.platform.cursor() {
                cursor = p;
            }
            let now = self.clock.now();

            if snap_latch.pressed(self.platform, &keys.snap_toggle) {
                session.snap_enabled = !session.snap_enabled;
                let text = if session.snap_enabled {
                    "Snapping on"
                } else {
                    "Snapping off"
                };
                debug!("{text}");
                self.render_status(session.status.flash(text, now));
            }

            if session.kind == ChordKind::Move
                && !popup_used
                && popup_latch.pressed(self.platform, &keys.popup)
            {
                popup_used = true;
                popup = self.summon_popup(cursor);
            }

            // While the popup is up the pointer is choosing a preset, so
            // the window stays where it was.
            if popup.is_none() {
                let frame = self.step(&session, cursor);
                if frame.rect != session.last_applied {
                    self.apply(&mut session, preview.as_mut(), frame.rect, &stops);
                }
                let update = session.status.update(frame.description.as_deref(), now);
                self.render_status(update);
            }

            ticker.wait();
        }

        drop(preview);
        let release = self.platform.cursor().unwrap_or(cursor);

        if let Some(SummonedPopup {
            layout,
            work_area,
            _handle: handle,
        }) = popup.take()
        {
            drop(handle);
            if let Some(preset) = layout.hit_test(release) {
                return self.apply_preset(&session, preset, &work_area);
            }
            debug!("popup released outside any preset");
        }

        let rect = session.last_applied;
        self.commit(&session, rect)
    }

    /// Computes this tick's candidate rect.
    fn step(&self, session: &DragSession<'_, P::Window>, cursor: Point) -> Frame {
        let keys = &self.config.keys;
        let chord = self.config.chords.chord(session.kind);
        // A key that is part of the chord is down for the whole session,
        // so it cannot also act as an auxiliary key.
        let aux_down = |key: &Key| !chord.contains(key) && self.platform.is_down(key);

        let (mut dx, mut dy) = (cursor.x - session.start_cursor.x, cursor.y - session.start_cursor.y);
        let locked = aux_down(&keys.axis_lock);
        if locked {
            if dx.abs() >= dy.abs() {
                dy = 0;
            } else {
                dx = 0;
            }
        }
        let snap_active = session.snap_enabled && !aux_down(&keys.snap_bypass);

        match session.kind {
            ChordKind::Move => {
                let pointer = Point::new(session.start_cursor.x + dx, session.start_cursor.y + dy);
                let naive = Rect::new(
                    pointer.x - session.pointer_offset.x,
                    pointer.y - session.pointer_offset.y,
                    session.initial.width,
                    session.initial.height,
                );
                let work_area = self.work_area_for(session, &naive);
                let mut snapped = if snap_active {
                    snap::resolve(&SnapRequest {
                        proposed: naive,
                        siblings: &session.edges,
                        screen: work_area.as_ref().filter(|_| self.config.snap.screen_edges),
                        tolerance: self.config.snap.tolerance,
                        mode: SnapMode::Move,
                    })
                } else {
                    SnapResult::unsnapped(naive)
                };
                if locked {
                    // Snapping must not move the locked axis either.
                    if dy == 0 {
                        snapped.rect.y = naive.y;
                        snapped.vertical = None;
                    } else {
                        snapped.rect.x = naive.x;
                        snapped.horizontal = None;
                    }
                }
                Frame {
                    rect: work_area.map_or(snapped.rect, |wa| clamp_to_work_area(&snapped.rect, &wa)),
                    description: snapped.description(),
                }
            }
            ChordKind::ResizeWidth | ChordKind::ResizeBoth => {
                let init = session.initial;
                // A window already below the minimum may not shrink further,
                // but is never grown to reach it.
                let min_width = self.config.feedback.min_extent.min(init.width);
                let min_height = self.config.feedback.min_extent.min(init.height);
                let (mut left, mut top, mut right, mut bottom) =
                    (init.x, init.y, init.right(), init.bottom());
                match session.grab.horizontal {
                    Some(EdgeKind::Near) => left = (init.x + dx).min(right - min_width),
                    Some(EdgeKind::Far) => right = (init.right() + dx).max(left + min_width),
                    None => {}
                }
                match session.grab.vertical {
                    Some(EdgeKind::Near) => top = (init.y + dy).min(bottom - min_height),
                    Some(EdgeKind::Far) => bottom = (init.bottom() + dy).max(top + min_height),
                    None => {}
                }
                let candidate = Rect::from_edges(left, top, right, bottom);
                let work_area = self.work_area_for(session, &candidate);

                let screen = work_area.as_ref().filter(|_| self.config.snap.screen_edges);
                let mut snapped = if snap_active && screen.is_some() {
                    snap::resolve(&SnapRequest {
                        proposed: candidate,
                        siblings: &[],
                        screen,
                        tolerance: self.config.snap.tolerance,
                        mode: SnapMode::Resize {
                            horizontal: session.grab.horizontal,
                            vertical: session.grab.vertical,
                        },
                    })
                } else {
                    SnapResult::unsnapped(candidate)
                };
                if snapped.rect.width < min_width.min(candidate.width)
                    || snapped.rect.height < min_height.min(candidate.height)
                {
                    snapped = SnapResult::unsnapped(candidate);
                }
                Frame {
                    rect: work_area.map_or(snapped.rect, |wa| trim_to_work_area(&snapped.rect, &wa)),
                    description: snapped.description(),
                }
            }
        }
    }

    /// Work area of the monitor owning `rect`, queried fresh, falling
    /// back to the one the session started on.
    fn work_area_for(&self, session: &DragSession<'_, P::Window>, rect: &Rect) -> Option<Rect> {
        let monitors = self.platform.monitors().unwrap_or_default();
        monitor::resolve_for_rect(&monitors, rect)
            .or(session.initial_monitor.as_ref())
            .map(|m| m.work_area)
    }

    fn apply(
        &self,
        session: &mut DragSession<'_, P::Window>,
        preview: Option<&mut P::Preview>,
        rect: Rect,
        stops: &crate::color::ColorStops,
    ) {
        match session.kind {
            ChordKind::Move => {
                if let Err(e) = session.window.set_rect(&rect) {
                    debug!("live move of {:?} failed: {e}", session.label);
                }
            }
            ChordKind::ResizeWidth | ChordKind::ResizeBoth => {
                if let Some(preview) = preview {
                    let color = preview_color(stops, session.initial.size(), rect.size(), session.max_extents);
                    if let Err(e) = preview.show(&rect, color) {
                        debug!("preview update failed: {e}");
                    }
                }
            }
        }
        session.last_applied = rect;
    }

    fn render_status(&self, update: StatusUpdate) {
        match update {
            StatusUpdate::Show(text) => self.platform.show_status(&text),
            StatusUpdate::Clear => self.platform.clear_status(),
            StatusUpdate::Unchanged => {}
        }
    }

    fn summon_popup(&self, cursor: Point) -> Option<SummonedPopup<P::Popup>> {
        let monitors = self
            .platform
            .monitors()
            .inspect_err(|e| warn!("popup: {e}"))
            .ok()?;
        let work_area = monitor::resolve_for_point(&monitors, cursor)?.work_area;
        let cfg = &self.config.popup;
        let layout = PopupLayout::new(
            &cfg.presets,
            cfg.columns,
            cfg.cell_width,
            cfg.cell_height,
            cursor,
            &work_area,
        );
        match self.platform.create_popup(&layout) {
            Ok(handle) => {
                debug!("popup summoned with {} presets", layout.cells.len());
                Some(SummonedPopup {
                    layout,
                    work_area,
                    _handle: handle,
                })
            }
            Err(e) => {
                warn!("popup: {e}");
                None
            }
        }
    }

    fn apply_preset(
        &self,
        session: &DragSession<'_, P::Window>,
        preset: &Preset,
        work_area: &Rect,
    ) -> SessionOutcome {
        match self.commit(session, preset.rect_in(work_area)) {
            SessionOutcome::Committed(rect) => SessionOutcome::PresetApplied {
                label: preset.label.clone(),
                rect,
            },
            other => other,
        }
    }

    fn commit(&self, session: &DragSession<'_, P::Window>, rect: Rect) -> SessionOutcome {
        if !session.window.is_alive() {
            return SessionOutcome::TargetLost;
        }
        match session.window.set_rect(&rect) {
            Ok(()) => SessionOutcome::Committed(rect),
            Err(_) if !session.window.is_alive() => SessionOutcome::TargetLost,
            Err(e) => SessionOutcome::Aborted(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
