use std::panic::{AssertUnwindSafe, catch_unwind};

use super::*;
use crate::color::ColorStops;
use crate::fake::{FakeDesktop, FakeWindow, InputFrame, monitor, single_monitor};
use crate::input::{Chord, Key, Modifier};

const EDITOR: usize = 0x20;
const DRAGGED: usize = 0x10;

fn dragged() -> FakeWindow {
    FakeWindow::new(DRAGGED, "Notes", Rect::new(100, 100, 800, 600))
}

fn chord(config: &Config, kind: ChordKind) -> Chord {
    config.chords.chord(kind).clone()
}

/// Pointer path with the chord held throughout.
fn drag(chord: &Chord, path: &[(i32, i32)]) -> Vec<InputFrame> {
    path.iter()
        .map(|&(x, y)| InputFrame::hold(chord, x, y))
        .collect()
}

fn run(desktop: &FakeDesktop, config: &Config, kind: ChordKind) -> SessionOutcome {
    let slot = SessionSlot::new();
    SessionController::new(desktop, desktop, config)
        .with_slot(&slot)
        .on_chord(kind)
}

fn assert_no_artifacts(desktop: &FakeDesktop) {
    assert_eq!(desktop.previews.live.get(), 0, "preview left behind");
    assert_eq!(desktop.popups.live.get(), 0, "popup left behind");
    assert_eq!(
        desktop.status.borrow().last(),
        Some(&None),
        "status not cleared"
    );
}

// ── Move ─────────────────────────────────────────────────────────

#[test]
fn move_follows_pointer_and_commits() {
    // Arrange
    let config = Config::default();
    let frames = drag(
        &chord(&config, ChordKind::Move),
        &[(200, 150), (300, 250), (400, 250)],
    );
    let window = dragged();
    let desktop = FakeDesktop::new(single_monitor(), vec![window.clone()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    let expected = Rect::new(300, 200, 800, 600);
    assert_eq!(outcome, SessionOutcome::Committed(expected));
    assert_eq!(window.state().rect, expected);
    assert_eq!(
        window.state().moves,
        vec![Rect::new(200, 200, 800, 600), expected, expected],
        "live moves only on change, then the commit"
    );
    assert_eq!(desktop.previews.created.get(), 0);
    assert_no_artifacts(&desktop);
}

#[test]
fn sibling_edge_pulls_dragged_window() {
    // Arrange: proposed left edge 895, sibling left edge 900
    let mut config = Config::default();
    config.snap.tolerance = 10;
    let frames = drag(
        &chord(&config, ChordKind::Move),
        &[(150, 150), (500, 150), (945, 150)],
    );
    let editor = FakeWindow::new(EDITOR, "Editor", Rect::new(900, 100, 400, 600));
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged(), editor], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(900, 100, 800, 600))
    );
    assert_eq!(
        desktop.shown_status().last().map(String::as_str),
        Some("left → Editor left, top → Editor top")
    );
}

#[test]
fn status_is_only_sent_when_description_changes() {
    // Arrange: three ticks with the same vertical match
    let config = Config::default();
    let frames = drag(
        &chord(&config, ChordKind::Move),
        &[(150, 150), (160, 150), (170, 150), (180, 150)],
    );
    let editor = FakeWindow::new(EDITOR, "Editor", Rect::new(1500, 100, 400, 600));
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged(), editor], frames);

    // Act
    run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(desktop.shown_status(), vec!["top → Editor top".to_string()]);
}

#[test]
fn move_past_work_area_is_clamped() {
    // Arrange
    let config = Config::default();
    let frames = drag(&chord(&config, ChordKind::Move), &[(200, 150), (200, 1150)]);
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(100, 440, 800, 600))
    );
}

#[test]
fn move_onto_second_monitor_clamps_to_its_work_area() {
    // Arrange
    let config = Config::default();
    let monitors = vec![
        monitor(0, Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040)),
        monitor(
            1,
            Rect::new(1920, 0, 2560, 1440),
            Rect::new(1920, 0, 2560, 1400),
        ),
    ];
    let frames = drag(&chord(&config, ChordKind::Move), &[(200, 150), (2400, 1100)]);
    let desktop = FakeDesktop::new(monitors, vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert: naive (2300, 1050) overlaps the second display only
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(2300, 800, 800, 600))
    );
}

#[test]
fn maximized_target_is_restored_before_geometry_is_captured() {
    // Arrange
    let config = Config::default();
    let window = FakeWindow::new(DRAGGED, "Notes", Rect::new(200, 200, 800, 600))
        .maximized(Rect::new(0, 0, 1920, 1040));
    let frames = drag(&chord(&config, ChordKind::Move), &[(400, 300), (500, 300)]);
    let desktop = FakeDesktop::new(single_monitor(), vec![window.clone()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(300, 200, 800, 600))
    );
    assert_eq!(window.state().restores, 1);
    assert!(!window.state().maximized);
}

#[test]
fn axis_lock_keeps_the_minor_axis_fixed() {
    // Arrange
    let config = Config::default();
    let move_chord = chord(&config, ChordKind::Move);
    let frames = vec![
        InputFrame::hold(&move_chord, 200, 150),
        InputFrame::hold(&move_chord, 300, 180).with_modifier(Modifier::Shift),
    ];
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(200, 100, 800, 600))
    );
}

#[test]
fn snap_toggle_disables_snapping_from_next_tick() {
    // Arrange
    let mut config = Config::default();
    config.snap.tolerance = 10;
    let move_chord = chord(&config, ChordKind::Move);
    let frames = vec![
        InputFrame::hold(&move_chord, 150, 150),
        InputFrame::hold(&move_chord, 150, 150).with(Key::Named("S".into())),
        InputFrame::hold(&move_chord, 945, 150),
    ];
    let editor = FakeWindow::new(EDITOR, "Editor", Rect::new(900, 300, 400, 600));
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged(), editor], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(895, 100, 800, 600))
    );
    assert!(desktop.shown_status().contains(&"Snapping off".to_string()));
}

#[test]
fn snap_bypass_only_applies_while_held() {
    // Arrange
    let mut config = Config::default();
    config.snap.tolerance = 10;
    let move_chord = chord(&config, ChordKind::Move);
    let editor = || FakeWindow::new(EDITOR, "Editor", Rect::new(900, 300, 400, 600));
    let held = vec![
        InputFrame::hold(&move_chord, 150, 150),
        InputFrame::hold(&move_chord, 945, 150).with_modifier(Modifier::Ctrl),
    ];
    let released = vec![
        InputFrame::hold(&move_chord, 150, 150),
        InputFrame::hold(&move_chord, 945, 150).with_modifier(Modifier::Ctrl),
        InputFrame::hold(&move_chord, 945, 150),
    ];
    let bypassed = FakeDesktop::new(single_monitor(), vec![dragged(), editor()], held);
    let restored = FakeDesktop::new(single_monitor(), vec![dragged(), editor()], released);

    // Act
    let a = run(&bypassed, &config, ChordKind::Move);
    let b = run(&restored, &config, ChordKind::Move);

    // Assert
    assert_eq!(a, SessionOutcome::Committed(Rect::new(895, 100, 800, 600)));
    assert_eq!(b, SessionOutcome::Committed(Rect::new(900, 100, 800, 600)));
}

// ── Resize ───────────────────────────────────────────────────────

#[test]
fn resize_previews_then_commits_once() {
    // Arrange: grabbed in the bottom-right quadrant
    let config = Config::default();
    let frames = drag(
        &chord(&config, ChordKind::ResizeBoth),
        &[(800, 600), (850, 620), (900, 650)],
    );
    let window = dragged();
    let desktop = FakeDesktop::new(single_monitor(), vec![window.clone()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::ResizeBoth);

    // Assert
    let expected = Rect::new(100, 100, 900, 650);
    assert_eq!(outcome, SessionOutcome::Committed(expected));
    assert_eq!(window.state().moves, vec![expected], "window only moves at commit");
    assert_eq!(desktop.previews.created.get(), 1);
    let shown = desktop.preview_frames.borrow();
    assert_eq!(shown.last().map(|(r, _)| *r), Some(expected));
    assert_ne!(shown.last().map(|(_, c)| *c), Some(config.feedback.color_stops().baseline));
    assert_no_artifacts(&desktop);
}

#[test]
fn resize_from_top_left_respects_min_extent() {
    // Arrange
    let config = Config::default();
    let frames = drag(
        &chord(&config, ChordKind::ResizeBoth),
        &[(110, 110), (1110, 1000)],
    );
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::ResizeBoth);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(750, 550, 150, 150))
    );
}

#[test]
fn width_resize_leaves_height_alone() {
    // Arrange
    let config = Config::default();
    let frames = drag(
        &chord(&config, ChordKind::ResizeWidth),
        &[(800, 600), (900, 700)],
    );
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::ResizeWidth);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(100, 100, 900, 600))
    );
}

#[test]
fn width_chord_modifier_does_not_lock_an_axis() {
    // Arrange: Shift is both part of the chord and the axis-lock key
    let config = Config::default();
    let frames = drag(
        &chord(&config, ChordKind::ResizeWidth),
        &[(800, 400), (850, 550)],
    );
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::ResizeWidth);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(100, 100, 850, 600))
    );
}

#[test]
fn window_below_min_extent_is_not_grown() {
    // Arrange: 100x80 is under the 150px floor; the second frame pushes inward
    let config = Config::default();
    let initial = Rect::new(300, 300, 100, 80);
    let window = FakeWindow::new(0x50, "Sticky", initial);
    let frames = drag(
        &chord(&config, ChordKind::ResizeBoth),
        &[(390, 370), (390, 370), (350, 340)],
    );
    let desktop = FakeDesktop::new(single_monitor(), vec![window.clone()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::ResizeBoth);

    // Assert
    assert_eq!(outcome, SessionOutcome::Committed(initial));
    assert_eq!(window.state().moves, vec![initial]);
    assert!(desktop.preview_frames.borrow().is_empty());
}

#[test]
fn resize_snaps_moving_edge_to_work_area() {
    // Arrange: right edge dragged to 1910, 10px from the screen edge
    let config = Config::default();
    let frames = drag(
        &chord(&config, ChordKind::ResizeWidth),
        &[(800, 400), (1810, 400)],
    );
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::ResizeWidth);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(100, 100, 1820, 600))
    );
}

#[test]
fn preview_color_matches_stops_at_max() {
    // Arrange
    let stops: ColorStops = Config::default().feedback.color_stops();

    // Act
    let color = preview_color(
        &stops,
        Size::new(800, 600),
        Size::new(1920, 1040),
        Size::new(1920, 1040),
    );

    // Assert
    assert_eq!(color, stops.expand);
}

// ── Popup ────────────────────────────────────────────────────────

#[test]
fn popup_release_over_cell_applies_preset() {
    // Arrange
    let config = Config::default();
    let move_chord = chord(&config, ChordKind::Move);
    let work_area = Rect::new(0, 0, 1920, 1040);
    let summon_at = Point::new(960, 500);
    let layout = PopupLayout::new(
        &config.popup.presets,
        config.popup.columns,
        config.popup.cell_width,
        config.popup.cell_height,
        summon_at,
        &work_area,
    );
    let left_half = layout.cells[0].rect;
    let frames = vec![
        InputFrame::hold(&move_chord, 200, 150),
        InputFrame::hold(&move_chord, 960, 500).with(Key::Named("SPACE".into())),
        InputFrame::hold(&move_chord, left_half.center_x(), left_half.center_y()),
    ];
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::PresetApplied {
            label: "Left 1/2".into(),
            rect: Rect::new(0, 0, 960, 1040),
        }
    );
    assert_eq!(desktop.popups.created.get(), 1);
    assert_eq!(desktop.popup_layouts.borrow()[0], layout);
    assert_no_artifacts(&desktop);
}

#[test]
fn popup_miss_applies_freeform_result() {
    // Arrange
    let config = Config::default();
    let move_chord = chord(&config, ChordKind::Move);
    let frames = vec![
        InputFrame::hold(&move_chord, 200, 150),
        InputFrame::hold(&move_chord, 300, 150),
        InputFrame::hold(&move_chord, 300, 150).with(Key::Named("SPACE".into())),
        InputFrame::hold(&move_chord, 10, 10),
    ];
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert: the window froze where it was when the popup appeared
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(200, 100, 800, 600))
    );
    assert_no_artifacts(&desktop);
}

#[test]
fn popup_is_summoned_at_most_once() {
    // Arrange
    let config = Config::default();
    let move_chord = chord(&config, ChordKind::Move);
    let space = Key::Named("SPACE".into());
    let frames = vec![
        InputFrame::hold(&move_chord, 200, 150),
        InputFrame::hold(&move_chord, 200, 150).with(space.clone()),
        InputFrame::hold(&move_chord, 200, 150),
        InputFrame::hold(&move_chord, 200, 150).with(space),
    ];
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(desktop.popups.created.get(), 1);
}

#[test]
fn popup_key_is_ignored_during_resize() {
    // Arrange
    let config = Config::default();
    let frames = vec![
        InputFrame::hold(&chord(&config, ChordKind::ResizeBoth), 800, 600),
        InputFrame::hold(&chord(&config, ChordKind::ResizeBoth), 800, 600)
            .with(Key::Named("SPACE".into())),
    ];
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    run(&desktop, &config, ChordKind::ResizeBoth);

    // Assert
    assert_eq!(desktop.popups.created.get(), 0);
}

// ── Refusals ─────────────────────────────────────────────────────

#[test]
fn busy_slot_refuses_without_artifacts() {
    // Arrange
    let config = Config::default();
    let frames = drag(&chord(&config, ChordKind::ResizeBoth), &[(800, 600)]);
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);
    let slot = SessionSlot::new();
    let _first = slot.try_begin(ActiveSession {
        kind: ChordKind::Move,
        window: EDITOR,
    });

    // Act
    let outcome = SessionController::new(&desktop, &desktop, &config)
        .with_slot(&slot)
        .on_chord(ChordKind::ResizeBoth);

    // Assert
    assert_eq!(outcome, SessionOutcome::Busy);
    assert_eq!(desktop.previews.created.get(), 0);
    assert!(desktop.status.borrow().is_empty());
}

#[test]
fn disabled_operation_is_a_silent_no_op() {
    // Arrange
    let mut config = Config::default();
    config.features.resize_width = false;
    let frames = drag(&chord(&config, ChordKind::ResizeWidth), &[(800, 600)]);
    let window = dragged();
    let desktop = FakeDesktop::new(single_monitor(), vec![window.clone()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::ResizeWidth);

    // Assert
    assert_eq!(outcome, SessionOutcome::Disabled);
    assert!(window.state().moves.is_empty());
    assert_eq!(desktop.previews.created.get(), 0);
}

#[test]
fn shell_window_is_ineligible() {
    // Arrange
    let config = Config::default();
    let taskbar = FakeWindow::new(0x30, "", Rect::new(0, 1040, 1920, 40)).with_class("Shell_TrayWnd");
    let frames = drag(&chord(&config, ChordKind::ResizeBoth), &[(500, 1060)]);
    let desktop = FakeDesktop::new(single_monitor(), vec![taskbar], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::ResizeBoth);

    // Assert
    assert_eq!(outcome, SessionOutcome::Ineligible(Rejection::ShellClass));
    assert_eq!(desktop.previews.created.get(), 0);
}

#[test]
fn missing_monitors_skip_clamping_instead_of_aborting() {
    // Arrange
    let config = Config::default();
    let frames = drag(&chord(&config, ChordKind::Move), &[(200, 150), (200, 1150)]);
    let desktop = FakeDesktop::new(Vec::new(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(100, 1100, 800, 600))
    );
    assert_no_artifacts(&desktop);
}

#[test]
fn empty_desktop_has_no_target() {
    // Arrange
    let config = Config::default();
    let frames = drag(&chord(&config, ChordKind::Move), &[(1500, 900)]);
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(outcome, SessionOutcome::NoTarget);
}

#[test]
fn resolve_target_reports_rejection() {
    // Arrange
    let config = Config::default();
    let filter = WindowFilter::new(&config.filter);
    let tool = FakeWindow::new(0x40, "Palette", Rect::new(0, 0, 300, 300));
    tool.0.borrow_mut().tool_window = true;
    let desktop = FakeDesktop::new(single_monitor(), vec![tool], Vec::new());

    // Act
    let result = resolve_target(&desktop, &filter, Point::new(10, 10));

    // Assert
    assert!(matches!(
        result,
        Err(TargetError::Ineligible(Rejection::ToolWindow))
    ));
}

// ── Teardown ─────────────────────────────────────────────────────

#[test]
fn lost_target_skips_commit_and_cleans_up() {
    // Arrange
    let config = Config::default();
    let resize = chord(&config, ChordKind::ResizeBoth);
    let frames = vec![
        InputFrame::hold(&resize, 800, 600),
        InputFrame::hold(&resize, 850, 650),
        InputFrame::hold(&resize, 900, 700).killing(DRAGGED),
    ];
    let window = dragged();
    let desktop = FakeDesktop::new(single_monitor(), vec![window.clone()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::ResizeBoth);

    // Assert
    assert_eq!(outcome, SessionOutcome::TargetLost);
    assert!(window.state().moves.is_empty());
    assert_no_artifacts(&desktop);
}

#[test]
fn panic_mid_session_releases_everything() {
    // Arrange
    let config = Config::default();
    let resize = chord(&config, ChordKind::ResizeBoth);
    let frames = drag(&resize, &[(800, 600), (850, 650), (900, 700), (950, 750)]);
    let desktop =
        FakeDesktop::new(single_monitor(), vec![dragged()], frames).panicking_at(2);
    let slot = SessionSlot::new();

    // Act
    let result = catch_unwind(AssertUnwindSafe(|| {
        SessionController::new(&desktop, &desktop, &config)
            .with_slot(&slot)
            .on_chord(ChordKind::ResizeBoth)
    }));

    // Assert
    assert!(result.is_err());
    assert_eq!(desktop.frame_index(), 2);
    assert!(!slot.is_busy());
    assert_no_artifacts(&desktop);
}

#[test]
fn lost_target_with_popup_up_cleans_up() {
    // Arrange
    let config = Config::default();
    let move_chord = chord(&config, ChordKind::Move);
    let frames = vec![
        InputFrame::hold(&move_chord, 200, 150),
        InputFrame::hold(&move_chord, 960, 500).with(Key::Named("SPACE".into())),
        InputFrame::hold(&move_chord, 960, 500).killing(DRAGGED),
    ];
    let window = dragged();
    let desktop = FakeDesktop::new(single_monitor(), vec![window.clone()], frames);
    let slot = SessionSlot::new();

    // Act
    let outcome = SessionController::new(&desktop, &desktop, &config)
        .with_slot(&slot)
        .on_chord(ChordKind::Move);

    // Assert
    assert_eq!(outcome, SessionOutcome::TargetLost);
    assert_eq!(desktop.popups.created.get(), 1);
    assert!(window.state().moves.is_empty());
    assert!(!slot.is_busy());
    assert_no_artifacts(&desktop);
}

#[test]
fn panic_with_popup_up_releases_everything() {
    // Arrange
    let config = Config::default();
    let move_chord = chord(&config, ChordKind::Move);
    let frames = vec![
        InputFrame::hold(&move_chord, 200, 150),
        InputFrame::hold(&move_chord, 960, 500).with(Key::Named("SPACE".into())),
        InputFrame::hold(&move_chord, 960, 500),
        InputFrame::hold(&move_chord, 960, 500),
    ];
    let desktop =
        FakeDesktop::new(single_monitor(), vec![dragged()], frames).panicking_at(2);
    let slot = SessionSlot::new();

    // Act
    let result = catch_unwind(AssertUnwindSafe(|| {
        SessionController::new(&desktop, &desktop, &config)
            .with_slot(&slot)
            .on_chord(ChordKind::Move)
    }));

    // Assert
    assert!(result.is_err());
    assert_eq!(desktop.popups.created.get(), 1);
    assert!(!slot.is_busy());
    assert_no_artifacts(&desktop);
}

#[test]
fn slot_is_free_after_every_session() {
    // Arrange
    let config = Config::default();
    let frames = drag(&chord(&config, ChordKind::Move), &[(200, 150), (250, 150)]);
    let desktop = FakeDesktop::new(single_monitor(), vec![dragged()], frames);
    let slot = SessionSlot::new();
    let controller = SessionController::new(&desktop, &desktop, &config).with_slot(&slot);

    // Act
    controller.on_chord(ChordKind::Move);

    // Assert
    assert!(!slot.is_busy());
}

#[test]
fn idle_frame_ends_session_immediately() {
    // Arrange: chord already released by the first tick
    let config = Config::default();
    let move_chord = chord(&config, ChordKind::Move);
    let frames = vec![
        InputFrame::hold(&move_chord, 200, 150),
        InputFrame::idle(400, 150),
    ];
    let window = dragged();
    let desktop = FakeDesktop::new(single_monitor(), vec![window.clone()], frames);

    // Act
    let outcome = run(&desktop, &config, ChordKind::Move);

    // Assert
    assert_eq!(
        outcome,
        SessionOutcome::Committed(Rect::new(100, 100, 800, 600))
    );
}
