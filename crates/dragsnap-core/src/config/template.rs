/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `dragsnap init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# dragsnap configuration
# Location: ~/.config/dragsnap/config.toml

# Turn individual operations on or off.
[features]
move = true
resize_width = true
resize_both = true

# Chords: modifiers ("alt", "shift", "ctrl", "win") plus a mouse button
# ("left", "right", "middle"). Hold the chord to drag; release to commit.
[chords.move]
modifiers = ["alt"]
button = "left"

[chords.resize_width]
modifiers = ["alt", "shift"]
button = "right"

[chords.resize_both]
modifiers = ["alt"]
button = "right"

# Keys read while a chord is held. Use a modifier name, "lbutton",
# "rbutton", "mbutton", or a key name such as "S", "Space", "F1".
[keys]
# Hold to constrain the drag to its dominant axis.
axis_lock = "shift"
# Press to turn snapping off (or back on) for the current drag.
snap_toggle = "S"
# Press during a move to show the placement popup; release over a cell.
popup = "SPACE"
# Hold to ignore snapping temporarily.
snap_bypass = "ctrl"

[snap]
# Whether drags start with snapping on.
enabled = true
# Distance in pixels at which an edge is pulled onto another.
tolerance = 15
# Snap to the edges of the monitor work area as well as other windows.
screen_edges = true

[filter]
# Window classes that are never dragged and never snapped to.
excluded_classes = [
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
]
# Exact window titles of system surfaces to ignore.
system_titles = [
    "Program Manager",
    "Start",
    "Search",
    "Task Switching",
    "Task View",
    "Notification Center",
    "Windows Input Experience",
]
# Windows this small or smaller contribute no snap edges.
min_width = 40
min_height = 40

[feedback]
# Milliseconds a snap message stays on screen.
status_timeout_ms = 1500
# Resize preview opacity in percent.
preview_opacity = 40
# Smallest width or height a resize can reach.
min_extent = 150
# Preview colors: unchanged size, grown to the work area, shrunk to min.
baseline = "#3a86ff"
expand = "#2ec4b6"
shrink = "#ff006e"

[popup]
columns = 3
cell_width = 110
cell_height = 44
# Presets are fractions of the work area. Defining any replaces the
# built-in 3x3 grid.
# [[popup.presets]]
# label = "Left 2/3"
# x = 0.0
# y = 0.0
# width = 0.6667
# height = 1.0

[engine]
# Sampling interval during a drag, in milliseconds.
tick_ms = 10
# Chord polling interval while idle, in milliseconds.
idle_poll_ms = 15

[logging]
# Enable file logging to ~/.config/dragsnap/logs/dragsnap.log.
enabled = false
# Minimum log level: "trace", "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
