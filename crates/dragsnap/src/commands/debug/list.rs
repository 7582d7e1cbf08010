/// Prints every top-level window with the filter's verdict.
///
/// `target` says whether a drag may start on the window, `edges` whether
/// it contributes snap edges to other windows' move sessions.
#[cfg(windows)]
pub fn execute() {
    use dragsnap_core::filter::WindowFilter;
    use dragsnap_core::{Window, WindowInfo};

    use super::super::run::load_config;

    let config = load_config();
    let filter = WindowFilter::new(&config.filter);
    let windows = dragsnap_windows::enumerate_windows();

    println!(
        "{:<12} {:<28} {:<28} {:>11} {:>11}  {:<22} EDGES",
        "HWND", "TITLE", "CLASS", "POSITION", "SIZE", "TARGET"
    );

    let mut shown = 0;
    for window in &windows {
        if !window.is_visible() {
            continue;
        }
        let Ok(info) = WindowInfo::capture(window) else {
            continue;
        };
        let verdict = |r: Result<(), _>| match r {
            Ok(()) => "yes".to_string(),
            Err(reason) => format!("no ({reason})"),
        };

        println!(
            "{:<12} {:<28} {:<28} {:>11} {:>11}  {:<22} {}",
            format!("0x{:X}", info.handle),
            truncate(&info.title, 28),
            truncate(&info.class, 28),
            format!("{},{}", info.rect.x, info.rect.y),
            format!("{}x{}", info.rect.width, info.rect.height),
            verdict(filter.check_target(&info)),
            verdict(filter.check_edge_source(&info)),
        );
        shown += 1;
    }

    println!("\n{shown} visible windows found");
}

#[cfg(not(windows))]
pub fn execute() {
    crate::commands::windows_only("debug list");
}

#[cfg(windows)]
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}
