/// Prints each monitor's index, bounds and work area.
#[cfg(windows)]
pub fn execute() {
    dragsnap_windows::daemon::enable_dpi_awareness();

    let monitors = match dragsnap_windows::enumerate_monitors() {
        Ok(monitors) => monitors,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for m in &monitors {
        let b = m.bounds;
        let w = m.work_area;
        println!(
            "#{}{}  bounds ({}, {}) {}x{}  work area ({}, {}) {}x{}",
            m.index,
            if m.primary { " (primary)" } else { "" },
            b.x,
            b.y,
            b.width,
            b.height,
            w.x,
            w.y,
            w.width,
            w.height
        );
    }
    println!("\n{} monitors found", monitors.len());
}

#[cfg(not(windows))]
pub fn execute() {
    crate::commands::windows_only("debug monitors");
}
