use clap::Args;

/// Arguments for the `debug move` subcommand.
#[derive(Args)]
#[cfg_attr(not(windows), allow(dead_code))]
pub struct MoveArgs {
    /// Window handle (decimal or hex with 0x prefix)
    #[arg(long)]
    hwnd: String,
    /// X position in pixels
    #[arg(long)]
    x: i32,
    /// Y position in pixels
    #[arg(long)]
    y: i32,
    /// Width in pixels
    #[arg(long, name = "width")]
    w: i32,
    /// Height in pixels
    #[arg(long, name = "height")]
    h: i32,
}

/// Positions a window the same way a committed session does.
#[cfg(windows)]
pub fn execute(args: &MoveArgs) {
    use dragsnap_core::{Rect, Window};

    dragsnap_windows::daemon::enable_dpi_awareness();

    let Some(handle) = parse_hwnd(&args.hwnd) else {
        eprintln!("Error: invalid window handle {:?}", args.hwnd);
        std::process::exit(1);
    };
    let window = dragsnap_windows::Win32Window::from_raw(handle);
    let target = Rect::new(args.x, args.y, args.w, args.h);

    println!(
        "Moving window 0x{handle:X} to ({}, {}) {}x{}",
        target.x, target.y, target.width, target.height
    );

    match window.set_rect(&target) {
        Ok(()) => println!("Done."),
        Err(e) => {
            eprintln!("Failed to move window: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
pub fn execute(_args: &MoveArgs) {
    crate::commands::windows_only("debug move");
}

/// Parses a window handle from a string (supports decimal and 0x hex).
#[cfg_attr(not(windows), allow(dead_code))]
fn parse_hwnd(s: &str) -> Option<usize> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_decimal_handles() {
        // Assert
        assert_eq!(parse_hwnd("0x1A2B"), Some(0x1A2B));
        assert_eq!(parse_hwnd("0XFF"), Some(0xFF));
        assert_eq!(parse_hwnd("4096"), Some(4096));
        assert_eq!(parse_hwnd("0xZZ"), None);
        assert_eq!(parse_hwnd(""), None);
    }
}
