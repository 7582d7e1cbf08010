use dragsnap_core::Key;
use dragsnap_core::input::{Modifier, MouseButton};

/// Virtual key codes that count as "down" for `key`.
///
/// The Win modifier has no combined code, so either Windows key counts.
/// Unknown named keys map to nothing and are never reported down.
pub fn vk_codes(key: &Key) -> Vec<u32> {
    match key {
        Key::Modifier(Modifier::Alt) => vec![0x12],   // VK_MENU
        Key::Modifier(Modifier::Shift) => vec![0x10], // VK_SHIFT
        Key::Modifier(Modifier::Ctrl) => vec![0x11],  // VK_CONTROL
        Key::Modifier(Modifier::Win) => vec![0x5B, 0x5C],
        Key::Mouse(MouseButton::Left) => vec![0x01],
        Key::Mouse(MouseButton::Right) => vec![0x02],
        Key::Mouse(MouseButton::Middle) => vec![0x04],
        Key::Named(name) => vk_from_name(name).into_iter().collect(),
    }
}

/// Converts a key name string to a Windows virtual key code.
///
/// Supports letters (A–Z), digits (0–9), function keys (F1–F12),
/// and common named keys (Enter, Space, Tab, etc.).
/// Matching is case-insensitive.
pub fn vk_from_name(name: &str) -> Option<u32> {
    let upper = name.to_ascii_uppercase();

    // Single letter or digit
    if upper.len() == 1 {
        let ch = upper.as_bytes()[0];
        if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
            return Some(u32::from(ch));
        }
    }

    // Function keys F1–F12
    if let Some(rest) = upper.strip_prefix('F')
        && let Ok(n) = rest.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(0x70 + n - 1); // VK_F1 = 0x70
    }

    match upper.as_str() {
        "ENTER" | "RETURN" => Some(0x0D),
        "TAB" => Some(0x09),
        "ESCAPE" | "ESC" => Some(0x1B),
        "SPACE" => Some(0x20),
        "BACKSPACE" => Some(0x08),
        "CAPSLOCK" => Some(0x14),
        "LEFT" => Some(0x25),
        "UP" => Some(0x26),
        "RIGHT" => Some(0x27),
        "DOWN" => Some(0x28),
        "XBUTTON1" => Some(0x05),
        "XBUTTON2" => Some(0x06),
        "BACKTICK" | "GRAVE" => Some(0xC0),
        _ => None,
    }
}
