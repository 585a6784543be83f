use crossterm::event::KeyCode;
use crossterm::style::Color;

/// Intensity used for live cells
pub const LIVE: u8 = 2;
/// Intensity used for tracked dead cells
pub const BORDER: u8 = 0;
/// Intensity used for the status line
pub const STATUS: u8 = 1;

/// Map a shifted digit to its colour scheme.
/// Returns `None` for keys that do not select a scheme.
pub fn scheme_for_key(code: KeyCode) -> Option<u8> {
    match code {
        KeyCode::Char('!') => Some(1), // Shift+1: fire
        KeyCode::Char('@') => Some(2), // Shift+2: ice
        KeyCode::Char('#') => Some(3), // Shift+3: pink
        KeyCode::Char('$') => Some(4), // Shift+4: gold
        KeyCode::Char('%') => Some(5), // Shift+5: electric
        KeyCode::Char('^') => Some(6), // Shift+6: lava
        KeyCode::Char('&') => Some(7), // Shift+7: mono
        KeyCode::Char('*') => Some(8), // Shift+8: rainbow
        KeyCode::Char('(') => Some(9), // Shift+9: neon
        KeyCode::Char(')') => Some(0), // Shift+0: green
        _ => None,
    }
}

/// Get color from scheme based on intensity (0-3)
pub fn scheme_color(scheme: u8, intensity: u8, bold: bool) -> (Color, bool) {
    match scheme {
        1 => match intensity {  // Red/Yellow (fire)
            0 => (Color::DarkRed, false),
            1 => (Color::Red, false),
            2 => (Color::DarkYellow, bold),
            _ => (Color::Yellow, true),
        },
        2 => match intensity {  // Blue/Cyan (ice)
            0 => (Color::DarkBlue, false),
            1 => (Color::Blue, false),
            2 => (Color::Cyan, bold),
            _ => (Color::Cyan, true),
        },
        3 => match intensity {  // Magenta/Pink (pink)
            0 => (Color::DarkMagenta, false),
            1 => (Color::Magenta, false),
            2 => (Color::Magenta, bold),
            _ => (Color::AnsiValue(13), true),
        },
        4 => match intensity {  // Yellow/Gold (gold)
            0 => (Color::DarkYellow, false),
            1 => (Color::Yellow, false),
            2 => (Color::Yellow, bold),
            _ => (Color::AnsiValue(11), true),
        },
        5 => match intensity {  // Cyan/Electric (electric)
            0 => (Color::DarkCyan, false),
            1 => (Color::Cyan, false),
            2 => (Color::Cyan, bold),
            _ => (Color::AnsiValue(14), true),
        },
        6 => match intensity {  // Red/Magenta (lava)
            0 => (Color::DarkRed, false),
            1 => (Color::Red, false),
            2 => (Color::Magenta, bold),
            _ => (Color::AnsiValue(9), true),
        },
        7 => match intensity {  // White/Grey (mono)
            0 => (Color::DarkGrey, false),
            1 => (Color::Grey, false),
            2 => (Color::White, bold),
            _ => (Color::White, true),
        },
        8 => match intensity {  // Rainbow
            0 => (Color::Red, false),
            1 => (Color::Yellow, false),
            2 => (Color::Green, bold),
            _ => (Color::Cyan, true),
        },
        9 => match intensity {  // Blue/Magenta (neon)
            0 => (Color::DarkBlue, false),
            1 => (Color::Blue, false),
            2 => (Color::Magenta, bold),
            _ => (Color::AnsiValue(13), true),
        },
        _ => match intensity {  // Default: green
            0 => (Color::DarkGreen, false),
            1 => (Color::Green, false),
            2 => (Color::Green, true),
            _ => (Color::AnsiValue(10), true),
        },
    }
}
