//! Sidebar and content colours, configurable from settings.

use crate::kernel::services::ports::ThemeSettings;
use crate::models::Level;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub accent_fg: Color,
    pub header_fg: Color,
    pub separator: Color,
    pub text_fg: Color,
    pub muted_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub beginner_fg: Color,
    pub intermediate_fg: Color,
    pub advanced_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("CRICKET_GUIDE_COLOR_SUPPORT") {
        if let Some(support) = parse_color_support(&value) {
            return support;
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor")
        || colorterm.contains("24bit")
        || colorterm.contains("direct")
        || term.contains("truecolor")
        || term.contains("24bit")
        || term.contains("direct")
    {
        return TerminalColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }

    TerminalColorSupport::Ansi16
}

fn parse_color_support(value: &str) -> Option<TerminalColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(TerminalColorSupport::TrueColor),
        "256" | "ansi256" => Some(TerminalColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(TerminalColorSupport::Ansi16),
        _ => None,
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            accent_fg: Color::Rgb(0x3B, 0x82, 0xF6),
            header_fg: Color::Indexed(15),  // White
            separator: Color::Indexed(8),   // DarkGray
            text_fg: Color::Indexed(7),     // Gray
            muted_fg: Color::Indexed(8),    // DarkGray
            selected_bg: Color::Rgb(0x1E, 0x3A, 0x8A),
            selected_fg: Color::Indexed(15),
            beginner_fg: Color::Indexed(2),     // Green
            intermediate_fg: Color::Indexed(3), // Yellow
            advanced_fg: Color::Indexed(1),     // Red
        }
    }
}

impl UiTheme {
    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }

        for slot in self.slots_mut() {
            *slot = map_color_for_support(*slot, support);
        }
    }

    fn slots_mut(&mut self) -> [&mut Color; 10] {
        [
            &mut self.accent_fg,
            &mut self.header_fg,
            &mut self.separator,
            &mut self.text_fg,
            &mut self.muted_fg,
            &mut self.selected_bg,
            &mut self.selected_fg,
            &mut self.beginner_fg,
            &mut self.intermediate_fg,
            &mut self.advanced_fg,
        ]
    }

    /// Unparseable values are ignored and the current colour is kept.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let values = [
            &settings.accent_fg,
            &settings.header_fg,
            &settings.separator,
            &settings.text_fg,
            &settings.muted_fg,
            &settings.selected_bg,
            &settings.selected_fg,
            &settings.beginner_fg,
            &settings.intermediate_fg,
            &settings.advanced_fg,
        ];
        for (slot, value) in self.slots_mut().into_iter().zip(values) {
            let Some(raw) = value else {
                continue;
            };
            match parse_color(raw) {
                Some(color) => *slot = color,
                None => tracing::warn!(value = %raw, "ignoring unknown theme colour"),
            }
        }
    }

    pub fn level_fg(&self, level: Level) -> Color {
        match level {
            Level::Beginner => self.beginner_fg,
            Level::Intermediate => self.intermediate_fg,
            Level::Advanced => self.advanced_fg,
        }
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (_, Color::Reset) => Color::Reset,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi256, Color::Indexed(i)) => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i <= 15 => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, named) => named,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for index in 0u16..=255u16 {
        let index_u8 = index as u8;
        let (pr, pg, pb) = ansi256_index_to_rgb(index_u8);
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index_u8;
        }
    }

    best_index
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    let mut best_index = 0u8;
    let mut best_distance = u32::MAX;

    for (index, (pr, pg, pb)) in ANSI16_RGB.iter().copied().enumerate() {
        let distance = color_distance_sq(r, g, b, pr, pg, pb);
        if distance < best_distance {
            best_distance = distance;
            best_index = index as u8;
        }
    }

    best_index
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> u32 {
    let dr = i32::from(r1) - i32::from(r2);
    let dg = i32::from(g1) - i32::from(g2);
    let db = i32::from(b1) - i32::from(b2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}
