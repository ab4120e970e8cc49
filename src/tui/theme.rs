use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub amber: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub blue: Color,
    pub banner_bg: Color,
    pub banner_fg: Color,
    /// Per-status colors
    pub status_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut status_colors = HashMap::new();
        status_colors.insert("action-needed".into(), Color::Rgb(0xFF, 0x44, 0x44));
        status_colors.insert("overdue".into(), Color::Rgb(0xFF, 0x44, 0x44));
        status_colors.insert("in-progress".into(), Color::Rgb(0x44, 0xFF, 0x88));
        status_colors.insert("starred".into(), Color::Rgb(0xFF, 0xD7, 0x00));
        status_colors.insert("scheduled".into(), Color::Rgb(0x44, 0x88, 0xFF));
        status_colors.insert("waiting".into(), Color::Rgb(0xFF, 0xD7, 0x00));
        status_colors.insert("replied".into(), Color::Rgb(0x44, 0xDD, 0xFF));
        status_colors.insert("new".into(), Color::Rgb(0xCC, 0x66, 0xFF));
        status_colors.insert("planning".into(), Color::Rgb(0xCC, 0x66, 0xFF));
        status_colors.insert("completed".into(), Color::Rgb(0x7D, 0x78, 0xBF));

        Theme {
            background: Color::Rgb(0x0A, 0x0E, 0x14),
            text: Color::Rgb(0xC8, 0xD0, 0xDC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x1D, 0x9B, 0xF0),
            dim: Color::Rgb(0x6A, 0x73, 0x82),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            amber: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            purple: Color::Rgb(0xCC, 0x66, 0xFF),
            blue: Color::Rgb(0x44, 0x88, 0xFF),
            banner_bg: Color::Rgb(0x4A, 0x30, 0x00),
            banner_fg: Color::Rgb(0xFF, 0xD7, 0x00),
            status_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from deck UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "amber" => theme.amber = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "purple" => theme.purple = color,
                    "blue" => theme.blue = color,
                    "banner_bg" => theme.banner_bg = color,
                    "banner_fg" => theme.banner_fg = color,
                    _ => {}
                }
            }
        }

        // Apply status color overrides from [ui.status_colors]
        for (status, value) in &ui.status_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.status_colors.insert(status.clone(), color);
            }
        }

        theme
    }

    /// Get the color for an item status, falling back to text color
    pub fn status_color(&self, status: &str) -> Color {
        self.status_colors.get(status).copied().unwrap_or(self.text)
    }

    /// Color of a job status badge
    pub fn badge_color(&self, badge: crate::model::JobBadge) -> Color {
        use crate::model::JobBadge;
        match badge {
            JobBadge::Disabled => self.dim,
            JobBadge::Error(_) => self.red,
            JobBadge::Ok => self.green,
            JobBadge::Scheduled => self.blue,
        }
    }
}
