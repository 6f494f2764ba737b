use glide_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

/// Runtime theme with configurable colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub dim: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        gruvbox_dark()
    }
}

fn gruvbox_dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x28, 0x28),
        fg: Color::Rgb(0xd4, 0xbe, 0x98),
        status_bg: Color::Rgb(0x45, 0x40, 0x3d),
        status_fg: Color::Rgb(0xdd, 0xc7, 0xa1),
        dim: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
    }
}

fn gruvbox_light() -> Theme {
    Theme {
        bg: Color::Rgb(0xfb, 0xf1, 0xc7),
        fg: Color::Rgb(0x65, 0x47, 0x35),
        status_bg: Color::Rgb(0xeb, 0xdb, 0xb2),
        status_fg: Color::Rgb(0x4f, 0x38, 0x29),
        dim: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x4c, 0x7a, 0x5d),
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config and apply color overrides
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" => gruvbox_dark(),
        "gruvbox-light" => gruvbox_light(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox_dark()
        }
    };
    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color, &str); 6] = [
        (&overrides.bg, &mut theme.bg, "bg"),
        (&overrides.fg, &mut theme.fg, "fg"),
        (&overrides.status_bg, &mut theme.status_bg, "status_bg"),
        (&overrides.status_fg, &mut theme.status_fg, "status_fg"),
        (&overrides.dim, &mut theme.dim, "dim"),
        (&overrides.accent, &mut theme.accent, "accent"),
    ];

    for (value, slot, name) in slots {
        if let Some(hex) = value {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Invalid color '{}' for theme.colors.{}, ignoring", hex, name),
            }
        }
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn test_load_known_and_unknown_themes() {
        let light = ThemeConfig {
            name: "Gruvbox-Light".to_string(),
            ..Default::default()
        };
        assert_eq!(load_theme(&light), gruvbox_light());

        let unknown = ThemeConfig {
            name: "nope".to_string(),
            ..Default::default()
        };
        assert_eq!(load_theme(&unknown), Theme::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = ThemeConfig {
            name: "gruvbox-dark".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#010203".to_string()),
                bg: Some("not a color".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.accent, Color::Rgb(1, 2, 3));
        assert_eq!(theme.bg, gruvbox_dark().bg);
    }
}
