use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file path; logging is off when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while no animation is running
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the status line under the content
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Columns per tab stop when expanding tabs in content
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_status_bar: default_true(),
            tab_width: default_tab_width(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve applied to animated scrolls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    /// Ease-out cubic
    #[default]
    Cubic,
    /// Ease-out quintic
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scroll commands that are defined as smooth
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one animated scroll in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name ("gruvbox-dark" or "gruvbox-light")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a table with `name` and `colors`
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Content background
    pub bg: Option<String>,
    /// Content foreground for unstyled text
    pub fg: Option<String>,
    /// Status bar background
    pub status_bg: Option<String>,
    /// Status bar foreground
    pub status_fg: Option<String>,
    /// Dimmed text (hints, position)
    pub dim: Option<String>,
    /// Accent color (help border, animation marker)
    pub accent: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-d>" (Ctrl+d), "G" (Shift+g), "<Space>", "<PageDown>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_line_down")]
    pub line_down: String,
    #[serde(default = "default_key_line_up")]
    pub line_up: String,
    #[serde(default = "default_key_page_down")]
    pub page_down: String,
    /// Animated half page down
    #[serde(default = "default_key_smooth_half_page_down")]
    pub smooth_half_page_down: String,
    /// Animated half page up
    #[serde(default = "default_key_smooth_half_page_up")]
    pub smooth_half_page_up: String,
    #[serde(default = "default_key_full_page_down")]
    pub full_page_down: String,
    #[serde(default = "default_key_full_page_up")]
    pub full_page_up: String,
    #[serde(default = "default_key_half_page_down")]
    pub half_page_down: String,
    #[serde(default = "default_key_half_page_up")]
    pub half_page_up: String,
    #[serde(default = "default_key_jump_to_start")]
    pub jump_to_start: String,
    #[serde(default = "default_key_jump_to_end")]
    pub jump_to_end: String,
    #[serde(default = "default_key_scroll_left")]
    pub scroll_left: String,
    #[serde(default = "default_key_scroll_right")]
    pub scroll_right: String,
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            line_down: default_key_line_down(),
            line_up: default_key_line_up(),
            page_down: default_key_page_down(),
            smooth_half_page_down: default_key_smooth_half_page_down(),
            smooth_half_page_up: default_key_smooth_half_page_up(),
            full_page_down: default_key_full_page_down(),
            full_page_up: default_key_full_page_up(),
            half_page_down: default_key_half_page_down(),
            half_page_up: default_key_half_page_up(),
            jump_to_start: default_key_jump_to_start(),
            jump_to_end: default_key_jump_to_end(),
            scroll_left: default_key_scroll_left(),
            scroll_right: default_key_scroll_right(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_line_down() -> String { "j".to_string() }
fn default_key_line_up() -> String { "k".to_string() }
fn default_key_page_down() -> String { "<Space>".to_string() }
fn default_key_smooth_half_page_down() -> String { "<C-d>".to_string() }
fn default_key_smooth_half_page_up() -> String { "<C-u>".to_string() }
fn default_key_full_page_down() -> String { "f".to_string() }
fn default_key_full_page_up() -> String { "b".to_string() }
fn default_key_half_page_down() -> String { "d".to_string() }
fn default_key_half_page_up() -> String { "u".to_string() }
fn default_key_jump_to_start() -> String { "g".to_string() }
fn default_key_jump_to_end() -> String { "G".to_string() }
fn default_key_scroll_left() -> String { "h".to_string() }
fn default_key_scroll_right() -> String { "l".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_tab_width() -> usize {
    8
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let path = expand_tilde(path);
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/glide/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("glide")
            .join("config.toml")
    }

    /// Log file path with tilde expansion, if logging is configured
    pub fn log_file(&self) -> Option<PathBuf> {
        self.general.log_file.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert!(config.general.log_file.is_none());
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.show_status_bar);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert!(config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.animation_duration_ms, 150);
        assert_eq!(config.ui.scroll.easing, EasingType::Cubic);
        assert_eq!(config.ui.scroll.animation_fps, 60);
        assert_eq!(config.keymap.smooth_half_page_down, "<C-d>");
        assert_eq!(config.keymap.jump_to_end, "G");
    }

    #[test]
    fn test_parse_partial_config() {
        let config = AppConfig::parse(
            r#"
            [ui]
            tick_rate_ms = 50

            [ui.scroll]
            easing = "quintic"
            animation_duration_ms = 300

            [keymap]
            quit = "<Esc>"
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.tick_rate_ms, 50);
        assert!(config.ui.show_status_bar);
        assert_eq!(config.ui.scroll.easing, EasingType::Quintic);
        assert_eq!(config.ui.scroll.animation_duration_ms, 300);
        assert_eq!(config.ui.scroll.animation_fps, 60);
        assert_eq!(config.keymap.quit, "<Esc>");
        assert_eq!(config.keymap.line_down, "j");
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config = AppConfig::parse("[ui]\ntheme = \"gruvbox-light\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "gruvbox-light");
        assert!(config.ui.theme.colors.bg.is_none());

        let config = AppConfig::parse(
            "[ui.theme]\nname = \"gruvbox-dark\"\n\n[ui.theme.colors]\naccent = \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let result = AppConfig::parse("[ui]\ntick_rate_ms = \"fast\"\n");
        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[general]\nlog_level = \"debug\"\nlog_file = \"/tmp/glide.log\"").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.log_file(), Some(PathBuf::from("/tmp/glide.log")));
    }
}
