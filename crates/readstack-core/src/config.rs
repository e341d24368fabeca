use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Path to a JSON file with the book collection (optional; sample shelf otherwise)
    #[serde(default)]
    pub library_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            library_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show book author in shelf rows
    #[serde(default = "default_true")]
    pub show_author: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Scroll behavior
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Collapsing header behavior
    #[serde(default)]
    pub header: HeaderConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_author: default_true(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
            header: HeaderConfig::default(),
        }
    }
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable momentum scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Lines added per wheel/key step when smooth scrolling is disabled
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Easing applied to momentum decay
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            scroll_lines: default_scroll_lines(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Collapsing header configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Depth convention rendered once the header collapses
    #[serde(default)]
    pub depth: DepthMode,
    /// Entrance fade duration in milliseconds
    #[serde(default = "default_entrance_duration")]
    pub entrance_duration_ms: u64,
    /// Easing applied to the entrance fade
    #[serde(default = "default_entrance_easing")]
    pub entrance_easing: EasingType,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            depth: DepthMode::default(),
            entrance_duration_ms: default_entrance_duration(),
            entrance_easing: default_entrance_easing(),
        }
    }
}

/// Which of the two depth conventions the header emits when collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DepthMode {
    /// Shadow opacity ramp (rendered as a faded edge row)
    #[default]
    Shadow,
    /// Integer elevation ramp (rendered as a heavier edge)
    Elevation,
}

/// Easing function selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump at the end, no easing
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
    Smoothstep,
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
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

// Custom deserializer to accept either a string or a struct
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

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (theme name) or a map with 'name' and optional 'colors'")
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
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
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

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (header surface)
    pub bg1: Option<String>,
    /// Tertiary background (selection, search pill)
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (slightly dimmer)
    pub fg1: Option<String>,
    /// Accent color
    pub accent: Option<String>,
    /// Selection background
    pub selection: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Success color
    pub success: Option<String>,
    /// Warning color
    pub warning: Option<String>,
    /// Info color
    pub info: Option<String>,
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_scroll_lines() -> u16 {
    3
}

fn default_animation_fps() -> u32 {
    60
}

fn default_entrance_duration() -> u64 {
    300
}

fn default_entrance_easing() -> EasingType {
    EasingType::Smoothstep
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/readstack/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("readstack")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.ui.header.entrance_duration_ms, 300);
        assert_eq!(config.ui.header.depth, DepthMode::Shadow);
        assert!(config.ui.scroll.smooth_enabled);
    }

    #[test]
    fn test_theme_as_string() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "nord"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_as_table_with_overrides() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui.theme]
            name = "gruvbox-light"
            colors = { accent = "#ff8800" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "gruvbox-light");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff8800"));
    }

    #[test]
    fn test_header_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui.header]
            depth = "elevation"
            entrance_duration_ms = 450
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.header.depth, DepthMode::Elevation);
        assert_eq!(config.ui.header.entrance_duration_ms, 450);
        // Untouched fields keep defaults
        assert_eq!(config.ui.header.entrance_easing, EasingType::Smoothstep);
    }
}
