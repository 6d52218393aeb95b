use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Named easing curves available without supplying a custom function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInOutCubic,
    EaseOutCubic,
    EaseOutQuint,
    EaseOutExpo,
    EaseInOutExpo,
}

impl EasingType {
    pub const ALL: [EasingType; 9] = [
        EasingType::Linear,
        EasingType::EaseInQuad,
        EasingType::EaseOutQuad,
        EasingType::EaseInOutQuad,
        EasingType::EaseInOutCubic,
        EasingType::EaseOutCubic,
        EasingType::EaseOutQuint,
        EasingType::EaseOutExpo,
        EasingType::EaseInOutExpo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EasingType::Linear => "linear",
            EasingType::EaseInQuad => "ease_in_quad",
            EasingType::EaseOutQuad => "ease_out_quad",
            EasingType::EaseInOutQuad => "ease_in_out_quad",
            EasingType::EaseInOutCubic => "ease_in_out_cubic",
            EasingType::EaseOutCubic => "ease_out_cubic",
            EasingType::EaseOutQuint => "ease_out_quint",
            EasingType::EaseOutExpo => "ease_out_expo",
            EasingType::EaseInOutExpo => "ease_in_out_expo",
        }
    }
}

impl Default for EasingType {
    fn default() -> Self {
        EasingType::EaseInOutQuad
    }
}

impl fmt::Display for EasingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingType {
    type Err = crate::Error;

    /// Accepts snake_case, kebab-case and camelCase spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        EasingType::ALL
            .into_iter()
            .find(|easing| easing.name().replace('_', "") == normalized)
            .ok_or_else(|| crate::Error::UnknownEasing(s.to_string()))
    }
}

/// Defaults applied to scroll requests that don't override them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animation duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Pixels to stop short of the target (negative scrolls past it)
    #[serde(default)]
    pub offset: i64,
    /// Whether user input cancels a running animation
    #[serde(default = "default_true")]
    pub interruptible: bool,
    /// Frames per second for the animation driver
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Scroll speed in pixels per second; overrides `duration_ms` when set
    #[serde(default)]
    pub speed: Option<f64>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            easing: EasingType::default(),
            offset: 0,
            interruptible: default_true(),
            frame_rate: default_frame_rate(),
            speed: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    1250
}

fn default_frame_rate() -> u32 {
    60
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at this path; built-in defaults are in effect
    Defaults(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "Loaded configuration from {}", path.display()),
            ConfigSource::Defaults(path) => {
                write!(f, "No configuration at {}, using defaults", path.display())
            }
        }
    }
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<(Self, ConfigSource)> {
        Self::load_from(Self::config_path())
    }

    pub fn load_from(path: PathBuf) -> crate::Result<(Self, ConfigSource)> {
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok((Self::from_toml(&content)?, ConfigSource::File(path)))
        } else {
            Ok((Self::default(), ConfigSource::Defaults(path)))
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagescroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagescroll")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert_eq!(config.duration_ms, 1250);
        assert_eq!(config.easing, EasingType::EaseInOutQuad);
        assert_eq!(config.offset, 0);
        assert!(config.interruptible);
        assert_eq!(config.frame_rate, 60);
        assert!(config.speed.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [scroll]
            duration_ms = 5000
            easing = "ease_in_out_expo"
            "#,
        )
        .unwrap();

        assert_eq!(config.scroll.duration_ms, 5000);
        assert_eq!(config.scroll.easing, EasingType::EaseInOutExpo);
        assert_eq!(config.scroll.frame_rate, 60);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[scroll]\nduration_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip_keeps_easing_name() {
        let mut config = AppConfig::default();
        config.scroll.easing = EasingType::EaseOutCubic;
        let text = config.to_toml().unwrap();
        assert!(text.contains("ease_out_cubic"));
        assert_eq!(AppConfig::from_toml(&text).unwrap().scroll, config.scroll);
    }

    #[test]
    fn test_load_from_missing_file_reports_defaults() {
        let path = std::env::temp_dir().join("pagescroll-missing").join("config.toml");
        let (config, source) = AppConfig::load_from(path.clone()).unwrap();

        assert_eq!(config.scroll, ScrollConfig::default());
        assert_eq!(source, ConfigSource::Defaults(path.clone()));
        assert_eq!(
            source.to_string(),
            format!("No configuration at {}, using defaults", path.display())
        );
    }

    #[test]
    fn test_load_from_file_reports_path() {
        let path = std::env::temp_dir().join(format!("pagescroll-{}.toml", std::process::id()));
        std::fs::write(&path, "[scroll]\nframe_rate = 30\n").unwrap();

        let loaded = AppConfig::load_from(path.clone());
        std::fs::remove_file(&path).unwrap();
        let (config, source) = loaded.unwrap();

        assert_eq!(config.scroll.frame_rate, 30);
        assert_eq!(
            source.to_string(),
            format!("Loaded configuration from {}", path.display())
        );
    }

    #[test]
    fn test_easing_from_str_spellings() {
        assert_eq!("linear".parse::<EasingType>().unwrap(), EasingType::Linear);
        assert_eq!(
            "easeInOutQuad".parse::<EasingType>().unwrap(),
            EasingType::EaseInOutQuad
        );
        assert_eq!(
            "ease-out-expo".parse::<EasingType>().unwrap(),
            EasingType::EaseOutExpo
        );
        assert!(matches!(
            "bounce".parse::<EasingType>(),
            Err(crate::Error::UnknownEasing(_))
        ));
    }
}
