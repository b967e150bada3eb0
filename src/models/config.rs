use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Hur splashbilden passas in i overlayn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Hela bilden syns, eventuella marginaler runt om
    #[default]
    Contain,
    /// Bilden fyller hela ytan, eventuellt beskuren
    Cover,
}

impl ResizeMode {
    pub fn from_config_str(s: &str) -> Self {
        match s {
            "cover" => Self::Cover,
            _ => Self::Contain,
        }
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contain => write!(f, "contain"),
            Self::Cover => write!(f, "cover"),
        }
    }
}

/// Overlay-konfiguration — läses en gång vid uppstart, aldrig om
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Bakgrundsfärg bakom splashbilden, namn eller "#RRGGBB"
    #[serde(default = "default_background_color")]
    pub background_color: String,

    /// Inpassningsläge för bilden
    #[serde(default)]
    pub resize_mode: ResizeMode,
}

fn default_background_color() -> String {
    "white".to_string()
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            resize_mode: ResizeMode::default(),
        }
    }
}

impl OverlayConfig {
    fn config_path() -> PathBuf {
        directories::ProjectDirs::from("se", "genlib", "SplashOverlay")
            .map(|dirs| dirs.config_dir().join("splash.toml"))
            .unwrap_or_else(|| PathBuf::from("splash.toml"))
    }

    /// Ladda från plattformens config-katalog, defaults vid fel eller avsaknad
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Ladda från angiven fil, defaults vid fel eller avsaknad
    pub fn load_from(path: &Path) -> Self {
        if let Ok(content) = std::fs::read_to_string(path) {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }

        Self::default()
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Bakgrundsfärgen som egui-färg; okända strängar ger vitt
    pub fn background_color32(&self) -> Color32 {
        parse_color(&self.background_color).unwrap_or(Color32::WHITE)
    }
}

/// Tolka en färgsträng — namngiven färg eller "#RRGGBB"
pub fn parse_color(s: &str) -> Option<Color32> {
    match s.trim().to_ascii_lowercase().as_str() {
        "white" => Some(Color32::WHITE),
        "black" => Some(Color32::BLACK),
        "gray" | "grey" => Some(Color32::GRAY),
        hex if hex.starts_with('#') && hex.len() == 7 => {
            let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
            let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
            let b = u8::from_str_radix(&hex[5..7], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        _ => None,
    }
}
