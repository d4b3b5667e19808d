//! Game settings

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chess_core::{Difficulty, GlyphSet};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Who controls the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    HumanVsHuman,
    /// Human plays White, the engine plays Black.
    #[default]
    HumanVsAi,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "human-vs-human"),
            GameMode::HumanVsAi => write!(f, "human-vs-ai"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human-vs-human" | "hvh" => Ok(GameMode::HumanVsHuman),
            "human-vs-ai" | "hva" => Ok(GameMode::HumanVsAi),
            _ => Err(format!("unknown mode: {s}")),
        }
    }
}

/// Settings for a game, usually read from a TOML file.
///
/// ```toml
/// mode = "human-vs-ai"
/// difficulty = "expert"
/// thinking_delay_ms = 500
/// glyphs = "animals"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Pause before the engine starts searching, so its reply is not instant.
    pub thinking_delay_ms: u64,
    pub glyphs: GlyphSet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsAi,
            difficulty: Difficulty::Beginner,
            thinking_delay_ms: 500,
            glyphs: GlyphSet::Classic,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load settings from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GameMode::HumanVsAi);
        assert_eq!(config.difficulty, Difficulty::Beginner);
        assert_eq!(config.thinking_delay(), Duration::from_millis(500));
        assert_eq!(config.glyphs, GlyphSet::Classic);
    }

    #[test]
    fn parses_full_file() {
        let config = GameConfig::from_toml_str(
            r#"
            mode = "human-vs-human"
            difficulty = "expert"
            thinking_delay_ms = 250
            glyphs = "geometric"
            "#,
        )
        .unwrap();
        assert_eq!(config.mode, GameMode::HumanVsHuman);
        assert_eq!(config.difficulty, Difficulty::Expert);
        assert_eq!(config.thinking_delay_ms, 250);
        assert_eq!(config.glyphs, GlyphSet::Geometric);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = GameConfig::from_toml_str("difficulty = \"intermediate\"").unwrap();
        assert_eq!(config.difficulty, Difficulty::Intermediate);
        assert_eq!(config.mode, GameMode::HumanVsAi);
        assert_eq!(config.thinking_delay_ms, 500);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(GameConfig::from_toml_str("difficulty = \"godlike\"").is_err());
        assert!(GameConfig::from_toml_str("colour = \"red\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/chess.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn mode_names() {
        assert_eq!("human-vs-ai".parse::<GameMode>(), Ok(GameMode::HumanVsAi));
        assert_eq!(GameMode::HumanVsHuman.to_string(), "human-vs-human");
        assert!("ai-vs-ai".parse::<GameMode>().is_err());
    }
}
