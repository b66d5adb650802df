use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::Player;

/// Names and turn order for the two seats.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub red_name: String,
    pub yellow_name: String,
    pub first: Player,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red_name: "Player 1".to_string(),
            yellow_name: "Player 2".to_string(),
            first: Player::Red,
        }
    }
}

impl PlayersConfig {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::Red => &self.red_name,
            Player::Yellow => &self.yellow_name,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colour R and Y glyphs with ANSI escapes
    pub color: bool,
    /// Offer another game after each one finishes
    pub replay_prompt: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: false,
            replay_prompt: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.red_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.red_name must not be empty".into(),
            ));
        }
        if self.players.yellow_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.yellow_name must not be empty".into(),
            ));
        }
        if self.players.red_name.trim() == self.players.yellow_name.trim() {
            return Err(ConfigError::Validation(
                "players.red_name and players.yellow_name must differ".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.players.first, Player::Red);
        assert!(config.display.replay_prompt);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
red_name = "Ada"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.red_name, "Ada");
        // Other fields should be defaults
        assert_eq!(config.players.yellow_name, "Player 2");
        assert!(!config.display.color);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.players.red_name, default.players.red_name);
        assert_eq!(config.display.replay_prompt, default.display.replay_prompt);
    }

    #[test]
    fn test_first_player_parses_lowercase() {
        let config: AppConfig = toml::from_str("[players]\nfirst = \"yellow\"\n").unwrap();
        assert_eq!(config.players.first, Player::Yellow);
        assert!(toml::from_str::<AppConfig>("[players]\nfirst = \"green\"\n").is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.players.yellow_name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_same_names() {
        let mut config = AppConfig::default();
        config.players.yellow_name = "Player 1".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.players.red_name, "Player 1");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
color = true
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(config.display.color);
        // Others are defaults
        assert_eq!(config.players.name(Player::Yellow), "Player 2");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[players]\nred_name = \"\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
