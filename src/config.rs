use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{roster, HorizontalScan};

/// Minimum number of names a configured roster must list.
pub const MIN_PLAYERS: usize = 2;

/// Game setup, loadable from TOML. Anything left unset is asked for
/// interactively by the console shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player names in turn order. Empty means "ask at startup".
    pub players: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    pub horizontal_scan: HorizontalScan,
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
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
        for (name, value) in [
            ("target", self.target),
            ("width", self.width),
            ("height", self.height),
        ] {
            if value == Some(0) {
                return Err(ConfigError::Validation(format!("{name} must be > 0")));
            }
        }

        if !self.players.is_empty() {
            if self.players.len() < MIN_PLAYERS {
                return Err(ConfigError::Validation(format!(
                    "players must list at least {MIN_PLAYERS} names"
                )));
            }
            roster(&self.players)?;
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        let example = GameConfig {
            players: vec!["Red".to_string(), "Yellow".to_string()],
            target: Some(4),
            width: Some(7),
            height: Some(6),
            horizontal_scan: HorizontalScan::default(),
        };
        toml::to_string_pretty(&example).expect("example config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert!(config.players.is_empty());
        assert_eq!(config.width, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
width = 9
horizontal_scan = "candidate-row"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.width, Some(9));
        assert_eq!(config.height, None);
        assert_eq!(config.horizontal_scan, HorizontalScan::CandidateRow);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.horizontal_scan, HorizontalScan::BottomRow);
    }

    #[test]
    fn test_validation_rejects_zero_dimensions() {
        for field in ["target", "width", "height"] {
            let mut config = GameConfig::default();
            match field {
                "target" => config.target = Some(0),
                "width" => config.width = Some(0),
                _ => config.height = Some(0),
            }
            let err = config.validate().unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("config validation error: {field} must be > 0")
            );
        }
    }

    #[test]
    fn test_validation_rejects_single_player() {
        let config = GameConfig {
            players: vec!["Ann".to_string()],
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_shared_initials() {
        let config = GameConfig {
            players: vec!["Ann".to_string(), "Amy".to_string()],
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Roster(GameError::DuplicateToken { token: 'A', .. }))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_n.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
players = ["Ann", "Bob", "Cy"]
target = 3
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.players, ["Ann", "Bob", "Cy"]);
        assert_eq!(config.target, Some(3));
        assert_eq!(config.width, None);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "width = 0\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "width = \"wide\"\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.width, Some(7));
        assert_eq!(config.players, ["Red", "Yellow"]);
    }
}
