//! Game configuration loader.

use std::path::Path;

use encounter_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Missing fields fall back to [`GameConfig::default`]; the result is
/// validated before it is returned.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_core::{RestartPolicy, WeaponKind};
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ConfigLoader::parse("").expect("defaults");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = ConfigLoader::parse(
            r#"
            player_shield_max = 100
            player_starting_shield = 10
            roster_size = 1
            restart_policy = "clear_log"

            [player_weapon]
            kind = "stick"
            base_damage = 4
            bonus_damage_min = 1
            bonus_damage_max = 3
            "#,
        )
        .expect("config");

        assert_eq!(config.player_shield_max, 100);
        assert_eq!(config.player_starting_shield, 10);
        assert_eq!(config.roster_size, 1);
        assert_eq!(config.restart_policy, RestartPolicy::ClearLog);
        assert_eq!(config.player_weapon.kind, WeaponKind::Stick);
        assert_eq!(config.enemy_shield_max, GameConfig::DEFAULT_ENEMY_SHIELD_MAX);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let error = ConfigLoader::parse("player_starting_shield = 80").unwrap_err();
        assert!(error.to_string().contains("80"), "{error}");

        assert!(ConfigLoader::parse("roster_size = 0").is_err());
        assert!(ConfigLoader::parse("roster_size = \"three\"").is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "focus_multiplier = 4").expect("write");

        let config = ConfigLoader::load(file.path()).expect("load");
        assert_eq!(config.focused_recharge(), 8);

        let missing = ConfigLoader::load(Path::new("/nonexistent/config.toml"));
        assert!(missing.is_err());
    }
}
