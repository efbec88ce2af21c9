//! RON data loader
//!
//! Loads game configuration and spawn tables from external RON files, with
//! fallback to hardcoded defaults.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::spawns::SpawnTables;
use crate::game::GameConfig;
use crate::CoreResult;

/// Default directory searched for data files
pub const DEFAULT_DATA_DIR: &str = "assets/data";

const CONFIG_FILE: &str = "config.ron";
const SPAWNS_FILE: &str = "spawns.ron";

/// Manages all external game data
#[derive(Debug, Clone, Default)]
pub struct DataManager {
    /// Map size, room bounds, player stats
    pub config: GameConfig,
    /// Spawn caps and weights
    pub spawns: SpawnTables,
}

impl DataManager {
    /// Load from a directory. Missing or broken files fall back to defaults.
    pub fn load_from(base_path: &Path) -> Self {
        Self {
            config: load_or_default(&base_path.join(CONFIG_FILE)),
            spawns: load_or_default(&base_path.join(SPAWNS_FILE)),
        }
    }

    /// Load from a directory, failing on any missing or malformed file
    pub fn load_strict(base_path: &Path) -> CoreResult<Self> {
        let config: GameConfig = read_ron(&base_path.join(CONFIG_FILE))?;
        config.dungeon.validate()?;
        Ok(Self {
            config,
            spawns: read_ron(&base_path.join(SPAWNS_FILE))?,
        })
    }

    pub fn game_config(&self) -> &GameConfig {
        &self.config
    }

    pub fn spawn_tables(&self) -> &SpawnTables {
        &self.spawns
    }
}

fn read_ron<T: DeserializeOwned>(path: &Path) -> CoreResult<T> {
    let content = fs::read_to_string(path)?;
    Ok(ron::from_str(&content)?)
}

fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        log::debug!("{} not found, using defaults", path.display());
        return T::default();
    }
    match read_ron(path) {
        Ok(value) => {
            log::info!("Loaded {}", path.display());
            value
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            T::default()
        }
    }
}

fn write_ron<T: Serialize>(path: &Path, value: &T) -> CoreResult<()> {
    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?;
    fs::write(path, text)?;
    Ok(())
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(base_path: &Path) -> CoreResult<()> {
    fs::create_dir_all(base_path)?;
    write_ron(&base_path.join(CONFIG_FILE), &GameConfig::default())?;
    write_ron(&base_path.join(SPAWNS_FILE), &SpawnTables::default())?;
    log::info!("Exported default data to {}", base_path.display());
    Ok(())
}
