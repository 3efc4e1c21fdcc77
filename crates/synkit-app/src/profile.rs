use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use synkit_config::Config;

const MAIN_PROFILE: &str = "main";

fn synkit_root() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::config_dir().context("No user config folder on this platform")?;
    Ok(config_dir.join("synkit"))
}

fn profiles_dir() -> anyhow::Result<PathBuf> {
    Ok(synkit_root()?.join("profiles"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    init_profiles_in(&profiles_dir()?)
}

fn init_profiles_in(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;

    let main_profile = dir.join(format!("{MAIN_PROFILE}.json"));
    if !main_profile.exists() {
        let profile = Profile {
            name: MAIN_PROFILE.into(),
            value: Config::default(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)
            .with_context(|| format!("Cannot write {}", main_profile.display()))?;
        tracing::info!("Created main profile in {}", dir.display());
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    load_profile_in(&profiles_dir()?, name)
}

fn load_profile_in(dir: &Path, name: &str) -> anyhow::Result<Config> {
    let profile_file = dir.join(format!("{name}.json"));
    if profile_file.exists() {
        return read_profile(&profile_file);
    }

    tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
    let main_file = dir.join(format!("{MAIN_PROFILE}.json"));
    if main_file.exists() {
        read_profile(&main_file)
    } else {
        Ok(Config::default())
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}

/// Load a bare config file given on the command line
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let data =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_creates_main_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = dir.path().join("profiles");

        init_profiles_in(&profiles).unwrap();

        assert!(profiles.join("main.json").exists());
        let config = load_profile_in(&profiles, "main").unwrap();
        assert_eq!(config.dictionary.max_query_depth, 20);
    }

    #[test]
    fn test_missing_profile_falls_back_to_main() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.network.timeout_seconds = 5;
        let profile = Profile {
            name: "main".into(),
            value: config,
        };
        fs::write(
            dir.path().join("main.json"),
            serde_json::to_string(&profile).unwrap(),
        )
        .unwrap();

        let loaded = load_profile_in(dir.path(), "work").unwrap();
        assert_eq!(loaded.network.timeout_seconds, 5);
    }

    #[test]
    fn test_partial_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synkit.json");
        fs::write(&path, r#"{"debug": true, "ui": {"display_method": "popup"}}"#).unwrap();

        let config = load_config_file(&path).unwrap();
        assert!(config.debug);
        assert_eq!(config.ui.display_method, synkit_types::DisplayMethod::Popup);
        assert_eq!(config.network.timeout_seconds, 20);
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"ui": {"display_method": "sidebar"}}"#).unwrap();

        assert!(load_config_file(&path).is_err());
    }
}
