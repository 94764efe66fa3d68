use crate::theme::PaletteType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: Option<PaletteType>,
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("tejash");
        path.push("config.toml");
        path
    })
}

/// Missing or unparsable config falls back to defaults; startup never
/// fails on a bad file.
pub fn load_config() -> UiConfig {
    get_config_path()
        .map(|path| load_from(&path))
        .unwrap_or_default()
}

pub fn save_theme(theme: PaletteType) {
    if let Some(path) = get_config_path() {
        save_to(&path, &UiConfig { theme: Some(theme) });
    }
}

fn load_from(path: &Path) -> UiConfig {
    if let Ok(content) = std::fs::read_to_string(path) {
        if let Ok(config) = toml::from_str::<UiConfig>(&content) {
            return config;
        }
    }
    UiConfig::default()
}

fn save_to(path: &Path, config: &UiConfig) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(content) = toml::to_string(config) {
        let _ = std::fs::write(path, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        save_to(
            &path,
            &UiConfig {
                theme: Some(PaletteType::Nord),
            },
        );
        let loaded = load_from(&path);
        assert_eq!(loaded.theme, Some(PaletteType::Nord));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(&dir.path().join("nope.toml"));
        assert_eq!(loaded.theme, None);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "theme = [this is not toml").unwrap();
        let loaded = load_from(&path);
        assert_eq!(loaded.theme, None);
    }
}
