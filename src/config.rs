use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use frentes::core::Preset;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Column names overriding the selected preset
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConfigFields {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) actual: Option<String>,
    #[serde(default)]
    pub(crate) planned: Option<String>,
    #[serde(default)]
    pub(crate) sub_activities: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) source: Option<String>,
    #[serde(default)]
    pub(crate) preset: Option<Preset>,
    #[serde(default)]
    pub(crate) delimiter: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) fields: ConfigFields,
    #[serde(default)]
    pub(crate) images: HashMap<String, String>,
    #[serde(default)]
    pub(crate) default_image: Option<String>,
}

impl Config {
    /// First config file that parses wins; unreadable or invalid files are skipped
    pub(crate) fn load(quiet: bool) -> Self {
        Self::get_config_paths()
            .iter()
            .filter(|path| path.is_file())
            .find_map(|path| Self::read_from(path, quiet))
            .unwrap_or_default()
    }

    fn read_from(path: &Path, quiet: bool) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                if !quiet {
                    eprintln!("Using settings from {}", path.display());
                }
                Some(config)
            }
            Err(e) => {
                if !quiet {
                    eprintln!("Warning: ignoring {}: {e}", path.display());
                }
                None
            }
        }
    }

    /// Search order: working directory, `~/.config/frentes`, the platform
    /// config dir, then `~/.frentes.toml`
    fn get_config_paths() -> Vec<PathBuf> {
        let home = dirs::home_dir();
        let candidates = [
            Some(PathBuf::from("frentes.toml")),
            home.as_ref().map(|h| h.join(".config").join("frentes").join("config.toml")),
            dirs::config_dir().map(|d| d.join("frentes").join("config.toml")),
            home.as_ref().map(|h| h.join(".frentes.toml")),
        ];

        let mut paths: Vec<PathBuf> = Vec::new();
        for path in candidates.into_iter().flatten() {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }
}
