use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::geometry::ZonePolicy;

fn default_precision() -> usize {
    4
}
fn default_zone_policy() -> ZonePolicy {
    ZonePolicy::Warn
}
fn default_search_radius() -> f64 {
    1000.0
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    /// Decimal places for plain-text output
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default = "default_zone_policy")]
    pub zone_policy: ZonePolicy,
    /// Default search radius in meters
    #[serde(default = "default_search_radius")]
    pub search_radius: f64,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            zone_policy: default_zone_policy(),
            search_radius: default_search_radius(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Load an explicitly named config file; a missing file is an error
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Search the default locations, returning the first file that parses
    pub fn load() -> Option<Self> {
        Self::load_from(&get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> Option<Self> {
        for path in paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        // Runs before the logger is installed
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("gkdist.toml"));
    paths.push(PathBuf::from(".gkdist.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("gkdist").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".gkdist.toml"));
    }

    paths
}
