// ==========================================
// DOI Dashboard - Session Source Configuration
// ==========================================
// Paths of the six input files for one dashboard session, loaded
// from a JSON file or derived from a data directory with the
// upstream export file names as defaults
// ==========================================

use crate::domain::types::LogicVariant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error type.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("config read failed: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("config parse failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// SourceConfig
// ==========================================

/// File locations of one session's input set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    pub logic_a_file: PathBuf,
    pub logic_b_file: PathBuf,
    pub logic_c_file: PathBuf,
    pub logic_d_file: PathBuf,
    pub distance_file: PathBuf,
    pub frequency_file: PathBuf,

    /// Caption shown on every report page stating which replenishment
    /// upload the session's data is based on.
    #[serde(default)]
    pub data_basis_note: Option<String>,
}

impl SourceConfig {
    /// Build a config pointing at a data directory, using the upstream
    /// export file names.
    pub fn from_data_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        SourceConfig {
            logic_a_file: dir.join("logic a.csv"),
            logic_b_file: dir.join("logic b.csv"),
            logic_c_file: dir.join("logic c new.csv"),
            logic_d_file: dir.join("logic d.csv"),
            distance_file: dir.join("JI Dry new.csv"),
            frequency_file: dir.join("Freq vendors.csv"),
            data_basis_note: None,
        }
    }

    /// Load a config from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save the config as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Path of one logic export.
    pub fn logic_path(&self, logic: LogicVariant) -> &Path {
        match logic {
            LogicVariant::A => &self.logic_a_file,
            LogicVariant::B => &self.logic_b_file,
            LogicVariant::C => &self.logic_c_file,
            LogicVariant::D => &self.logic_d_file,
        }
    }
}

/// Default data directory: `<user data dir>/doi-dashboard`, falling
/// back to the current directory when no platform dir is available.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("doi-dashboard"))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_dir_paths() {
        let cfg = SourceConfig::from_data_dir("/data");
        assert_eq!(cfg.logic_path(LogicVariant::C), Path::new("/data/logic c new.csv"));
        assert_eq!(cfg.distance_file, Path::new("/data/JI Dry new.csv"));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.json");

        let mut cfg = SourceConfig::from_data_dir(dir.path());
        cfg.data_basis_note = Some("RL Upload 10-14 Feb 2025".to_string());
        cfg.save(&path).unwrap();

        let loaded = SourceConfig::load(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_config_missing_file() {
        let result = SourceConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }
}
