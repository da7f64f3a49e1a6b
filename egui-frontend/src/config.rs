//! # App Configuration
//!
//! Optional YAML file read once at startup.
//!
//! ## Location
//!
//! `$CHILDCARE_COMPANION_CONFIG` when set, otherwise
//! `<config dir>/childcare-companion/config.yaml`.
//!
//! ## YAML Format
//!
//! ```yaml
//! reference_date: "2026-02-25"   # pins "today"; null follows the local date
//! parent:
//!   name: "王大宝家长"
//!   phone: "13800008888"
//! institution_name: "阳光托管中心"
//! window:
//!   width: 420.0
//!   height: 820.0
//! cjk_font_path: "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc"
//! ```
//!
//! Every field may be omitted. A missing file means all defaults; a file that
//! exists but does not parse is an error.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::storage::memory::seed::demo_date;

pub const CONFIG_PATH_ENV: &str = "CHILDCARE_COMPANION_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentProfile {
    pub name: String,
    pub phone: String,
}

impl Default for ParentProfile {
    fn default() -> Self {
        Self {
            name: "王大宝家长".to_string(),
            phone: "13800008888".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        // Phone-shaped, like the mobile layout the screens are drawn for
        Self {
            width: 420.0,
            height: 820.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub reference_date: Option<NaiveDate>,
    pub parent: ParentProfile,
    pub institution_name: String,
    pub window: WindowConfig,
    pub cjk_font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference_date: Some(demo_date()),
            parent: ParentProfile::default(),
            institution_name: "阳光托管中心".to_string(),
            window: WindowConfig::default(),
            cjk_font_path: None,
        }
    }
}

impl AppConfig {
    /// Where the config file is looked up
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("childcare-companion").join("config.yaml"))
    }

    /// Load from the default location, falling back to defaults when there is
    /// no config file
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                info!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("⚙️ No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = Self::from_yaml(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        info!("⚙️ Loaded config from {:?}", path);
        debug!("Config: {:?}", config);
        Ok(config)
    }

    pub fn from_yaml(yaml_content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a mapping
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml_content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = AppConfig::load_from(&temp_dir.path().join("absent.yaml")).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2026, 2, 25));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_config(
            &temp_dir,
            "reference_date: \"2026-03-01\"\nparent:\n  name: \"李妈妈\"\nwindow:\n  width: 500\n",
        );

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2026, 3, 1));
        assert_eq!(config.parent.name, "李妈妈");
        assert_eq!(config.parent.phone, ParentProfile::default().phone);
        assert_eq!(config.window.width, 500.0);
        assert_eq!(config.window.height, WindowConfig::default().height);
        assert_eq!(config.institution_name, "阳光托管中心");
    }

    #[test]
    fn test_null_reference_date_follows_local_clock() {
        let config = AppConfig::from_yaml("reference_date: null\n").unwrap();
        assert!(config.reference_date.is_none());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, "\n");
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error_naming_the_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_config(&temp_dir, "reference_date: [not, a, date\n");

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.yaml"));
    }
}
