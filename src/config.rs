//! Site configuration (mkdocs.yml)
//!
//! Only the fields docguard needs are read; everything else in the file is
//! ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{self, Result};

/// Default configuration file name, relative to the project root.
pub const DEFAULT_CONFIG_FILE: &str = "mkdocs.yml";

/// Build configuration handed to the lifecycle hooks
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    /// Site name, if declared
    #[serde(default)]
    pub site_name: Option<String>,

    /// Directory holding the Markdown sources, relative to the config file
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    /// Directory of the file this configuration came from
    #[serde(skip)]
    pub config_dir: PathBuf,
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            site_name: None,
            docs_dir: default_docs_dir(),
            config_dir: PathBuf::new(),
        }
    }
}

impl BuildConfig {
    /// Parse configuration from YAML; `path` is only used in error messages.
    pub fn from_yaml(path: &str, yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| error::config::parse_failed(path, e.to_string()))
    }

    /// Load configuration from `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(error::config::not_found(display));
        }
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(&display, e.to_string()))?;
        let mut config = Self::from_yaml(&display, &yaml)?;
        config.config_dir = parent_dir(path);
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self {
                config_dir: parent_dir(path),
                ..Self::default()
            })
        }
    }

    /// The docs directory, resolved against the config file's directory.
    pub fn docs_path(&self) -> PathBuf {
        self.config_dir.join(&self.docs_dir)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}
