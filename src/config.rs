//! Generator configuration.
//!
//! API metadata is read from an optional YAML file (`swagger.yaml` in the project root by
//! default). The application base URL comes from the `APP_URL` environment variable,
//! after the project's `.env` file has been loaded.

use crate::error::Result;
use anyhow::Context;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the application base URL.
pub const APP_URL_VAR: &str = "APP_URL";

/// Configuration file looked up in the project root when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "swagger.yaml";

/// API metadata and path rewriting rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub title: String,
    pub version: String,
    pub description: String,
    /// Base path of the API, with or without surrounding slashes
    pub base_path: String,
    /// Substring removed from route URIs to form path keys
    pub path_prefix: String,
    /// Namespace prefix removed from controller namespaces to form operation tags
    pub controller_namespace: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            title: "API".to_string(),
            version: "1.0.0".to_string(),
            description: String::new(),
            base_path: "api/v1".to_string(),
            path_prefix: "api/v1".to_string(),
            controller_namespace: "App\\Http\\Controllers\\".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads `explicit` if given, else `<project>/swagger.yaml` when present, else defaults.
    pub fn resolve(explicit: Option<&Path>, project_path: &Path) -> anyhow::Result<Self> {
        let candidate: Option<PathBuf> = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = project_path.join(DEFAULT_CONFIG_FILE);
                default_path.is_file().then_some(default_path)
            }
        };

        match candidate {
            Some(path) => {
                info!("Configuration file: {}", path.display());
                Self::from_file(&path)
                    .with_context(|| format!("Failed to load configuration: {}", path.display()))
            }
            None => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Loads `<project>/.env` into the process environment. Variables that are already set
/// keep their value.
pub fn load_dotenv(project_path: &Path) {
    let env_file = project_path.join(".env");
    match dotenvy::from_path(&env_file) {
        Ok(()) => debug!("Loaded environment from {}", env_file.display()),
        Err(e) => debug!("No environment file loaded from {}: {}", env_file.display(), e),
    }
}

/// Reads the application base URL, treating an empty value as unset.
pub fn app_url_from_env() -> Option<String> {
    std::env::var(APP_URL_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
