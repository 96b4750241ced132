// src/application/config.rs
//
// Runtime configuration
//
// PRINCIPLES:
// - Every field has a default; an empty file is a valid config
// - The catalog file is a JSON array of team names
// - Command-line flags override file values (see main.rs)

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::CountryCatalog;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file listing accepted team names. Built-in country list when absent.
    pub catalog_path: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    pub log_level: String,

    /// Prompt printed before each command
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "warn".to_string(),
            prompt: "> ".to_string(),
        }
    }
}

impl AppConfig {
    /// Load a JSON config file
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the participant catalog this config asks for
    pub fn build_catalog(&self) -> AppResult<CountryCatalog> {
        match &self.catalog_path {
            Some(path) => load_catalog_file(path),
            None => Ok(CountryCatalog::builtin()),
        }
    }
}

/// Read a catalog file: a non-empty JSON array of non-blank names
pub fn load_catalog_file(path: &Path) -> AppResult<CountryCatalog> {
    let raw = fs::read_to_string(path)?;
    let names: Vec<String> = serde_json::from_str(&raw)?;

    if let Some(idx) = names.iter().position(|name| name.trim().is_empty()) {
        return Err(AppError::Config(format!(
            "catalog {} has a blank name at index {}",
            path.display(),
            idx
        )));
    }

    let catalog = CountryCatalog::from_names(&names);
    if catalog.is_empty() {
        return Err(AppError::Config(format!(
            "catalog {} lists no names",
            path.display()
        )));
    }

    info!("Loaded {} team names from {}", catalog.len(), path.display());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NameCatalog;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.build_catalog().unwrap().len(), CountryCatalog::builtin().len());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = temp_file(r#"{ "log_level": "debug" }"#);
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.prompt, "> ");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog_file = temp_file(r#"["Home FC", "Away United"]"#);
        let config = AppConfig {
            catalog_path: Some(catalog_file.path().to_path_buf()),
            ..AppConfig::default()
        };

        let catalog = config.build_catalog().unwrap();
        assert!(catalog.is_valid_name("home fc"));
        assert!(!catalog.is_valid_name("Spain"));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let file = temp_file("[]");
        assert!(matches!(load_catalog_file(file.path()), Err(AppError::Config(_))));
    }

    #[test]
    fn test_blank_catalog_entry_rejected() {
        let file = temp_file(r#"["Spain", "  "]"#);
        let err = load_catalog_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_malformed_files() {
        let file = temp_file("{ not json");
        assert!(matches!(AppConfig::load(file.path()), Err(AppError::Serialization(_))));
        assert!(matches!(
            load_catalog_file(Path::new("/definitely/not/here.json")),
            Err(AppError::Io(_))
        ));
    }
}
