use crate::error::FileManagerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROMPT: &str = "FileManager> ";

/// Knobs the handlers read from the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    pub compression_quality: u32, // brotli 0..=11
    pub compression_window: u32,  // brotli lgwin 10..=24
    pub buffer_size: usize,       // stream buffer for copy/hash/compress
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            compression_quality: 11,
            compression_window: 22,
            buffer_size: 64 * 1024,
        }
    }
}

impl SessionOptions {
    pub fn validate(&self) -> Result<(), FileManagerError> {
        if self.compression_quality > 11 {
            return Err(FileManagerError::ConfigInvalid(format!(
                "compression_quality must be 0..=11, got {}",
                self.compression_quality
            )));
        }
        if !(10..=24).contains(&self.compression_window) {
            return Err(FileManagerError::ConfigInvalid(format!(
                "compression_window must be 10..=24, got {}",
                self.compression_window
            )));
        }
        if self.buffer_size == 0 {
            return Err(FileManagerError::ConfigInvalid(
                "buffer_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Startup configuration. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileManagerConfig {
    pub username: Option<String>,
    pub start_dir: Option<PathBuf>,
    pub prompt: String,
    pub session: SessionOptions,
}

impl Default for FileManagerConfig {
    fn default() -> Self {
        Self {
            username: None,
            start_dir: None,
            prompt: DEFAULT_PROMPT.to_string(),
            session: SessionOptions::default(),
        }
    }
}

impl FileManagerConfig {
    pub fn load(path: &Path) -> Result<Self, FileManagerError> {
        let raw = fs::read_to_string(path).map_err(|source| FileManagerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: FileManagerConfig =
            serde_json::from_str(&raw).map_err(|source| FileManagerError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.session.validate()?;
        log::debug!("[config] loaded {}", path.display());
        Ok(config)
    }

    /// Banner name: configured one, else whoever runs the process.
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(name) if !name.is_empty() => name.clone(),
            _ => whoami::username(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"username": "ann", "session": {{"compression_quality": 5}}}}"#).unwrap();

        let config = FileManagerConfig::load(file.path()).unwrap();
        assert_eq!(config.username.as_deref(), Some("ann"));
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert_eq!(config.session.compression_quality, 5);
        assert_eq!(config.session.compression_window, 22);
    }

    #[test]
    fn test_out_of_range_quality_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"session": {{"compression_quality": 12}}}}"#).unwrap();

        let err = FileManagerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, FileManagerError::ConfigInvalid(_)));
    }

    #[test]
    fn test_malformed_json_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = FileManagerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, FileManagerError::ConfigParse { .. }));
    }

    #[test]
    fn test_display_name_prefers_configured_username() {
        let config = FileManagerConfig {
            username: Some("bob".to_string()),
            ..FileManagerConfig::default()
        };
        assert_eq!(config.display_name(), "bob");
    }
}
