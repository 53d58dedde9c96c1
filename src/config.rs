// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, WorkflowError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "CONTRACT_DESK";

pub const WORD_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub timing: TimingConfig,
    pub export: ExportConfig,
    pub upload: UploadConfig,
}

/// Fixed delays standing in for generation, analysis and comparison work.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimingConfig {
    pub generate_delay_ms: u64,
    pub analyze_delay_ms: u64,
    pub compare_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub file_extension: String,
    pub mime_type: String,
    pub write_manifest: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    pub accepted_extensions: Vec<String>,
}

impl TimingConfig {
    pub fn generate_delay(&self) -> Duration {
        Duration::from_millis(self.generate_delay_ms)
    }

    pub fn analyze_delay(&self) -> Duration {
        Duration::from_millis(self.analyze_delay_ms)
    }

    pub fn compare_delay(&self) -> Duration {
        Duration::from_millis(self.compare_delay_ms)
    }

    pub fn instant() -> Self {
        Self {
            generate_delay_ms: 0,
            analyze_delay_ms: 0,
            compare_delay_ms: 0,
        }
    }
}

impl Config {
    /// Layers built-in defaults, then the given file (or an optional
    /// `config/default.toml`), then `CONTRACT_DESK__*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, env_source())
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| WorkflowError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        builder = match path {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false)),
        };

        let settings = builder
            .add_source(env)
            .build()
            .map_err(|e| WorkflowError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| WorkflowError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            timing: TimingConfig {
                generate_delay_ms: 2000,
                analyze_delay_ms: 3000,
                compare_delay_ms: 3000,
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
                file_extension: "docx".to_string(),
                mime_type: WORD_MIME_TYPE.to_string(),
                write_manifest: true,
            },
            upload: UploadConfig {
                accepted_extensions: vec![
                    "doc".to_string(),
                    "docx".to_string(),
                    "pdf".to_string(),
                    "txt".to_string(),
                ],
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.upload.accepted_extensions.is_empty() {
            return Err(WorkflowError::Config(
                "accepted_extensions must not be empty".to_string(),
            ));
        }

        if self.export.file_extension.trim().is_empty() {
            return Err(WorkflowError::Config(
                "file_extension must not be empty".to_string(),
            ));
        }

        if self.export.output_dir.as_os_str().is_empty() {
            return Err(WorkflowError::Config(
                "output_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.timing.generate_delay(), Duration::from_secs(2));
        assert_eq!(config.timing.analyze_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("desk.toml");
        fs::write(
            &path,
            r#"
[timing]
generate_delay_ms = 10
analyze_delay_ms = 20
compare_delay_ms = 30

[export]
output_dir = "out"
file_extension = "docx"
mime_type = "text/plain"
write_manifest = false

[upload]
accepted_extensions = ["txt"]
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.timing.compare_delay_ms, 30);
        assert_eq!(config.upload.accepted_extensions, vec!["txt".to_string()]);
        assert!(!config.export.write_manifest);
    }

    #[test]
    fn test_env_overrides_without_config_file() {
        let vars: config::Map<String, String> = [(
            "CONTRACT_DESK__TIMING__ANALYZE_DELAY_MS".to_string(),
            "0".to_string(),
        )]
        .into_iter()
        .collect();

        let config = Config::load_with_env(None, env_source().source(Some(vars))).unwrap();
        assert_eq!(config.timing.analyze_delay_ms, 0);
        assert_eq!(config.timing.generate_delay_ms, 2000);
        assert_eq!(config.export.file_extension, "docx");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "[timing]\ncompare_delay_ms = 30\n").unwrap();

        let vars: config::Map<String, String> = [(
            "CONTRACT_DESK__TIMING__COMPARE_DELAY_MS".to_string(),
            "5".to_string(),
        )]
        .into_iter()
        .collect();

        let config = Config::load_with_env(Some(&path), env_source().source(Some(vars))).unwrap();
        assert_eq!(config.timing.compare_delay_ms, 5);
        assert_eq!(config.timing.generate_delay_ms, 2000);
        assert_eq!(config.upload.accepted_extensions.len(), 4);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = Config::load_with_env(Some(&missing), env_source().source(Some(Default::default())));
        assert!(matches!(result, Err(WorkflowError::Config(_))));
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let mut config = Config::default_config();
        config.upload.accepted_extensions.clear();
        assert!(matches!(config.validate(), Err(WorkflowError::Config(_))));
    }
}
