//! Config file handling

use std::path::{Path, PathBuf};

use crate::errors::CurlkitError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CURLKIT_CONFIG_DIR";

/// Import behavior settings (`[import]` table)
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Rewrite known parse errors into friendlier wording
    pub friendly_errors: bool,
    /// .env file applied to every import
    pub env_file: Option<PathBuf>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            friendly_errors: true,
            env_file: None,
        }
    }
}

/// curlkit configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    pub default_options: Vec<String>,
    pub import: ImportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            default_options: Vec::new(),
            import: ImportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self, CurlkitError> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load `config.toml` from a specific directory
    pub fn load_from(config_dir: &Path) -> Result<Self, CurlkitError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| CurlkitError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&content, config_dir)
    }

    /// Parse config TOML; relative paths resolve against `config_dir`
    pub fn parse(content: &str, config_dir: &Path) -> Result<Self, CurlkitError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| CurlkitError::Config(format!("Invalid config TOML: {}", e)))?;

        let default_options = toml_value
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        let import = Self::parse_import(&toml_value, config_dir);

        Ok(Self {
            config_dir: config_dir.to_path_buf(),
            default_options,
            import,
        })
    }

    fn parse_import(toml: &toml::Value, config_dir: &Path) -> ImportConfig {
        let section = match toml.get("import") {
            Some(s) => s,
            None => return ImportConfig::default(),
        };

        let friendly_errors = section
            .get("friendly_errors")
            .and_then(|v| v.as_bool())
            .unwrap_or(true);

        let env_file = section
            .get("env_file")
            .and_then(|v| v.as_str())
            .map(|p| {
                let path = PathBuf::from(p);
                if path.is_absolute() {
                    path
                } else {
                    config_dir.join(path)
                }
            });

        ImportConfig {
            friendly_errors,
            env_file,
        }
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }

        dirs::config_dir()
            .map(|p| p.join("curlkit"))
            .unwrap_or_else(|| PathBuf::from(".curlkit"))
    }
}
