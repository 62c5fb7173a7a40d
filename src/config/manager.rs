use super::{
    data::DataConfig,
    display::DisplayConfig,
    traits::ConfigSection,
};
use crate::error::DashboardError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit TOML config file.
pub const CONFIG_PATH_ENV: &str = "CRYPTODASH_CONFIG";
/// Picked up from the working directory when no explicit file is given.
pub const DEFAULT_CONFIG_FILE: &str = "cryptodash.toml";
const ENV_PREFIX: &str = "CRYPTODASH";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), DashboardError> {
        validate_section(&self.data)?;
        validate_section(&self.display)?;
        Ok(())
    }
}

fn validate_section<S: ConfigSection>(section: &S) -> Result<(), DashboardError> {
    section.validate()?;
    log::debug!("[{}] configuration valid", S::section_name());
    Ok(())
}

/// Resolves the effective configuration: built-in defaults, then an optional
/// TOML file, then `CRYPTODASH__<SECTION>__<KEY>` environment variables.
pub struct ConfigManager {
    config: DashboardConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    pub fn new(config: DashboardConfig) -> Result<Self, DashboardError> {
        config.validate()?;
        Ok(Self { config, source: None })
    }

    /// Load using `CRYPTODASH_CONFIG` if set, else `./cryptodash.toml` if present.
    pub fn from_env() -> Result<Self, DashboardError> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let file = explicit.or_else(|| {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        });
        Self::load(file.as_deref())
    }

    pub fn load(file: Option<&Path>) -> Result<Self, DashboardError> {
        let defaults = Config::try_from(&DashboardConfig::default())
            .map_err(|e| DashboardError::Configuration(format!("Failed to seed defaults: {}", e)))?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = file {
            if !path.exists() {
                return Err(DashboardError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: DashboardConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| DashboardError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        match file {
            Some(path) => log::info!("Configuration loaded from {}", path.display()),
            None => log::info!("Configuration loaded from defaults and environment"),
        }

        Ok(Self {
            config,
            source: file.map(Path::to_path_buf),
        })
    }

    pub fn get(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Effective configuration rendered as TOML, shown in the settings panel.
    pub fn to_toml(&self) -> Result<String, DashboardError> {
        toml::to_string_pretty(&self.config)
            .map_err(|e| DashboardError::Configuration(format!("Failed to serialize: {}", e)))
    }
}
