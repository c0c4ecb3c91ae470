use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calc_core::ServiceLimits;
use serde::Deserialize;

pub const CONFIG_PATH_ENV: &str = "CALC_CONFIG_PATH";
pub const LOG_FILTER_ENV: &str = "CALC_LOG";
pub const LOG_JSON_ENV: &str = "CALC_LOG_JSON";

const DEFAULT_CONFIG_PATH: &str = "calc.toml";

const DEFAULT_CONFIG: &str = r#"[environment]
env_type = "default"
[limits]
max_inputs = 1000
[logging]
filter = "calc=info,calc_core=info"
json = false
"#;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub env_type: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

fn default_log_filter() -> String {
    "calc=info,calc_core=info".to_string()
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file at this path was missing; built-in defaults are in use.
    #[default]
    Defaults,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalcConfig {
    pub environment: Environment,
    #[serde(default)]
    pub limits: ServiceLimits,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(skip)]
    pub source: ConfigSource,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            environment: Environment { env_type: "default".to_string() },
            limits: ServiceLimits::default(),
            logging: LoggingConfig::default(),
            source: ConfigSource::Defaults,
        })
    }
}

impl CalcConfig {
    /// Loads `path`, or the file named by `CALC_CONFIG_PATH`, or `calc.toml`.
    ///
    /// A missing file falls back to built-in defaults; a file that exists but
    /// does not parse is an error. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(|| {
            std::env::var(CONFIG_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
        });

        let mut config = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading configuration file '{}'", path.display()))?;
            let mut config = Self::from_toml(&raw)
                .with_context(|| format!("parsing configuration file '{}'", path.display()))?;
            config.source = ConfigSource::File(path);
            config
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(filter) = std::env::var(LOG_FILTER_ENV) {
            self.logging.filter = filter;
        }
        if let Ok(json) = std::env::var(LOG_JSON_ENV) {
            self.logging.json = json.parse().unwrap_or(self.logging.json);
        }
    }
}
