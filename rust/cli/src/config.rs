use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "CLOUDPOKER_CONFIG";
pub const SEED_ENV: &str = "CLOUDPOKER_SEED";
pub const CATALOG_ENV: &str = "CLOUDPOKER_CATALOG";
pub const RANKINGS_ENV: &str = "CLOUDPOKER_RANKINGS";
pub const LOG_ENV: &str = "CLOUDPOKER_LOG";

pub const DEFAULT_RANKINGS_FILE: &str = "cloudpoker_rankings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Fixed deck seed; random per session when unset
    pub seed: Option<u64>,
    /// JSON catalog file; the built-in deck when unset
    pub catalog: Option<String>,
    pub rankings_file: String,
    /// JSONL round history; disabled when unset
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub catalog: ValueSource,
    pub rankings_file: ValueSource,
    pub log_file: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            catalog: ValueSource::Default,
            rankings_file: ValueSource::Default,
            log_file: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            catalog: None,
            rankings_file: DEFAULT_RANKINGS_FILE.into(),
            log_file: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_sources_from(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the TOML file named by `CLOUDPOKER_CONFIG`, then
/// the individual environment variables. `env` stands in for the process
/// environment.
pub fn load_with_sources_from<F>(env: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| env(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.catalog {
            cfg.catalog = Some(v);
            sources.catalog = ValueSource::File;
        }
        if let Some(v) = f.rankings_file {
            cfg.rankings_file = v;
            sources.rankings_file = ValueSource::File;
        }
        if let Some(v) = f.log_file {
            cfg.log_file = Some(v);
            sources.log_file = ValueSource::File;
        }
    }

    if let Some(seed) = var(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(path) = var(CATALOG_ENV) {
        cfg.catalog = Some(path);
        sources.catalog = ValueSource::Env;
    }
    if let Some(path) = var(RANKINGS_ENV) {
        cfg.rankings_file = path;
        sources.rankings_file = ValueSource::Env;
    }
    if let Some(path) = var(LOG_ENV) {
        cfg.log_file = Some(path);
        sources.log_file = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    catalog: Option<String>,
    #[serde(default)]
    rankings_file: Option<String>,
    #[serde(default)]
    log_file: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rankings_file.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rankings_file must not be empty".into(),
        ));
    }
    if cfg.catalog.as_deref().is_some_and(|c| c.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: catalog must not be empty".into(),
        ));
    }
    Ok(())
}
