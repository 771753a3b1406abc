use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::Invalid(format!("Invalid format: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub sim_hands: u32,
    pub format: OutputFormat,
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
    pub sim_hands: ValueSource,
    pub format: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            sim_hands: ValueSource::Default,
            format: ValueSource::Default,
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
            sim_hands: 10_000,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FIVECARD_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.sim_hands {
            cfg.sim_hands = v;
            sources.sim_hands = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("FIVECARD_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(hands) = std::env::var("FIVECARD_SIM_HANDS")
        && !hands.is_empty()
    {
        cfg.sim_hands = hands
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid sim_hands".into()))?;
        sources.sim_hands = ValueSource::Env;
    }
    if let Ok(format) = std::env::var("FIVECARD_FORMAT")
        && !format.is_empty()
    {
        cfg.format = format.parse()?;
        sources.format = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    sim_hands: Option<u32>,
    #[serde(default)]
    format: Option<OutputFormat>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.sim_hands == 0 {
        return Err(ConfigError::Invalid("sim_hands must be > 0".into()));
    }
    Ok(())
}
