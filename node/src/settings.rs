use anyhow::{anyhow, Context, Result};
use config::{Config, File as ConfigFile};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_CONFIG_PATH: &str = "config/mergington.toml";
const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unsupported log format '{other}' (expected pretty or json)")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        };
        f.write_str(value)
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub config_path: Option<PathBuf>,

    // Network
    pub host: String,
    pub port: u16,

    // Front-end assets
    pub static_dir: Option<PathBuf>,

    // Observability
    pub metrics_enabled: bool,

    // Logging
    pub log_level: String,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Layer defaults, an optional TOML file and `MERGINGTON_*` environment variables.
    pub fn load(config_path_override: Option<&str>) -> Result<Self> {
        let resolved_path = if let Some(path) = config_path_override {
            let path = PathBuf::from(path);
            if !path.exists() {
                anyhow::bail!(
                    "Configuration file {} not found (specified via --config)",
                    path.display()
                );
            }
            Some(path)
        } else {
            let path = PathBuf::from(DEFAULT_CONFIG_PATH);
            if path.exists() {
                Some(path)
            } else {
                None
            }
        };

        let mut builder = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8000_i64)?
            .set_default("log_level", "info")?
            .set_default("log_format", "pretty")?
            .set_default("metrics_enabled", true)?;

        if let Some(path) = &resolved_path {
            builder = builder.add_source(ConfigFile::from(path.as_path()));
        }

        builder = builder.add_source(config::Environment::with_prefix("MERGINGTON"));

        let config = builder.build().context("failed to assemble configuration")?;

        let port = config.get_int("port")?;
        let port = u16::try_from(port).map_err(|_| anyhow!("port {port} is out of range"))?;

        let static_dir = config
            .get_string("static_dir")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                let default_path = PathBuf::from(DEFAULT_STATIC_DIR);
                if default_path.exists() {
                    Some(default_path)
                } else {
                    None
                }
            });

        Ok(Self {
            config_path: resolved_path,
            host: config.get_string("host")?,
            port,
            static_dir,
            metrics_enabled: config.get_bool("metrics_enabled")?,
            log_level: config.get_string("log_level")?,
            log_format: config.get_string("log_format")?.parse()?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
