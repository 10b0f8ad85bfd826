use anyhow::{Context, Result};
use log::info;
use rocket::figment::Figment;
use serde::Deserialize;
use std::{env, fs, io::ErrorKind, time::Duration};

/// Port used when `HTTP_PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Seconds in-flight requests get to finish after an interrupt
pub const SHUTDOWN_GRACE_SECS: u32 = 5;

const CONFIG_FILE: &str = "config.toml";

/// Runtime configuration of the service
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The port the HTTP listener binds to
    pub port: u16,

    /// Where the species and translation APIs live
    pub upstream: UpstreamConfig,
}

/// The `[upstream]` table of `config.toml`
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the pokeapi v2 API
    pub pokeapi_url: String,

    /// Base URL of the funtranslations API
    pub funtranslations_url: String,

    /// Timeout applied to every outbound request
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            pokeapi_url: "https://pokeapi.co/api/v2".to_string(),
            funtranslations_url: "https://api.funtranslations.com/translate".to_string(),
            timeout_secs: 10,
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    upstream: UpstreamConfig,
}

impl Config {
    /// Reads the port from `HTTP_PORT` and the upstream settings from `config.toml`,
    /// falling back to defaults for whatever is missing
    pub fn load() -> Result<Self> {
        let port = parse_port(env::var("HTTP_PORT").ok().as_deref())?;

        let upstream = match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => parse_config_file(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => UpstreamConfig::default(),
            Err(e) => return Err(e).context("Could not read config.toml"),
        };

        Ok(Self { port, upstream })
    }

    /// Rocket settings: listen on every interface and give in-flight
    /// requests a bounded grace period on Ctrl-C
    pub fn figment(&self) -> Figment {
        rocket::Config::figment()
            .merge(("address", "0.0.0.0"))
            .merge(("port", self.port))
            .merge(("shutdown.ctrlc", true))
            .merge(("shutdown.grace", SHUTDOWN_GRACE_SECS))
            .merge(("shutdown.mercy", SHUTDOWN_GRACE_SECS))
    }
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None | Some("") => {
            info!("HTTP_PORT not set, defaulting to {}", DEFAULT_PORT);
            Ok(DEFAULT_PORT)
        }
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("HTTP_PORT must be a valid port number, got '{}'", raw)),
    }
}

pub(crate) fn parse_config_file(contents: &str) -> Result<UpstreamConfig> {
    let file: ConfigFile = toml::from_str(contents).context("Malformed config.toml")?;
    Ok(file.upstream)
}
