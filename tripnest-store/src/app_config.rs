use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    #[serde(default = "default_body_limit")]
    pub body_limit_kb: usize,
}

fn default_timeout() -> u64 { 30 }

fn default_body_limit() -> usize { 256 }

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
    /// Write seed records for collections that have no file yet
    #[serde(default)]
    pub seed_on_start: bool,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.port", 5000)?
            .set_default("storage.data_dir", "data")?
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `TRIPNEST__SERVER__PORT=8080` sets `server.port`
            .add_source(config::Environment::with_prefix("TRIPNEST").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
