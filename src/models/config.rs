use serde::Deserialize;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Configuration options for the WaveSight service.
///
/// Loaded from an optional `wavesight.yaml` next to the binary, overridden
/// by environment variables (`DATABASE_URL`, `BIND_ADDRESS`, `PORT`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub database_url: String,
}

impl ServerConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("wavesight").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
