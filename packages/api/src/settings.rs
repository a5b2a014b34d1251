use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Api {
    /// Base URL of the shelf service.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080".into(),
            timeout: 30,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    pub api: Api,
}

impl Settings {
    /// Load settings from `config.toml` (optional) and the environment
    /// (`API_URL`, `API_TIMEOUT`), falling back to defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("api.url", "http://localhost:8080")?
            .set_default("api.timeout", "30")?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }
}
