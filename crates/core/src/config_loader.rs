use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads application configuration by layering the built-in defaults,
    /// `config/Config.toml`, environment variables, and JSON.
    ///
    /// Absent files contribute nothing, so with no configuration present
    /// the stock defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be parsed or a
    /// value has the wrong shape.
    pub fn load() -> Result<AppConfig> {
        Self::load_from("config/Config.toml")
    }

    /// Loads application configuration from a specific TOML file path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be parsed or a
    /// value has the wrong shape.
    pub fn load_from(path: &str) -> Result<AppConfig> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CAMPAIGN_"))
            .join(Json::file("config/Config.json"))
            .extract()?;

        Ok(config)
    }
}
