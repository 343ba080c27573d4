use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub jwt: JWTSettings
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationSettings{
    pub host: String,
    pub port: u16
}

#[derive(Deserialize, Debug, Clone)]
pub struct DatabaseSettings{
    pub url: String,
    pub max_connections: u32,
    pub timeout_secs: u64
}

impl DatabaseSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct JWTSettings{
    pub secret: String,
    pub access_expiry_hours: u64,
    pub refresh_expiry_days: u64
}

impl Settings{
    pub fn get() -> Result<Self, ConfigError>{
        let _ = dotenvy::dotenv();

        Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.timeout_secs", 10)?
            .set_default("jwt.access_expiry_hours", 24)?
            .set_default("jwt.refresh_expiry_days", 15)?
            .add_source(File::with_name("configuration/base.yaml").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
            )
            .set_override_option("application.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .build()?
            .try_deserialize::<Settings>()
    }
}
