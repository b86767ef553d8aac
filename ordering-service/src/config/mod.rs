use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct OrderingConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(skip)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub name: String,
}

fn default_port() -> u16 {
    8000
}

impl OrderingConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let cfg = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::default())
            .build()?;

        let mut config: OrderingConfig = cfg.try_deserialize()?;
        config.database = DatabaseConfig {
            url: get_env("DATABASE_URL", Some("mongodb://localhost:27017"), is_prod)?,
            name: get_env("DATABASE_NAME", Some("food_ordering"), is_prod)?,
        };

        Ok(config)
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}
