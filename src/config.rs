use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub db_init_debounce: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let db_init_debounce_ms = env::var("DB_INIT_DEBOUNCE_MS")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u64>()
            .context("DB_INIT_DEBOUNCE_MS must be a number of milliseconds")?;

        Ok(Config {
            service_port,
            service_host,
            db_init_debounce: Duration::from_millis(db_init_debounce_ms),
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
        tracing::info!("  DB init debounce: {:?}", self.db_init_debounce);
    }
}
