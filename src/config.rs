// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        // Prefer a full URI; otherwise assemble one from the individual
        // DB_* variables.
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let user = env::var("DB_USER").expect("DATABASE_URL or DB_USER must be set");
                let password = env::var("DB_PASSWORD").unwrap_or_default();
                let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
                let name = env::var("DB_NAME").expect("DB_NAME must be set");
                format!("postgres://{user}:{password}@{host}/{name}")
            }
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            rust_log,
        }
    }
}
