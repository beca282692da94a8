// src/config.rs

use std::env;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,

    /// The single client origin allowed through CORS.
    pub allowed_origin: String,

    pub port: u16,

    /// Populate empty stores with demo accounts and questions at startup.
    pub seed_demo_data: bool,

    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://quiz.db?mode=rwc".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let allowed_origin = env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let port = parse_or_default("PORT", 8080);
        let seed_demo_data = parse_or_default("SEED_DEMO_DATA", true);

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        Self {
            database_url,
            rust_log,
            allowed_origin,
            port,
            seed_demo_data,
            log_dir,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            rust_log: "info".to_string(),
            allowed_origin: "http://localhost:3000".to_string(),
            port: 8080,
            seed_demo_data: false,
            log_dir: "logs".to_string(),
        }
    }
}

/// Reads `key` and parses it, using `default` when unset.
/// A malformed value is a startup error.
fn parse_or_default<T: std::str::FromStr>(key: &str, default: T) -> T {
    parse_value(key, env::var(key).ok(), default)
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("{} has an invalid value: {:?}", key, raw)),
        None => default,
    }
}
