use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::cli::Args;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub countries_api_url: String,
    pub upstream_timeout_secs: u64,
    pub database_url: String,
    pub db_connection_pool_size: u32,
    pub db_acquire_timeout_secs: u64,
    pub top_countries_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok();

        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3333".to_string())
                .parse()
                .unwrap_or(3333),
            countries_api_url: env::var("COUNTRIES_API_URL")
                .unwrap_or_else(|_| "https://restcountries.com/v3.1".to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://avaliacoes.db".to_string()),
            db_connection_pool_size: env::var("DB_CONNECTION_POOL_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            db_acquire_timeout_secs: env::var("DB_ACQUIRE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            top_countries_limit: env::var("TOP_COUNTRIES_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        })
    }

    /// Command line flags win over the environment.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(port) = args.port {
            self.server_port = port;
        }
        if let Some(url) = &args.database_url {
            self.database_url = url.clone();
        }
        self
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }

    pub fn listen_address(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3333,
            countries_api_url: "https://restcountries.com/v3.1".to_string(),
            upstream_timeout_secs: 10,
            database_url: "sqlite://avaliacoes.db".to_string(),
            db_connection_pool_size: 10,
            db_acquire_timeout_secs: 5,
            top_countries_limit: 10,
        }
    }
}
