use crate::red_api::{DEFAULT_RED_API_URL, RedApi};
use clap::{Parser, ValueEnum};
use std::time::Duration;

/// Runtime mode of the deployment. Only `Production` forces HTTPS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RuntimeMode {
    #[default]
    #[value(alias = "dev")]
    Development,
    #[value(alias = "prod")]
    Production,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "PARADERO_ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "PARADERO_WORKERS", default_value_t = 2)]
    pub workers: usize,

    /// Base URL of the Red bus-stop API, the stop id is appended to it
    #[arg(long, env = "RED_API_URL", default_value = DEFAULT_RED_API_URL)]
    pub red_api_url: String,

    /// Give up on a Red API request after this many seconds. Unset waits forever.
    #[arg(long, env = "RED_API_TIMEOUT_SECS")]
    pub red_api_timeout_secs: Option<u64>,

    #[arg(long, env = "APP_ENV", value_enum, default_value_t = RuntimeMode::Development)]
    pub mode: RuntimeMode,
}

impl Config {
    pub fn red_api(&self) -> Result<RedApi, reqwest::Error> {
        RedApi::new(
            &self.red_api_url,
            self.red_api_timeout_secs.map(Duration::from_secs),
        )
    }
}
