// src/config.rs
use std::env;

use anyhow::Context;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_PORT: u16 = 3000;

/// Process configuration, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;
        let api_base =
            env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT is not a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { api_key, api_base, port })
    }
}
