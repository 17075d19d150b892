use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::constants::{API_URL_ENV, CONFIG_FILE, DEFAULT_API_URL, TOKEN_ENV};
use crate::models::User;

/// Saved session state, the CLI's stand-in for the browser's local storage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub token: Option<String>,
    pub user: Option<User>,
    pub api_url: Option<String>,
    #[serde(default)]
    pub default_group_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            token: None,
            user: None,
            api_url: None,
            default_group_id: None,
        }
    }
}

pub fn load_config() -> Config {
    let home_dir = dirs::home_dir().expect("Could not find home directory");
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).expect("Failed to read config file");
        serde_json::from_str(&config_str).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

pub fn get_token() -> Result<String, Box<dyn std::error::Error>> {
    // First check environment variable
    if let Ok(token) = env::var(TOKEN_ENV) {
        return Ok(token);
    }

    // Then check config file
    let config = load_config();
    if let Some(token) = config.token {
        return Ok(token);
    }

    Err("Not logged in. Run 'taskhub login' or set TASKHUB_TOKEN.".into())
}

/// Base URL of the backend: env var, then config, then the compiled default.
pub fn api_base_url() -> String {
    if let Ok(url) = env::var(API_URL_ENV) {
        return url;
    }

    let config = load_config();
    config
        .api_url
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
