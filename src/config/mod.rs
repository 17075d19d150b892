pub mod config;

pub use config::{api_base_url, get_token, load_config, save_config, Config};
