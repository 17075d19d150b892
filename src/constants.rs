pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";
pub const CONFIG_FILE: &str = ".taskhub-config.json";

// Environment overrides, checked before the config file
pub const TOKEN_ENV: &str = "TASKHUB_TOKEN";
pub const API_URL_ENV: &str = "TASKHUB_API_URL";
