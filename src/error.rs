#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskHubError {
    #[error("Not logged in. Run 'taskhub login' or set TASKHUB_TOKEN.")]
    TokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl TaskHubError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        TaskHubError::ApiError {
            status,
            message: message.into(),
        }
    }
}

pub type TaskHubResult<T> = Result<T, TaskHubError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> TaskHubResult<T>;
    fn with_context<F>(self, f: F) -> TaskHubResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> TaskHubResult<T> {
        self.map_err(|e| TaskHubError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> TaskHubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TaskHubError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> TaskHubResult<T> {
        self.ok_or_else(|| TaskHubError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> TaskHubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| TaskHubError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! taskhub_error {
    ($error_type:ident, $msg:expr) => {
        TaskHubError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        TaskHubError::$error_type(format!($fmt, $($arg)*))
    };
}
