use crate::error::{ErrorContext, TaskHubError};
use crate::taskhub_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let taskhub_result = result.context("Failed to read config file");
    assert!(taskhub_result.is_err());

    match taskhub_result {
        Err(TaskHubError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected TaskHubError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Token not found");

    assert!(result.is_err());
    match result {
        Err(TaskHubError::Unknown(msg)) => {
            assert_eq!(msg, "Token not found");
        }
        _ => panic!("Expected TaskHubError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied",
    ));

    let taskhub_result =
        result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.txt"));

    assert!(taskhub_result.is_err());
    match taskhub_result {
        Err(TaskHubError::Unknown(msg)) => {
            assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected TaskHubError::Unknown"),
    }
}

#[test]
fn test_taskhub_error_macro() {
    let error = taskhub_error!(ConfigError, "Bad config");
    match error {
        TaskHubError::ConfigError(msg) => assert_eq!(msg, "Bad config"),
        _ => panic!("Expected TaskHubError::ConfigError"),
    }

    let error = taskhub_error!(InvalidInput, "Invalid status: {}", "blocked");
    match error {
        TaskHubError::InvalidInput(msg) => assert_eq!(msg, "Invalid status: blocked"),
        _ => panic!("Expected TaskHubError::InvalidInput"),
    }
}

#[test]
fn test_api_error_display() {
    let error = TaskHubError::api(404, "group not found");
    let rendered = error.to_string();
    assert!(rendered.contains("404"));
    assert!(rendered.contains("group not found"));
}
