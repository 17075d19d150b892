use std::env;
use std::process::Command;

use crate::error::{TaskHubError, TaskHubResult};

/// Open `$EDITOR` on a temp file seeded with `initial` and return the edited
/// text. `None` means the editor exited non-zero (user cancelled).
pub fn edit_text(initial: &str) -> TaskHubResult<Option<String>> {
    let temp_file = tempfile::Builder::new().suffix(".txt").tempfile()?;
    std::fs::write(temp_file.path(), initial)?;

    let editor = env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "vi".to_string());

    let status = Command::new(&editor)
        .arg(temp_file.path())
        .status()
        .map_err(|e| {
            TaskHubError::Unknown(format!("Failed to launch editor '{}': {}", editor, e))
        })?;

    if !status.success() {
        return Ok(None);
    }

    let edited = std::fs::read_to_string(temp_file.path())?;
    Ok(Some(edited.trim_end().to_string()))
}
