//! Rules for client-supplied upload file names.

use crate::error::CoreError;

/// Longest file name accepted for an upload.
pub const MAX_FILENAME_LEN: usize = 200;

/// Check that `name` is a bare file name that cannot escape the upload
/// directory. Returns the name unchanged on success.
pub fn validate_filename(name: &str) -> Result<&str, CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Uploaded file has no file name".into()));
    }
    if name.len() > MAX_FILENAME_LEN {
        return Err(CoreError::Validation(format!(
            "File name must not exceed {MAX_FILENAME_LEN} bytes"
        )));
    }
    if name == "." || name == ".." {
        return Err(CoreError::Validation(format!("Invalid file name '{name}'")));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(CoreError::Validation(format!(
            "File name '{}' must not contain path separators",
            name.escape_default()
        )));
    }
    Ok(name)
}
