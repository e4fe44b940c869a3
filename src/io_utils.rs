use std::io;
use std::path::Path;

use crate::BuildToolError;

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The input must be UTF-8 text.",
        NotADirectory => "Pass the directory holding the annotation files.",
        _ => "Check the path and try again.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Attach the failed operation and path to an I/O error.
pub fn fs_error(operation: &'static str, path: &Path, err: io::Error) -> BuildToolError {
    BuildToolError::Filesystem {
        operation,
        path: path.to_path_buf(),
        source: err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_has_hint() {
        let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let msg = format_io_error("reading input file", Path::new("data/en.xml"), &err);
        assert!(msg.starts_with("Error reading input file 'data/en.xml'"));
        assert!(msg.contains("Check that the file exists"));
    }

    #[test]
    fn fs_error_displays_context() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = fs_error("scanning directory", Path::new("/annotations"), err);
        let msg = err.to_string();
        assert!(msg.contains("scanning directory '/annotations'"));
        assert!(msg.contains("Check permissions"));
    }
}
