//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("{} ({})", operation, path.display())),
        )
    })
}

/// Write content to file with standardized error handling.
///
/// Full replacement of the file contents; no temp file, no backup.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("{} ({})", operation, path.display())),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "export async function GET() {{}}").unwrap();

        let content = read_file(temp.path(), "read route").unwrap();
        assert!(content.contains("export async function GET"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/route.ts"), "read route");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
        assert!(err.details["context"]
            .as_str()
            .unwrap()
            .contains("/nonexistent/route.ts"));
    }

    #[test]
    fn write_file_replaces_contents() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "old content that is longer").unwrap();

        write_file(temp.path(), "new", "write route").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "new");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(Path::new("/nonexistent/dir/route.ts"), "content", "write route");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
