//! Route file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Collect every file under `root` whose base name matches `file_name`.
///
/// `file_name` is a glob (`route.ts`, `route.{ts,js}`) matched against the
/// base name only. Entries are visited depth-first in sorted order so runs are
/// reproducible. Symlinked directories are not followed. Any unreadable
/// directory aborts the walk.
pub fn find_route_files(root: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_recursive(root, file_name, &mut files)?;
    Ok(files)
}

fn walk_recursive(dir: &Path, file_name: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read directory {}", dir.display())))
    })?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("read directory {}", dir.display())))
        })?;
        // `file_type` does not follow symlinks, so linked directories are never descended.
        let is_dir = entry
            .file_type()
            .map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("stat {}", entry.path().display())))
            })?
            .is_dir();
        children.push((entry.path(), is_dir));
    }
    children.sort();

    for (path, is_dir) in children {
        if is_dir {
            walk_recursive(&path, file_name, files)?;
        } else if matches_file_name(&path, file_name) {
            files.push(path);
        }
    }

    Ok(())
}

fn matches_file_name(path: &Path, file_name: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| glob_match::glob_match(file_name, name))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn finds_nested_route_files_in_sorted_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "quizzes/[quizId]/route.ts");
        touch(dir.path(), "courses/[courseId]/chapters/route.ts");
        touch(dir.path(), "courses/route.ts");
        touch(dir.path(), "courses/page.tsx");
        touch(dir.path(), "courses/route.ts.bak");

        let files = find_route_files(dir.path(), "route.ts").unwrap();
        let rel: Vec<String> = files
            .iter()
            .map(|f| f.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(
            rel,
            vec![
                "courses/[courseId]/chapters/route.ts",
                "courses/route.ts",
                "quizzes/[quizId]/route.ts",
            ]
        );
    }

    #[test]
    fn empty_tree_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(find_route_files(dir.path(), "route.ts").unwrap().is_empty());
    }

    #[test]
    fn glob_file_name_matches_alternatives() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/route.js");
        touch(dir.path(), "b/route.ts");
        touch(dir.path(), "c/route.tsx");

        let files = find_route_files(dir.path(), "route.{ts,js}").unwrap();
        assert_eq!(files.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_followed() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a/route.ts");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("a/loop")).unwrap();

        let files = find_route_files(dir.path(), "route.ts").unwrap();
        assert_eq!(files, vec![dir.path().join("a/route.ts")]);
    }

    #[test]
    fn missing_root_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = find_route_files(&dir.path().join("app/api"), "route.ts").unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
