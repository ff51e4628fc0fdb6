//! Scan → detect → rewrite → write pipeline over a route tree.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::utils::io;

use super::detect::{detect, Detection};
use super::fields::ParamField;
use super::rewrite::rewrite;
use super::walker::find_route_files;

pub const DEFAULT_ROOT: &str = "app/api";
pub const DEFAULT_FILE_NAME: &str = "route.ts";

/// Run configuration. `Default` is the zero-argument invocation.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    pub root: PathBuf,
    /// Glob matched against each file's base name.
    pub file_name: String,
    /// Rewrite in memory only; never touch disk.
    pub dry_run: bool,
    /// Leave files untouched when their handler anchor is missing.
    pub strict: bool,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            file_name: DEFAULT_FILE_NAME.to_string(),
            dry_run: false,
            strict: false,
        }
    }
}

impl MigrationOptions {
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::validation_missing_argument(vec!["root".to_string()]));
        }
        if self.file_name.trim().is_empty() {
            return Err(Error::validation_invalid_argument(
                "file_name",
                "File name pattern cannot be empty",
            ));
        }
        if self.file_name.contains('/') {
            return Err(Error::validation_invalid_argument(
                "file_name",
                format!(
                    "'{}' contains a path separator; it is matched against base names only",
                    self.file_name
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Rewritten and written back.
    Fixed,
    /// Would be rewritten (dry run).
    WouldFix,
    AlreadyMigrated,
    NoParams,
    /// Strict mode: needs migration but has no handler anchor.
    AnchorMissing,
}

impl FileStatus {
    pub fn is_change(&self) -> bool {
        matches!(self, FileStatus::Fixed | FileStatus::WouldFix)
    }
}

/// What happened to one scanned file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: String,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ParamField>,
    pub replacements: usize,
    pub anchor_found: bool,
}

impl FileOutcome {
    fn skipped(path: &Path, status: FileStatus) -> Self {
        Self {
            path: path.display().to_string(),
            status,
            fields: Vec::new(),
            replacements: 0,
            anchor_found: false,
        }
    }
}

/// The full result of a migration run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub root: String,
    pub dry_run: bool,
    /// Route files found by the walker.
    pub total_files: usize,
    /// Files written (or that would be, in a dry run).
    pub fixed: usize,
    pub skipped: usize,
    /// Files needing migration whose anchor was not found, in either mode.
    pub anchor_missing: usize,
    pub files: Vec<FileOutcome>,
}

/// Progress notifications emitted while the pipeline runs.
#[derive(Debug)]
pub enum MigrationEvent<'a> {
    /// Walk finished; this many candidate files will be processed.
    Found(usize),
    /// One file fully processed (and written, if applicable).
    File(&'a FileOutcome),
}

/// Run the migration without progress callbacks.
pub fn migrate(options: &MigrationOptions) -> Result<MigrationReport> {
    migrate_with(options, |_| {})
}

/// Run the migration, reporting progress as each file completes.
///
/// Files are processed one at a time; the first I/O error aborts the run and
/// leaves already-written files in place.
pub fn migrate_with<F>(options: &MigrationOptions, mut on_event: F) -> Result<MigrationReport>
where
    F: FnMut(MigrationEvent<'_>),
{
    options.validate()?;

    log_status!("scan", "Walking {} for {}", options.root.display(), options.file_name);
    let paths = find_route_files(&options.root, &options.file_name)?;
    on_event(MigrationEvent::Found(paths.len()));

    let mut files = Vec::with_capacity(paths.len());
    for path in &paths {
        let outcome = process_file(path, options)?;
        on_event(MigrationEvent::File(&outcome));
        files.push(outcome);
    }

    let fixed = files.iter().filter(|f| f.status.is_change()).count();
    let anchor_missing = files
        .iter()
        .filter(|f| !f.fields.is_empty() && !f.anchor_found)
        .count();

    Ok(MigrationReport {
        root: options.root.display().to_string(),
        dry_run: options.dry_run,
        total_files: paths.len(),
        fixed,
        skipped: files.len() - fixed,
        anchor_missing,
        files,
    })
}

/// Detect, rewrite and (unless dry-run) persist a single file.
pub fn process_file(path: &Path, options: &MigrationOptions) -> Result<FileOutcome> {
    let content = io::read_file(path, "read route file")?;

    let fields = match detect(&content) {
        Detection::AlreadyMigrated => {
            log_status!("skip", "{} already awaits params", path.display());
            return Ok(FileOutcome::skipped(path, FileStatus::AlreadyMigrated));
        }
        Detection::NoParams => return Ok(FileOutcome::skipped(path, FileStatus::NoParams)),
        Detection::Fields(fields) => fields,
    };

    let result = rewrite(&content, &fields);

    let mut outcome = FileOutcome {
        path: path.display().to_string(),
        status: FileStatus::Fixed,
        fields,
        replacements: result.replacements,
        anchor_found: result.anchor_found,
    };

    if !result.anchor_found {
        log_status!(
            "rewrite",
            "{}: no `export async function ... {{ try {{` block for the params declaration",
            outcome.path
        );
        log_status!(
            "rewrite",
            "  Add the declaration by hand or wrap the handler body in a try block"
        );

        if options.strict {
            outcome.status = FileStatus::AnchorMissing;
            outcome.replacements = 0;
            return Ok(outcome);
        }
    }

    // Detected fields always produce at least one replacement, so the content differs here.
    if options.dry_run {
        outcome.status = FileStatus::WouldFix;
    } else {
        io::write_file(path, &result.content, "write route file")?;
    }

    Ok(outcome)
}
