//! Params codemod — migrate route handlers to awaited params.
//!
//! Walks a route tree, finds handlers reading `params.<field>` synchronously,
//! inserts `const { ... } = await params` into the handler's `try` block and
//! rewrites each access to the bare name. Text-based; no parsing.

mod detect;
mod fields;
mod migrate;
mod rewrite;
mod walker;

pub use detect::{detect, Detection, MIGRATED_MARKER};
pub use fields::ParamField;
pub use migrate::{
    migrate, migrate_with, process_file, FileOutcome, FileStatus, MigrationEvent,
    MigrationOptions, MigrationReport, DEFAULT_FILE_NAME, DEFAULT_ROOT,
};
pub use rewrite::{build_declaration, insert_declaration, replace_accesses, rewrite, Rewrite};
pub use walker::find_route_files;
