use clap::Parser;
use std::path::PathBuf;

use fix_params::codemod::{self, MigrationOptions, DEFAULT_FILE_NAME, DEFAULT_ROOT};

mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "fix-params")]
#[command(version = VERSION)]
#[command(about = "Migrate route handlers from params.<field> to awaited params destructuring")]
struct Cli {
    /// Directory to scan for route files
    #[arg(long, default_value = DEFAULT_ROOT)]
    root: String,
    /// Base name (glob) of route files to migrate
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    file_name: String,
    /// Report what would change without writing files
    #[arg(long)]
    dry_run: bool,
    /// Leave files untouched when no `export async function ... { try {` block is found
    #[arg(long)]
    strict: bool,
    /// Print the full report as JSON instead of progress lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn options(&self) -> MigrationOptions {
        MigrationOptions {
            root: PathBuf::from(shellexpand::tilde(&self.root).into_owned()),
            file_name: self.file_name.clone(),
            dry_run: self.dry_run,
            strict: self.strict,
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let options = cli.options();

    let exit_code = if cli.json {
        let result = codemod::migrate(&options);
        let exit_code = match &result {
            Ok(_) => 0,
            Err(err) => output::exit_code_for_error(err.code),
        };
        if let Err(err) = output::print_result(&result) {
            output::print_error(&err);
            return std::process::ExitCode::from(1);
        }
        exit_code
    } else {
        match codemod::migrate_with(&options, output::print_event) {
            Ok(_) => {
                output::print_summary();
                0
            }
            Err(err) => {
                output::print_error(&err);
                output::exit_code_for_error(err.code)
            }
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
