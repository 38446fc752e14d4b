// mkvscan-cli/src/main.rs
//
// Entry point for the mkvscan CLI.
//
// Responsibilities include:
// - Parsing command-line arguments (`Cli`).
// - Setting up logging via env_logger.
// - Expanding directory arguments into .mkv file lists.
// - Running the probe/classify pipeline from mkvscan-core over each file.
// - Rendering results as a terminal table or JSON.
// - Managing the process exit code.

mod cli;
mod output;

use clap::Parser;
use cli::Cli;
use mkvscan_core::{
    CommandFfprobe, CoreError, TierLadder, check_dependency, find_processable_files, scan_videos,
};
use output::{TableSink, print_error};
use std::path::PathBuf;
use std::process;

fn main() {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(err) = run(args) {
        print_error(&err.to_string());
        process::exit(1);
    }
}

fn run(args: Cli) -> Result<(), CoreError> {
    let files = collect_input_files(&args.paths)?;

    // Warn once up front; a missing ffprobe degrades every file to an
    // all-placeholder row rather than aborting.
    if check_dependency("ffprobe").is_err() {
        log::warn!("ffprobe not found on PATH; all files will be reported as Unknown");
    }

    let executor = CommandFfprobe::new();
    let ladder = TierLadder::default();

    if args.json {
        let records = scan_videos(&executor, &ladder, &files, &mut ());
        let text = serde_json::to_string_pretty(&records)
            .map_err(|e| CoreError::JsonParse(format!("record serialization: {e}")))?;
        println!("{text}");
    } else {
        let mut sink = TableSink::new(!args.no_color);
        scan_videos(&executor, &ladder, &files, &mut sink);
    }

    Ok(())
}

/// Expands directory arguments into their .mkv contents; file arguments pass
/// through untouched (the probe itself is the only path validation).
fn collect_input_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CoreError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            match find_processable_files(path) {
                Ok(found) => files.extend(found),
                Err(CoreError::NoFilesFound) => {
                    log::warn!("No .mkv files found in {}", path.display());
                }
                Err(err) => return Err(err),
            }
        } else {
            files.push(path.clone());
        }
    }

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }
    Ok(files)
}
