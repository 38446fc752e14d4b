// mkvscan-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Mkvscan: video resolution and quality checker",
    long_about = "Probes video files with ffprobe and reports resolution, frame rate, \
                  codec, track languages, and an estimated quality tier."
)]
pub struct Cli {
    /// Video files to inspect, or directories to scan for .mkv files
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Emit records as a JSON array instead of a table
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable detailed logging output")]
    pub verbose: bool,
}
