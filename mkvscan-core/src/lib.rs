//! Core library for inspecting video files with ffprobe.
//!
//! This crate probes each input file once, extracts the metadata of its first
//! video stream along with audio and subtitle track labels, and classifies a
//! quality tier ("4K" down to "SD") from the pixel width. Probe failures never
//! abort a batch: the affected file degrades to an all-absent record with an
//! "Unknown" tier.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mkvscan_core::{CommandFfprobe, TierLadder, scan_videos};
//! use std::path::PathBuf;
//!
//! let paths = vec![PathBuf::from("/path/to/movie.mkv")];
//! let records = scan_videos(
//!     &CommandFfprobe::new(),
//!     &TierLadder::default(),
//!     &paths,
//!     &mut (),
//! );
//! for record in records {
//!     println!("{}: {}", record.display_name, record.quality);
//! }
//! ```

pub mod classify;
pub mod discovery;
pub mod error;
pub mod external;
pub mod extract;
pub mod processing;

// Re-exports for public API
pub use classify::{QualityTier, TierLadder};
pub use discovery::find_processable_files;
pub use error::{CoreError, CoreResult};
pub use external::{
    CommandFfprobe, FfprobeExecutor, ProbeOutput, ProbeStream, StreamTags, check_dependency,
    parse_probe_output,
};
pub use extract::{VideoRecord, extract_record};
pub use processing::{RecordSink, scan_videos};
