//! Interactions with the external ffprobe tool.
//!
//! This module wraps the one subprocess boundary of the system behind the
//! [`FfprobeExecutor`] trait so that metadata extraction can be exercised with
//! synthetic probe output, independent of whether ffprobe is installed.

use crate::error::{CoreError, CoreResult};

use std::io;
use std::process::{Command, Stdio};

/// Contains the ffprobe stream model and executor implementations
pub mod ffprobe;

pub use ffprobe::{
    CommandFfprobe, FfprobeExecutor, ProbeOutput, ProbeStream, StreamTags, parse_probe_output,
};

/// Checks if a required external command is available and executable.
///
/// Runs the command with `-version` and discards its output. Used by callers
/// to warn early when ffprobe is missing; absence is never fatal here since a
/// per-file probe failure degrades that file's record anyway.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check for '{}': {}", cmd_name, e);
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
