//! FFprobe invocation and its JSON stream model.

use crate::error::{CoreError, CoreResult};
use serde::Deserialize;
use std::io;
use std::path::Path;
use std::process::Command;

/// Fields requested from ffprobe for every stream.
const STREAM_ENTRIES: &str =
    "stream=index,codec_type,codec_name,width,height,avg_frame_rate:stream_tags=language";

/// Top-level ffprobe JSON output, limited to the stream list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

/// One stream entry as reported by ffprobe. All fields are optional since
/// ffprobe omits whatever does not apply to a given stream type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeStream {
    pub index: Option<i64>,
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub avg_frame_rate: Option<String>,
    pub tags: Option<StreamTags>,
}

/// Per-stream tags; only the language tag is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamTags {
    pub language: Option<String>,
}

/// Trait for executing ffprobe against a media file.
///
/// Production code uses [`CommandFfprobe`]; tests substitute an implementation
/// returning canned [`ProbeOutput`] values or errors.
pub trait FfprobeExecutor {
    fn probe(&self, input_path: &Path) -> CoreResult<ProbeOutput>;
}

/// FFprobe executor that shells out to the `ffprobe` binary.
///
/// One synchronous invocation per file, no temp files, no caching.
#[derive(Debug, Clone, Default)]
pub struct CommandFfprobe;

impl CommandFfprobe {
    pub fn new() -> Self {
        Self
    }
}

impl FfprobeExecutor for CommandFfprobe {
    fn probe(&self, input_path: &Path) -> CoreResult<ProbeOutput> {
        log::debug!("Running ffprobe on: {}", input_path.display());

        let output = Command::new("ffprobe")
            .args(["-v", "error", "-print_format", "json", "-show_entries", STREAM_ENTRIES])
            .arg(input_path)
            .output()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    CoreError::DependencyNotFound("ffprobe".to_string())
                } else {
                    CoreError::CommandStart("ffprobe".to_string(), e)
                }
            })?;

        if !output.status.success() {
            return Err(CoreError::CommandFailed {
                tool: "ffprobe".to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        parse_probe_output(&output.stdout)
    }
}

/// Parses raw ffprobe stdout into the stream model.
pub fn parse_probe_output(raw: &[u8]) -> CoreResult<ProbeOutput> {
    serde_json::from_slice(raw)
        .map_err(|e| CoreError::JsonParse(format!("ffprobe stream output: {e}")))
}
