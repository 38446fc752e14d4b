//! Metadata extraction: from raw ffprobe output to one [`VideoRecord`].
//!
//! Extraction never fails. Any parse anomaly degrades the corresponding field
//! to absent/empty instead of aborting, so a malformed file still produces a
//! (mostly empty) record.

use crate::classify::{QualityTier, TierLadder};
use crate::external::{ProbeOutput, ProbeStream};
use serde::Serialize;

/// Normalized metadata for one probed file. Created fresh per file, populated
/// once, then handed to the presentation layer; never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct VideoRecord {
    /// Base name of the file, for presentation only.
    pub display_name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Decimal frame rate string derived from ffprobe's rational, e.g.
    /// "23.976" or "30". Absent when the rational is 0/0 or unparsable.
    pub frame_rate: Option<String>,
    pub video_codec: Option<String>,
    /// One label per audio stream, in report order: "eng (aac)" or bare "eng".
    pub audio_tracks: Vec<String>,
    /// One label per subtitle stream, in report order.
    pub subtitle_tracks: Vec<String>,
    /// `Unknown` exactly when `width` is absent.
    pub quality: QualityTier,
}

impl VideoRecord {
    /// The all-absent record used when probing failed entirely.
    pub fn unavailable(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            width: None,
            height: None,
            frame_rate: None,
            video_codec: None,
            audio_tracks: Vec::new(),
            subtitle_tracks: Vec::new(),
            quality: QualityTier::Unknown,
        }
    }

    /// Resolution as "WxH" when both dimensions are known.
    pub fn resolution(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{w}x{h}")),
            _ => None,
        }
    }
}

/// Builds a record from probe output. The first video stream supplies
/// width/height/codec/frame-rate; every audio and subtitle stream contributes
/// one track label, in the order ffprobe reports them.
pub fn extract_record(display_name: &str, probe: &ProbeOutput, ladder: &TierLadder) -> VideoRecord {
    let mut record = VideoRecord::unavailable(display_name);
    let mut video_seen = false;

    for stream in &probe.streams {
        match stream.codec_type.as_deref() {
            Some("video") if !video_seen => {
                video_seen = true;
                record.width = dimension(stream.width);
                record.height = dimension(stream.height);
                record.video_codec = stream.codec_name.clone();
                record.frame_rate = stream.avg_frame_rate.as_deref().and_then(format_frame_rate);
            }
            Some("audio") => record.audio_tracks.push(track_label(stream)),
            Some("subtitle") => record.subtitle_tracks.push(track_label(stream)),
            _ => {}
        }
    }

    if let Some(width) = record.width {
        record.quality = ladder.classify(width);
    }

    record
}

fn dimension(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

/// "<language> (<codec>)", or the bare language when the codec is unknown.
/// Untagged streams default to "und", matching ffprobe's own convention.
fn track_label(stream: &ProbeStream) -> String {
    let language = stream
        .tags
        .as_ref()
        .and_then(|t| t.language.as_deref())
        .unwrap_or("und");
    match stream.codec_name.as_deref() {
        Some(codec) => format!("{language} ({codec})"),
        None => language.to_string(),
    }
}

/// Derives a decimal frame rate from ffprobe's "num/den" rational.
///
/// Formats to 3 fractional digits and strips trailing zeros, so 24000/1001
/// becomes "23.976" and 30/1 becomes "30". Returns None for a zero
/// denominator or anything that is not two integers split by '/'.
fn format_frame_rate(raw: &str) -> Option<String> {
    let (num, den) = raw.split_once('/')?;
    let num: i64 = num.trim().parse().ok()?;
    let den: i64 = den.trim().parse().ok()?;
    if den == 0 {
        return None;
    }

    let mut text = format!("{:.3}", num as f64 / den as f64);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    Some(text)
}
