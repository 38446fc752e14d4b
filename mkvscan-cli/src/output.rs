// mkvscan-cli/src/output.rs
//
// Terminal rendering of scan results. TableSink is the CLI's implementation
// of the core's RecordSink trait, printing one aligned row per record as it
// arrives so partial results are visible while a batch is still running.

use mkvscan_core::{QualityTier, RecordSink, VideoRecord};
use owo_colors::OwoColorize;

/// Placeholder for every absent field.
pub const PLACEHOLDER: &str = "-";

/// Renders records as an aligned terminal table.
pub struct TableSink {
    colored: bool,
    header_printed: bool,
}

impl TableSink {
    pub fn new(colored: bool) -> Self {
        Self {
            colored,
            header_printed: false,
        }
    }

    fn print_header(&self) {
        let header = format!(
            "{:<32} {:>10} {:>8} {:>8} {:<10} {:<24} {}",
            "File", "Resolution", "Quality", "FPS", "Codec", "Audio", "Subtitles"
        );
        if self.colored {
            println!("{}", header.bold());
        } else {
            println!("{header}");
        }
        println!("{}", "-".repeat(header.len()));
    }

    /// Pads before coloring so ANSI codes do not break column alignment.
    fn tier_cell(&self, tier: QualityTier) -> String {
        let text = format!("{:>8}", tier.as_str());
        if !self.colored {
            return text;
        }
        match tier {
            QualityTier::FourK => text.magenta().to_string(),
            QualityTier::TwoK => text.blue().to_string(),
            QualityTier::Fhd => text.green().to_string(),
            QualityTier::Hd => text.cyan().to_string(),
            QualityTier::Sd => text.yellow().to_string(),
            QualityTier::Unknown => text.red().to_string(),
        }
    }
}

impl RecordSink for TableSink {
    fn record(&mut self, record: &VideoRecord) {
        if !self.header_printed {
            self.print_header();
            self.header_printed = true;
        }

        println!(
            "{:<32} {:>10} {} {:>8} {:<10} {:<24} {}",
            record.display_name,
            cell(record.resolution()),
            self.tier_cell(record.quality),
            cell(record.frame_rate.clone()),
            cell(record.video_codec.clone()),
            tracks_cell(&record.audio_tracks),
            tracks_cell(&record.subtitle_tracks),
        );
    }
}

fn cell(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn tracks_cell(tracks: &[String]) -> String {
    if tracks.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        tracks.join(", ")
    }
}

/// Print an error message with red styling
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
