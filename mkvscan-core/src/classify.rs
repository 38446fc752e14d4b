//! Quality tier classification from pixel width.

use serde::Serialize;
use std::fmt;

/// Human-readable quality tier derived from the width of the first video
/// stream. `Unknown` is only ever produced when the width itself is absent;
/// [`TierLadder::classify`] never returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualityTier {
    #[serde(rename = "4K")]
    FourK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "FHD")]
    Fhd,
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "SD")]
    Sd,
    Unknown,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::FourK => "4K",
            QualityTier::TwoK => "2K",
            QualityTier::Fhd => "FHD",
            QualityTier::Hd => "HD",
            QualityTier::Sd => "SD",
            QualityTier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Ordered width-threshold table mapping pixel width to a quality tier.
///
/// Rungs are consulted top to bottom; the first whose minimum width is at or
/// below the probed width wins. The table is an injected value rather than a
/// hidden static so alternate tier schemes can be tested without touching the
/// classification logic.
#[derive(Debug, Clone)]
pub struct TierLadder {
    rungs: Vec<(u32, QualityTier)>,
}

impl Default for TierLadder {
    fn default() -> Self {
        Self::new(vec![
            (3840, QualityTier::FourK),
            (2560, QualityTier::TwoK),
            (1920, QualityTier::Fhd),
            (1280, QualityTier::Hd),
            (0, QualityTier::Sd),
        ])
    }
}

impl TierLadder {
    pub fn new(rungs: Vec<(u32, QualityTier)>) -> Self {
        Self { rungs }
    }

    /// Returns the tier for the given width. Total over u32: a ladder whose
    /// last rung has minimum 0 always matches, and a ladder without one falls
    /// back to `SD`.
    pub fn classify(&self, width: u32) -> QualityTier {
        self.rungs
            .iter()
            .find(|(min_width, _)| width >= *min_width)
            .map(|(_, tier)| *tier)
            .unwrap_or(QualityTier::Sd)
    }
}
