//! Sequential probe-and-classify loop over a batch of input files.

use crate::classify::TierLadder;
use crate::external::FfprobeExecutor;
use crate::extract::{VideoRecord, extract_record};
use std::path::{Path, PathBuf};

/// Consumer of finished records, called once per input immediately after that
/// file's record is built so a presentation layer can render incrementally.
/// The core never depends on any specific UI; the CLI table is one
/// implementation of this trait.
pub trait RecordSink {
    fn record(&mut self, record: &VideoRecord);
}

/// No-op sink for callers that only want the returned batch.
impl RecordSink for () {
    fn record(&mut self, _record: &VideoRecord) {}
}

/// Probes and classifies each path in order, returning one record per input.
///
/// Strictly sequential in caller order. A probe failure for one file is
/// logged, degrades that file to [`VideoRecord::unavailable`], and never stops
/// the remaining files from being processed.
pub fn scan_videos<E, S>(
    executor: &E,
    ladder: &TierLadder,
    paths: &[PathBuf],
    sink: &mut S,
) -> Vec<VideoRecord>
where
    E: FfprobeExecutor,
    S: RecordSink,
{
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        let name = display_name(path);
        let record = match executor.probe(path) {
            Ok(probe) => extract_record(&name, &probe, ladder),
            Err(err) => {
                log::warn!("Failed to probe {}: {}", path.display(), err);
                VideoRecord::unavailable(name)
            }
        };
        sink.record(&record);
        records.push(record);
    }

    records
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
