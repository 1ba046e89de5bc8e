//! Artifact persistence and capture bookkeeping.

use std::fs;
use std::path::PathBuf;

use image::RgbImage;
use serde::Serialize;
use tracing::debug;

use crate::env::FrameSnapshot;
use crate::error::HarnessError;

/// One successfully persisted screenshot.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenshotRecord {
    /// 1-based position in the target list
    pub index: usize,
    /// Frame count at the moment of capture
    pub frame: u64,
    /// Artifact filename under the output directory
    pub filename: String,
    /// Size on disk after encoding
    pub bytes: u64,
}

/// A PNG found in the output directory during the final re-scan.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactFile {
    pub filename: String,
    pub bytes: u64,
}

/// Converts raw frame snapshots into persisted PNG artifacts and keeps the
/// run's ordered manifest.
pub struct CaptureSink {
    output_dir: PathBuf,
    total_targets: usize,
    records: Vec<ScreenshotRecord>,
    quiet: bool,
}

impl CaptureSink {
    pub fn new(output_dir: impl Into<PathBuf>, total_targets: usize, quiet: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            total_targets,
            records: Vec::new(),
            quiet,
        }
    }

    /// Deterministic artifact name for capture `index` taken at `frame`.
    pub fn artifact_name(index: usize, frame: u64) -> String {
        format!("gameplay_{:02}_frame_{:04}.png", index, frame)
    }

    /// Encode `snapshot` to PNG as capture `index` taken at `frame`, append
    /// the record to the manifest, and emit the progress line.
    ///
    /// Any encoding or filesystem failure is fatal to the run: a partial or
    /// corrupt artifact set is unacceptable for a documentation harness.
    pub fn persist(
        &mut self,
        snapshot: &FrameSnapshot,
        index: usize,
        frame: u64,
    ) -> Result<(), HarnessError> {
        let filename = Self::artifact_name(index, frame);
        let path = self.output_dir.join(&filename);

        let img = RgbImage::from_raw(snapshot.width, snapshot.height, snapshot.pixels.clone())
            .ok_or_else(|| {
                HarnessError::Persistence(format!(
                    "frame {} buffer is {} bytes, expected {}",
                    frame,
                    snapshot.pixels.len(),
                    snapshot.expected_len()
                ))
            })?;
        img.save(&path)
            .map_err(|e| HarnessError::Persistence(format!("failed to write {}: {}", path.display(), e)))?;

        let bytes = fs::metadata(&path)
            .map_err(|e| HarnessError::Persistence(format!("failed to stat {}: {}", path.display(), e)))?
            .len();

        if !self.quiet {
            println!(
                "[Frame {:04}] Screenshot {}/{} saved: {}",
                frame, index, self.total_targets, filename
            );
        }
        debug!(frame, index, bytes, %filename, "screenshot persisted");

        self.records.push(ScreenshotRecord {
            index,
            frame,
            filename,
            bytes,
        });
        Ok(())
    }

    /// The in-memory manifest, in capture order.
    pub fn records(&self) -> &[ScreenshotRecord] {
        &self.records
    }

    /// Consume the sink, yielding the manifest.
    pub fn into_records(self) -> Vec<ScreenshotRecord> {
        self.records
    }

    /// List the PNG artifacts actually present in the output directory.
    ///
    /// The final report is driven by what is on disk, not by the in-memory
    /// manifest, so stale artifacts from earlier runs show up too. A missing
    /// output directory yields the empty listing.
    pub fn scan_artifacts(&self) -> Vec<ArtifactFile> {
        let mut found = Vec::new();
        let entries = match fs::read_dir(&self.output_dir) {
            Ok(entries) => entries,
            Err(_) => return found,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("png") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            found.push(ArtifactFile {
                filename: name.to_string(),
                bytes: meta.len(),
            });
        }
        found.sort_by(|a, b| a.filename.cmp(&b.filename));
        found
    }
}
