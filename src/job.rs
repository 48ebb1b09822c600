// WHY: overwrite-in-place is a caller policy, so the job owns the destination choice
// The normalizer stays a pure string transform with no notion of "the same file"

use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

use crate::error::NormalizeError;
use crate::file_io::{read_text, write_text};
use crate::normalizer::Normalizer;
use crate::stats::JobReport;

/// One file to normalize and where the result goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeJob {
    input: PathBuf,
    destination: Option<PathBuf>,
}

impl NormalizeJob {
    /// `destination` of `None` overwrites `input`
    pub fn new(input: impl Into<PathBuf>, destination: Option<PathBuf>) -> Self {
        Self {
            input: input.into(),
            destination,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Where the normalized text is written
    pub fn output_path(&self) -> &Path {
        self.destination.as_deref().unwrap_or(self.input.as_path())
    }

    pub fn is_in_place(&self) -> bool {
        self.output_path() == self.input.as_path()
    }

    /// Read, normalize and write; nothing is written if the read fails
    pub async fn run(&self, normalizer: &Normalizer) -> Result<JobReport, NormalizeError> {
        let start_time = Instant::now();

        let original = read_text(&self.input).await?;
        let normalized = normalizer.normalize_with_stats(&original);

        let output_path = self.output_path();
        write_text(output_path, &normalized.text).await?;

        let report = JobReport::new(
            &self.input,
            output_path,
            normalized.stats,
            start_time.elapsed().as_millis() as u64,
        );

        info!(
            "Normalized {} -> {}: {} -> {} chars in {}ms",
            report.input_path,
            report.output_path,
            report.stats.original_chars,
            report.stats.normalized_chars,
            report.processing_time_ms
        );

        Ok(report)
    }
}
