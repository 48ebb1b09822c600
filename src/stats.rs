// WHY: length metrics are derived from one transform so any caller can report them
// Run-level stats are written as JSON alongside the human-readable summary

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::info;

/// Length metrics of a single normalization, counted in characters
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Characters in the input text, with each `\r\n` pair counted as one
    pub original_chars: usize,
    /// Characters in the normalized text
    pub normalized_chars: usize,
    /// Line breaks removed from the input; `\r\n`, `\n` and `\r` each count once
    pub line_breaks: usize,
    /// Line breaks inserted before markers
    pub markers_segmented: usize,
}

impl NormalizeStats {
    /// Literal `original - normalized`; negative when inserted breaks outnumber removed whitespace
    pub fn chars_difference(&self) -> i64 {
        self.original_chars as i64 - self.normalized_chars as i64
    }
}

/// Outcome of one file normalization
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JobReport {
    pub input_path: String,
    pub output_path: String,
    /// True when the input file was overwritten
    pub in_place: bool,
    pub stats: NormalizeStats,
    /// Same value as `stats.chars_difference()`
    pub chars_difference: i64,
    pub processing_time_ms: u64,
}

impl JobReport {
    pub fn new(
        input_path: &Path,
        output_path: &Path,
        stats: NormalizeStats,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            input_path: input_path.display().to_string(),
            output_path: output_path.display().to_string(),
            in_place: input_path == output_path,
            stats,
            chars_difference: stats.chars_difference(),
            processing_time_ms,
        }
    }

    /// Human-readable report, one line per metric
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Processed file: {}", self.input_path),
            format!("Output file: {}", self.output_path),
            format!("Original length: {} characters", self.stats.original_chars),
            format!("Normalized length: {} characters", self.stats.normalized_chars),
            format!("Characters removed: {}", self.chars_difference),
            format!("Line breaks removed: {}", self.stats.line_breaks),
            format!("Markers segmented: {}", self.stats.markers_segmented),
        ]
    }
}

/// Write the report as pretty-printed JSON
pub async fn write_stats_json(path: &Path, report: &JobReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize run stats")?;

    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create stats file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    info!("Wrote run stats to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_stats() -> NormalizeStats {
        NormalizeStats {
            original_chars: 40,
            normalized_chars: 35,
            line_breaks: 4,
            markers_segmented: 2,
        }
    }

    #[test]
    fn test_chars_difference_signed() {
        assert_eq!(sample_stats().chars_difference(), 5);

        let grown = NormalizeStats {
            original_chars: 6,
            normalized_chars: 7,
            line_breaks: 0,
            markers_segmented: 1,
        };
        assert_eq!(grown.chars_difference(), -1);
    }

    #[test]
    fn test_report_in_place_detection() {
        let input = PathBuf::from("book.txt");
        let same = JobReport::new(&input, &input, sample_stats(), 3);
        assert!(same.in_place);

        let other = JobReport::new(&input, Path::new("out.txt"), sample_stats(), 3);
        assert!(!other.in_place);
        assert_eq!(other.chars_difference, 5);
    }

    #[test]
    fn test_summary_lines() {
        let report = JobReport::new(Path::new("in.txt"), Path::new("out.txt"), sample_stats(), 0);
        let lines = report.summary_lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Processed file: in.txt");
        assert_eq!(lines[1], "Output file: out.txt");
        assert!(lines.contains(&"Characters removed: 5".to_string()));
        assert!(lines.contains(&"Markers segmented: 2".to_string()));
    }

    #[tokio::test]
    async fn test_write_stats_json() {
        let temp_dir = TempDir::new().unwrap();
        let stats_path = temp_dir.path().join("run_stats.json");
        let report = JobReport::new(Path::new("in.txt"), Path::new("in.txt"), sample_stats(), 12);

        write_stats_json(&stats_path, &report).await.unwrap();

        let content = std::fs::read_to_string(&stats_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["in_place"], true);
        assert_eq!(value["chars_difference"], 5);
        assert_eq!(value["stats"]["original_chars"], 40);
        assert_eq!(value["stats"]["markers_segmented"], 2);
        assert_eq!(value["processing_time_ms"], 12);
    }
}
